//! Star rating rows.

use core::fmt;

/// Total glyphs in a star row.
pub const ROW_LENGTH: u8 = 5;

const FULL_STAR: char = '★';
const HALF_STAR: char = '⯪';
const EMPTY_STAR: char = '☆';

/// A 0-5 rating mapped onto a five-glyph star row.
///
/// `floor(rating)` full stars, one half star iff the fractional part is
/// nonzero, empty stars for the rest. The row always has exactly five
/// glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    full: u8,
    half: bool,
}

impl StarRating {
    /// Map a continuous rating onto the row. Out-of-range input is clamped.
    #[must_use]
    pub fn from_rating(rating: f32) -> Self {
        let clamped = rating.clamp(0.0, 5.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let full = clamped.floor() as u8;
        Self {
            full,
            half: clamped.fract() != 0.0,
        }
    }

    /// Number of full stars.
    #[must_use]
    pub const fn full(self) -> u8 {
        self.full
    }

    /// Whether the row contains a half star.
    #[must_use]
    pub const fn half(self) -> bool {
        self.half
    }

    /// Number of empty stars filling out the row.
    #[must_use]
    pub const fn empty(self) -> u8 {
        ROW_LENGTH - self.full - self.half as u8
    }

    /// The five-glyph row, e.g. `★★★★⯪` for 4.5.
    #[must_use]
    pub fn glyphs(self) -> String {
        let mut row = String::with_capacity(ROW_LENGTH as usize * FULL_STAR.len_utf8());
        for _ in 0..self.full {
            row.push(FULL_STAR);
        }
        if self.half {
            row.push(HALF_STAR);
        }
        for _ in 0..self.empty() {
            row.push(EMPTY_STAR);
        }
        row
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyphs())
    }
}

/// Convenience wrapper rendering straight to the glyph row.
#[must_use]
pub fn star_rating(rating: f32) -> String {
    StarRating::from_rating(rating).glyphs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_is_always_five_glyphs() {
        for tenths in 0..=50 {
            #[allow(clippy::cast_precision_loss)]
            let rating = tenths as f32 / 10.0;
            let row = star_rating(rating);
            assert_eq!(row.chars().count(), 5, "rating {rating}");
        }
    }

    #[test]
    fn test_split_matches_floor_and_fraction() {
        let rating = StarRating::from_rating(4.5);
        assert_eq!(rating.full(), 4);
        assert!(rating.half());
        assert_eq!(rating.empty(), 0);

        let rating = StarRating::from_rating(3.0);
        assert_eq!(rating.full(), 3);
        assert!(!rating.half());
        assert_eq!(rating.empty(), 2);

        let rating = StarRating::from_rating(0.2);
        assert_eq!(rating.full(), 0);
        assert!(rating.half());
        assert_eq!(rating.empty(), 4);
    }

    #[test]
    fn test_boundary_ratings() {
        assert_eq!(star_rating(0.0), "☆☆☆☆☆");
        assert_eq!(star_rating(5.0), "★★★★★");
        assert_eq!(star_rating(4.5), "★★★★⯪");
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(star_rating(-1.0), star_rating(0.0));
        assert_eq!(star_rating(9.0), star_rating(5.0));
    }
}
