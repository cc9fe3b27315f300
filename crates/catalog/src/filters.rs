//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use mainmarket_core::types::price::group_thousands;

use crate::stars::star_rating;

/// Formats an integer naira amount with thousands grouping.
///
/// Usage in templates: `{{ product.price|naira }}`
#[askama::filter_fn]
pub fn naira(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = amount.to_string();
    Ok(raw
        .parse::<i64>()
        .map_or_else(|_| format!("₦{raw}"), |n| format!("₦{}", group_thousands(n))))
}

/// Renders a 0-5 rating as a five-glyph star row.
///
/// Usage in templates: `{{ product.rating|stars }}`
#[askama::filter_fn]
pub fn stars(rating: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let parsed = rating.to_string().parse::<f32>().unwrap_or(0.0);
    Ok(star_rating(parsed))
}
