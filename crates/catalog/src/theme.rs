//! Theme preference.

use core::fmt;

use mainmarket_core::storage::keys;
use mainmarket_core::{KvStore, StorageError};

/// Page color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The value persisted under the `theme` storage key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve the active theme.
///
/// A stored `"dark"` wins; any other stored value means light; with nothing
/// stored the OS dark-mode hint decides.
///
/// # Errors
///
/// Returns an error if storage cannot be read.
pub fn load(store: &impl KvStore, prefers_dark: bool) -> Result<Theme, StorageError> {
    Ok(match store.get(keys::THEME)?.as_deref() {
        Some("dark") => Theme::Dark,
        Some(_) => Theme::Light,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    })
}

/// Flip the theme and persist the new value.
///
/// # Errors
///
/// Returns an error if storage cannot be written.
pub fn toggle(store: &mut impl KvStore, current: Theme) -> Result<Theme, StorageError> {
    let next = current.toggled();
    store.set(keys::THEME, next.as_str())?;
    Ok(next)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mainmarket_core::MemoryStore;

    #[test]
    fn test_stored_theme_wins_over_os_hint() {
        let mut store = MemoryStore::new();
        store.set(keys::THEME, "light").unwrap();
        assert_eq!(load(&store, true).unwrap(), Theme::Light);

        store.set(keys::THEME, "dark").unwrap();
        assert_eq!(load(&store, false).unwrap(), Theme::Dark);
    }

    #[test]
    fn test_os_hint_applies_when_nothing_stored() {
        let store = MemoryStore::new();
        assert_eq!(load(&store, true).unwrap(), Theme::Dark);
        assert_eq!(load(&store, false).unwrap(), Theme::Light);
    }

    #[test]
    fn test_unknown_stored_value_means_light() {
        let mut store = MemoryStore::new();
        store.set(keys::THEME, "sepia").unwrap();
        assert_eq!(load(&store, true).unwrap(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut store = MemoryStore::new();
        let next = toggle(&mut store, Theme::Light).unwrap();
        assert_eq!(next, Theme::Dark);
        assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("dark"));

        let next = toggle(&mut store, next).unwrap();
        assert_eq!(next, Theme::Light);
        assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("light"));
    }
}
