//! Theme preference commands.

use mainmarket_catalog::theme;

use crate::store::JsonFileStore;

type CommandResult = Result<String, Box<dyn std::error::Error>>;

/// Show the effective theme.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn show(store: &JsonFileStore) -> CommandResult {
    let current = theme::load(store, false)?;
    Ok(current.as_str().to_owned())
}

/// Flip the persisted theme and report the new value.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn toggle(mut store: JsonFileStore) -> CommandResult {
    let current = theme::load(&store, false)?;
    let next = theme::toggle(&mut store, current)?;
    Ok(next.as_str().to_owned())
}
