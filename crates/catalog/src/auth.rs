//! Auth state over key-value storage.
//!
//! There is no authentication backend: the logged-in user is whatever blob
//! sits under the `currentUser` storage key. Login and register are stubs
//! that surface a blocking notice.

use mainmarket_core::storage::{self, keys};
use mainmarket_core::{KvStore, StorageError};

use crate::models::CurrentUser;

/// Notice shown by the login stub.
pub const LOGIN_STUB_NOTICE: &str = "Login modal would appear here";

/// Notice shown by the register stub.
pub const REGISTER_STUB_NOTICE: &str = "Register modal would appear here";

/// Visibility of the header auth controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthControls {
    pub show_login: bool,
    pub show_register: bool,
    pub show_logout: bool,
}

impl AuthControls {
    /// Controls for the given auth state: login/register while logged out,
    /// logout while logged in.
    #[must_use]
    pub const fn for_user(user: Option<&CurrentUser>) -> Self {
        let logged_in = user.is_some();
        Self {
            show_login: !logged_in,
            show_register: !logged_in,
            show_logout: logged_in,
        }
    }
}

/// Load the persisted user, if any.
///
/// # Errors
///
/// Returns an error if storage cannot be read or the blob is corrupt.
pub fn load_current_user(store: &impl KvStore) -> Result<Option<CurrentUser>, StorageError> {
    storage::get_json(store, keys::CURRENT_USER)
}

/// Persist the logged-in user.
///
/// # Errors
///
/// Returns an error if the blob cannot be written.
pub fn store_current_user(
    store: &mut impl KvStore,
    user: &CurrentUser,
) -> Result<(), StorageError> {
    storage::set_json(store, keys::CURRENT_USER, user)
}

/// Clear the persisted user.
///
/// # Errors
///
/// Returns an error if storage cannot be written.
pub fn clear_current_user(store: &mut impl KvStore) -> Result<(), StorageError> {
    store.remove(keys::CURRENT_USER)
}
