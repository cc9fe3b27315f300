//! User identity types.

use serde::{Deserialize, Serialize};

use mainmarket_core::UserId;

/// Storage-persisted user identity.
///
/// Minimal blob stored under the `currentUser` key while logged in. The
/// demo has no authentication backend, so nothing here is server-validated;
/// login and register surfaces are stubs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, as entered.
    pub email: String,
}
