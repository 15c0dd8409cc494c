//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use emporium_core::{Email, UserId};

use super::User;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's directory ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Shown in the navbar greeting.
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// Session keys. Each key has exactly one provider that writes it.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the login overlay visibility flag.
    pub const LOGIN_OVERLAY_OPEN: &str = "login_overlay_open";

    /// Key for the one-shot login/register error message.
    pub const LOGIN_ERROR: &str = "login_error";

    /// Key for the basket contents.
    pub const CART: &str = "cart";

    /// Key for the selected display currency.
    pub const CURRENCY: &str = "currency";

    /// Key for the layout's overlay flags (basket, order success).
    pub const OVERLAYS: &str = "overlays";
}
