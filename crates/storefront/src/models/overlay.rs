//! Overlay identities and the layout-owned visibility flags.
//!
//! Every overlay is either CLOSED or OPEN and never owns its own
//! visibility:
//!
//! - basket and order success: [`OverlayFlags`], owned by the layout
//! - login: the auth provider's login flag
//! - profile: derived from the current path (`/profile`)
//!
//! The flags are independent; nothing stops two overlays from being open at
//! the same time.

use serde::{Deserialize, Serialize};

/// The overlays the layout can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Basket,
    Login,
    Profile,
    OrderSuccess,
}

impl Overlay {
    /// URL segment used by the open/close routes.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Basket => "basket",
            Self::Login => "login",
            Self::Profile => "profile",
            Self::OrderSuccess => "order-success",
        }
    }

    /// Resolve an open/close route segment.
    ///
    /// The profile overlay follows the path rather than a flag, so it is not
    /// addressable here.
    #[must_use]
    pub fn toggleable_from_slug(slug: &str) -> Option<Self> {
        match slug {
            "basket" => Some(Self::Basket),
            "login" => Some(Self::Login),
            "order-success" => Some(Self::OrderSuccess),
            _ => None,
        }
    }
}

/// Visibility flags owned by the layout. All closed by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayFlags {
    pub basket_open: bool,
    pub order_success_open: bool,
}
