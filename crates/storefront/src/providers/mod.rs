//! Per-request state providers.
//!
//! Each provider owns one slice of visitor state and is the only writer of
//! its session key:
//!
//! | Provider           | Session key(s)                                  |
//! |--------------------|-------------------------------------------------|
//! | [`AuthProvider`]   | `current_user`, `login_overlay_open`, `login_error` |
//! | [`CartProvider`]   | `cart`                                          |
//! | [`CurrencyProvider`] | `currency`                                    |
//! | [`OverlayProvider`] | `overlays`                                     |
//!
//! Providers are loaded from the session at the start of a request and write
//! through on every mutation, so the next render observes the change.
//! Handlers take the whole set through the [`Providers`] extractor.

pub mod auth;
pub mod cart;
pub mod currency;
pub mod overlays;

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

pub use auth::AuthProvider;
pub use cart::CartProvider;
pub use currency::CurrencyProvider;
pub use overlays::OverlayProvider;

use crate::error::AppError;
use crate::state::AppState;

/// Every provider for the current visitor, loaded Auth → Cart → Currency,
/// then the layout's overlay flags.
pub struct Providers {
    pub auth: AuthProvider,
    pub cart: CartProvider,
    pub currency: CurrencyProvider,
    pub overlays: OverlayProvider,
}

impl Providers {
    /// Load all providers from a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(
        session: Session,
        state: &AppState,
    ) -> Result<Self, tower_sessions::session::Error> {
        let auth = AuthProvider::load(session.clone()).await?;
        let cart = CartProvider::load(session.clone()).await?;
        let currency =
            CurrencyProvider::load(session.clone(), state.config().default_currency).await?;
        let overlays = OverlayProvider::load(session).await?;

        Ok(Self {
            auth,
            cart,
            currency,
            overlays,
        })
    }
}

impl FromRequestParts<AppState> for Providers {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| AppError::Internal(message.to_string()))?;

        Ok(Self::load(session, state).await?)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use tower_sessions::{MemoryStore, Session};

    /// A fresh session backed by a throwaway in-memory store.
    pub fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }
}
