//! Overlay provider: the layout-owned basket and order success flags.

use tower_sessions::Session;
use tower_sessions::session::Error as SessionError;

use crate::models::{OverlayFlags, session_keys};

/// Session-backed overlay flags for one request.
pub struct OverlayProvider {
    session: Session,
    flags: OverlayFlags,
}

impl OverlayProvider {
    /// Read the flags from the session; everything starts closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(session: Session) -> Result<Self, SessionError> {
        let flags = session
            .get::<OverlayFlags>(session_keys::OVERLAYS)
            .await?
            .unwrap_or_default();
        Ok(Self { session, flags })
    }

    #[must_use]
    pub const fn flags(&self) -> OverlayFlags {
        self.flags
    }

    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn set_basket_open(&mut self, open: bool) -> Result<(), SessionError> {
        self.flags.basket_open = open;
        self.save().await
    }

    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn set_order_success_open(&mut self, open: bool) -> Result<(), SessionError> {
        self.flags.order_success_open = open;
        self.save().await
    }

    async fn save(&self) -> Result<(), SessionError> {
        self.session
            .insert(session_keys::OVERLAYS, self.flags)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::providers::tests::session;

    #[tokio::test]
    async fn test_open_then_close_returns_to_closed() {
        let session = session();
        let mut overlays = OverlayProvider::load(session.clone()).await.unwrap();
        assert_eq!(overlays.flags(), OverlayFlags::default());

        overlays.set_basket_open(true).await.unwrap();
        assert!(OverlayProvider::load(session.clone()).await.unwrap().flags().basket_open);

        overlays.set_basket_open(false).await.unwrap();
        let flags = OverlayProvider::load(session).await.unwrap().flags();
        assert!(!flags.basket_open);
    }

    #[tokio::test]
    async fn test_flags_are_independent() {
        let session = session();
        let mut overlays = OverlayProvider::load(session.clone()).await.unwrap();
        overlays.set_basket_open(true).await.unwrap();
        overlays.set_order_success_open(true).await.unwrap();

        let flags = OverlayProvider::load(session).await.unwrap().flags();
        assert!(flags.basket_open);
        assert!(flags.order_success_open);
    }
}
