//! Currency provider: the visitor's display currency.

use tower_sessions::Session;
use tower_sessions::session::Error as SessionError;

use emporium_core::CurrencyCode;

use crate::models::session_keys;

/// Session-backed currency selection for one request.
pub struct CurrencyProvider {
    session: Session,
    currency: CurrencyCode,
}

impl CurrencyProvider {
    /// Read the selection, falling back to `default` for new visitors.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(session: Session, default: CurrencyCode) -> Result<Self, SessionError> {
        let currency = session
            .get::<CurrencyCode>(session_keys::CURRENCY)
            .await?
            .unwrap_or(default);
        Ok(Self { session, currency })
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn set(&mut self, currency: CurrencyCode) -> Result<(), SessionError> {
        self.session
            .insert(session_keys::CURRENCY, currency)
            .await?;
        self.currency = currency;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::providers::tests::session;

    #[tokio::test]
    async fn test_default_then_set() {
        let session = session();
        let provider = CurrencyProvider::load(session.clone(), CurrencyCode::GBP)
            .await
            .unwrap();
        assert_eq!(provider.currency(), CurrencyCode::GBP);

        let mut provider = provider;
        provider.set(CurrencyCode::INR).await.unwrap();

        let reloaded = CurrencyProvider::load(session, CurrencyCode::USD)
            .await
            .unwrap();
        assert_eq!(reloaded.currency(), CurrencyCode::INR);
    }
}
