//! Cart provider: the visitor's basket.

use tower_sessions::Session;
use tower_sessions::session::Error as SessionError;

use emporium_core::ProductId;

use crate::models::{Cart, session_keys};

/// Session-backed basket for one request.
pub struct CartProvider {
    session: Session,
    cart: Cart,
}

impl CartProvider {
    /// Read the basket from the session (empty if absent).
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(session: Session) -> Result<Self, SessionError> {
        let cart = session
            .get::<Cart>(session_keys::CART)
            .await?
            .unwrap_or_default();
        Ok(Self { session, cart })
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn add(&mut self, product_id: ProductId, quantity: u32) -> Result<(), SessionError> {
        self.cart.add(product_id, quantity);
        self.save().await
    }

    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), SessionError> {
        self.cart.set_quantity(product_id, quantity);
        self.save().await
    }

    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn remove(&mut self, product_id: &ProductId) -> Result<(), SessionError> {
        if self.cart.remove(product_id) {
            self.save().await?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn clear(&mut self) -> Result<(), SessionError> {
        self.cart.clear();
        self.save().await
    }

    async fn save(&self) -> Result<(), SessionError> {
        self.session.insert(session_keys::CART, &self.cart).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::providers::tests::session;

    fn id(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_mutations_visible_on_next_load() {
        let session = session();
        let mut cart = CartProvider::load(session.clone()).await.unwrap();
        assert!(cart.cart().is_empty());

        cart.add(id("p1"), 2).await.unwrap();
        cart.add(id("p2"), 1).await.unwrap();

        let reloaded = CartProvider::load(session.clone()).await.unwrap();
        assert_eq!(reloaded.cart().item_count(), 3);

        let mut cart = reloaded;
        cart.set_quantity(id("p1"), 0).await.unwrap();
        cart.remove(&id("p2")).await.unwrap();
        let reloaded = CartProvider::load(session.clone()).await.unwrap();
        assert!(reloaded.cart().is_empty());
    }

    #[tokio::test]
    async fn test_clear() {
        let session = session();
        let mut cart = CartProvider::load(session.clone()).await.unwrap();
        cart.add(id("p1"), 1).await.unwrap();
        cart.clear().await.unwrap();

        let reloaded = CartProvider::load(session).await.unwrap();
        assert!(reloaded.cart().is_empty());
    }
}
