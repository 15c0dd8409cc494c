//! Checkout service.
//!
//! Turns a basket into order records: one order per basket line, priced in
//! the buyer's selected currency at the moment of purchase.

use thiserror::Error;

use emporium_core::{CurrencyCode, ProductId};

use crate::catalog::Catalog;
use crate::db::{NewOrder, OrderRepository};
use crate::models::{Cart, CurrentUser, Order};

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("the basket is empty")]
    EmptyCart,
    #[error("product is no longer available: {0}")]
    UnknownProduct(ProductId),
}

/// Checkout service.
pub struct CheckoutService<'a> {
    catalog: &'a Catalog,
    orders: &'a OrderRepository,
}

impl<'a> CheckoutService<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog, orders: &'a OrderRepository) -> Self {
        Self { catalog, orders }
    }

    /// Record one order per basket line for `user`.
    ///
    /// Nothing is written if any line fails to resolve against the catalog.
    /// The caller is responsible for clearing the basket afterwards.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` for an empty basket and
    /// `CheckoutError::UnknownProduct` if a line names a product the catalog
    /// no longer carries.
    #[tracing::instrument(skip(self, user, cart), fields(user_id = %user.id, lines = cart.lines().len()))]
    pub async fn place_order(
        &self,
        user: &CurrentUser,
        cart: &Cart,
        currency: CurrencyCode,
    ) -> Result<Vec<Order>, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let new_orders = cart
            .lines()
            .iter()
            .map(|line| {
                let product = self
                    .catalog
                    .get(&line.product_id)
                    .ok_or_else(|| CheckoutError::UnknownProduct(line.product_id.clone()))?;
                Ok(NewOrder {
                    user_email: user.email.clone(),
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    quantity: line.quantity,
                    unit_price: product.unit_price().convert(currency),
                })
            })
            .collect::<Result<Vec<_>, CheckoutError>>()?;

        let orders = self.orders.create_many(new_orders).await;
        tracing::info!(count = orders.len(), currency = %currency, "Orders placed");
        Ok(orders)
    }
}
