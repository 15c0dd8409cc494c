//! Order records.

use chrono::{DateTime, Utc};

use emporium_core::{Email, OrderId, OrderStatus, Price, ProductId};

/// One purchased line, recorded at checkout.
///
/// The unit price is stored already converted to the currency the buyer
/// had selected, together with that currency's code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub user_email: Email,
    pub product_id: ProductId,
    /// Product name at the time of purchase.
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Unit price times quantity.
    #[must_use]
    pub fn total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}
