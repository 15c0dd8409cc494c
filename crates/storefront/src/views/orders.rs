//! Orders page view model.

use crate::models::Order;

/// One row of the orders table.
#[derive(Debug, Clone)]
pub struct OrderRowView {
    pub id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub total: String,
    pub status: &'static str,
    pub placed_on: String,
}

impl From<&Order> for OrderRowView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            product_name: order.product_name.clone(),
            quantity: order.quantity,
            unit_price: order.unit_price.display(),
            total: order.total().display(),
            status: order.status.label(),
            placed_on: order.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// The `/orders` page.
#[derive(Debug, Clone)]
pub enum OrdersPageView {
    /// Visitor is not logged in.
    LoginRequired,
    /// The user's orders, newest first.
    History(Vec<OrderRowView>),
}

impl OrdersPageView {
    #[must_use]
    pub fn history(orders: &[Order]) -> Self {
        Self::History(orders.iter().map(OrderRowView::from).collect())
    }
}
