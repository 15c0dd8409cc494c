//! Order repository.

use chrono::Utc;
use tokio::sync::RwLock;

use emporium_core::{Email, OrderId, OrderStatus, Price, ProductId};

use crate::models::Order;

/// An order line before it is assigned an id and timestamp.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_email: Email,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Price,
}

#[derive(Debug, Default)]
struct OrderTable {
    rows: Vec<Order>,
    next_id: u64,
}

/// Append-only order storage.
#[derive(Debug, Default)]
pub struct OrderRepository {
    table: RwLock<OrderTable>,
}

impl OrderRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a batch of order lines under one write lock.
    ///
    /// All lines share the same creation timestamp and start as
    /// [`OrderStatus::Pending`].
    pub async fn create_many(&self, orders: Vec<NewOrder>) -> Vec<Order> {
        let mut table = self.table.write().await;
        let created_at = Utc::now();

        let mut created = Vec::with_capacity(orders.len());
        for new in orders {
            table.next_id += 1;
            let order = Order {
                id: OrderId::new(table.next_id),
                user_email: new.user_email,
                product_id: new.product_id,
                product_name: new.product_name,
                quantity: new.quantity,
                unit_price: new.unit_price,
                status: OrderStatus::Pending,
                created_at,
            };
            table.rows.push(order.clone());
            created.push(order);
        }

        created
    }

    /// All orders for a user, newest first.
    pub async fn list_for_user(&self, email: &Email) -> Vec<Order> {
        let table = self.table.read().await;
        let mut orders: Vec<Order> = table
            .rows
            .iter()
            .filter(|order| &order.user_email == email)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.id.cmp(&a.id));
        orders
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_order(email: &str, product: &str) -> NewOrder {
        NewOrder {
            user_email: Email::parse(email).unwrap(),
            product_id: ProductId::parse(product).unwrap(),
            product_name: product.to_uppercase(),
            quantity: 1,
            unit_price: Price::base("5.00".parse().unwrap()),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_pending_status() {
        let repo = OrderRepository::new();
        let created = repo
            .create_many(vec![
                new_order("a@example.com", "p1"),
                new_order("a@example.com", "p2"),
            ])
            .await;

        assert_eq!(created.len(), 2);
        assert_eq!(created[0].id, OrderId::new(1));
        assert_eq!(created[1].id, OrderId::new(2));
        assert!(created.iter().all(|o| o.status == OrderStatus::Pending));
    }

    #[tokio::test]
    async fn test_list_filters_by_user_newest_first() {
        let repo = OrderRepository::new();
        repo.create_many(vec![new_order("a@example.com", "p1")]).await;
        repo.create_many(vec![new_order("b@example.com", "p2")]).await;
        repo.create_many(vec![new_order("a@example.com", "p3")]).await;

        let orders = repo
            .list_for_user(&Email::parse("a@example.com").unwrap())
            .await;
        let products: Vec<&str> = orders.iter().map(|o| o.product_id.as_str()).collect();
        assert_eq!(products, ["p3", "p1"]);
    }

    #[tokio::test]
    async fn test_list_empty_for_unknown_user() {
        let repo = OrderRepository::new();
        let orders = repo
            .list_for_user(&Email::parse("nobody@example.com").unwrap())
            .await;
        assert!(orders.is_empty());
    }
}
