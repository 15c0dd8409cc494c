//! Basket contents.

use serde::{Deserialize, Serialize};

use emporium_core::ProductId;

/// A single basket line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Basket contents: at most one line per product, in the order products
/// were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Largest quantity a single line can hold.
    pub const MAX_LINE_QUANTITY: u32 = 99;

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Quantity held for a product (0 when absent).
    #[must_use]
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.lines
            .iter()
            .find(|line| &line.product_id == product_id)
            .map_or(0, |line| line.quantity)
    }

    /// Add `quantity` of a product, merging into an existing line.
    ///
    /// Adding zero is a no-op. Line quantities saturate at
    /// [`Self::MAX_LINE_QUANTITY`].
    pub fn add(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .saturating_add(quantity)
                    .min(Self::MAX_LINE_QUANTITY);
            }
            None => self.lines.push(CartLine {
                product_id,
                quantity: quantity.min(Self::MAX_LINE_QUANTITY),
            }),
        }
    }

    /// Replace a line's quantity; zero removes the line.
    ///
    /// Setting a quantity for a product not in the basket adds it.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(&product_id);
            return;
        }
        let quantity = quantity.min(Self::MAX_LINE_QUANTITY);
        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            Some(line) => line.quantity = quantity,
            None => self.lines.push(CartLine {
                product_id,
                quantity,
            }),
        }
    }

    /// Remove a product's line. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.product_id != product_id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_merges_lines() {
        let mut cart = Cart::default();
        cart.add(id("p1"), 1);
        cart.add(id("p2"), 2);
        cart.add(id("p1"), 3);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.quantity_of(&id("p1")), 4);
        assert_eq!(cart.item_count(), 6);
        // First-added order is kept
        assert_eq!(cart.lines().first().unwrap().product_id, id("p1"));
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut cart = Cart::default();
        cart.add(id("p1"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_caps_quantity() {
        let mut cart = Cart::default();
        cart.add(id("p1"), 98);
        cart.add(id("p1"), 5);
        assert_eq!(cart.quantity_of(&id("p1")), Cart::MAX_LINE_QUANTITY);

        cart.add(id("p2"), u32::MAX);
        assert_eq!(cart.quantity_of(&id("p2")), Cart::MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::default();
        cart.add(id("p1"), 2);
        cart.set_quantity(id("p1"), 7);
        assert_eq!(cart.quantity_of(&id("p1")), 7);

        cart.set_quantity(id("p1"), 0);
        assert!(cart.is_empty());

        cart.set_quantity(id("p3"), 1);
        assert_eq!(cart.quantity_of(&id("p3")), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::default();
        cart.add(id("p1"), 1);
        cart.add(id("p2"), 1);

        assert!(cart.remove(&id("p1")));
        assert!(!cart.remove(&id("p1")));
        assert_eq!(cart.lines().len(), 1);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_session_serialization_roundtrip() {
        let mut cart = Cart::default();
        cart.add(id("p1"), 2);
        let json = serde_json::to_value(&cart).unwrap();
        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }
}
