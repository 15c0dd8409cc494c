//! Overlay view models: basket, login, profile and order success.
//!
//! An overlay view only exists while its flag is set; the layout holds each
//! one as an `Option`.

use rust_decimal::Decimal;

use emporium_core::{CurrencyCode, Price};

use crate::catalog::Catalog;
use crate::models::{Cart, User};
use crate::services::ProfileUpdate;

/// One basket line, priced in the selected currency.
#[derive(Debug, Clone)]
pub struct BasketLineView {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
}

/// The basket overlay.
#[derive(Debug, Clone)]
pub struct BasketModalView {
    pub lines: Vec<BasketLineView>,
    pub subtotal: String,
}

impl BasketModalView {
    /// Lines whose product has left the catalog are dropped from the view.
    #[must_use]
    pub fn new(cart: &Cart, catalog: &Catalog, currency: CurrencyCode) -> Self {
        let mut subtotal = Price::new(Decimal::ZERO, currency);
        let lines = cart
            .lines()
            .iter()
            .filter_map(|line| {
                let product = catalog.get(&line.product_id)?;
                let unit = product.unit_price().convert(currency);
                let total = unit.times(line.quantity);
                subtotal.amount += total.amount;
                Some(BasketLineView {
                    product_id: product.id.to_string(),
                    name: product.name.clone(),
                    quantity: line.quantity,
                    unit_price: unit.display(),
                    line_price: total.display(),
                })
            })
            .collect();

        Self {
            lines,
            subtotal: subtotal.display(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Units across the shown lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

/// The login / register overlay.
#[derive(Debug, Clone, Default)]
pub struct LoginModalView {
    pub error: Option<String>,
}

/// Profile form values as shown in the overlay.
#[derive(Debug, Clone, Default)]
pub struct ProfileFormView {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub country: String,
    pub contact_number: String,
    pub pincode: String,
    pub address_line1: String,
    pub address_line2: String,
    pub landmark: String,
    pub city: String,
    pub state: String,
}

impl From<&User> for ProfileFormView {
    fn from(user: &User) -> Self {
        let p = &user.profile;
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            email: user.email.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            date_of_birth: p
                .date_of_birth
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            country: text(&p.country),
            contact_number: text(&p.contact_number),
            pincode: text(&p.pincode),
            address_line1: text(&p.address_line1),
            address_line2: text(&p.address_line2),
            landmark: text(&p.landmark),
            city: text(&p.city),
            state: text(&p.state),
        }
    }
}

impl ProfileFormView {
    /// Echo a rejected submission back into the form.
    #[must_use]
    pub fn from_submission(email: &str, update: &ProfileUpdate) -> Self {
        Self {
            email: email.to_string(),
            first_name: update.first_name.clone(),
            last_name: update.last_name.clone(),
            date_of_birth: update.date_of_birth.clone(),
            country: update.country.clone(),
            contact_number: update.contact_number.clone(),
            pincode: update.pincode.clone(),
            address_line1: update.address_line1.clone(),
            address_line2: update.address_line2.clone(),
            landmark: update.landmark.clone(),
            city: update.city.clone(),
            state: update.state.clone(),
        }
    }
}

/// The profile overlay, mounted only on `/profile`.
#[derive(Debug, Clone, Default)]
pub struct ProfileModalView {
    /// `None` when the visitor is not logged in.
    pub form: Option<ProfileFormView>,
    pub error: Option<String>,
}

/// The order success overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderSuccessModalView;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use emporium_core::ProductId;

    use super::*;
    use crate::catalog::tests::product;

    #[test]
    fn test_basket_lines_and_subtotal() {
        let catalog = Catalog::new(vec![
            product("p1", "Mug", "14.50"),
            product("p2", "Bowl", "5.25"),
        ])
        .unwrap();
        let mut cart = Cart::default();
        cart.add(ProductId::parse("p1").unwrap(), 2);
        cart.add(ProductId::parse("p2").unwrap(), 1);

        let basket = BasketModalView::new(&cart, &catalog, CurrencyCode::USD);
        assert_eq!(basket.lines.len(), 2);
        assert_eq!(basket.lines.first().unwrap().line_price, "$29.00");
        assert_eq!(basket.subtotal, "$34.25");
    }

    #[test]
    fn test_basket_skips_missing_products() {
        let catalog = Catalog::new(vec![product("p1", "Mug", "1.00")]).unwrap();
        let mut cart = Cart::default();
        cart.add(ProductId::parse("gone").unwrap(), 1);

        let basket = BasketModalView::new(&cart, &catalog, CurrencyCode::USD);
        assert!(basket.is_empty());
        assert_eq!(basket.subtotal, "$0.00");
    }

    #[test]
    fn test_profile_form_from_empty_profile() {
        let user = User {
            id: emporium_core::UserId::new(1),
            email: emporium_core::Email::parse("ada@example.com").unwrap(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            profile: crate::models::Profile::default(),
        };
        let form = ProfileFormView::from(&user);
        assert_eq!(form.email, "ada@example.com");
        assert!(form.date_of_birth.is_empty());
        assert!(form.city.is_empty());
    }
}
