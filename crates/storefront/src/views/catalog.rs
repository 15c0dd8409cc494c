//! Product card and grid view models.

use emporium_core::CurrencyCode;

use crate::catalog::{Catalog, Product};

/// One product card.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: Option<String>,
    pub category: Option<String>,
}

impl ProductCardView {
    #[must_use]
    pub fn new(product: &Product, currency: CurrencyCode) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.unit_price().convert(currency).display(),
            image: product.image.clone(),
            category: product.category.clone(),
        }
    }
}

/// The product grid: one card per catalog record, in catalog order.
#[derive(Debug, Clone)]
pub struct ProductGridView {
    pub cards: Vec<ProductCardView>,
}

impl ProductGridView {
    #[must_use]
    pub fn new(catalog: &Catalog, currency: CurrencyCode) -> Self {
        Self {
            cards: catalog
                .products()
                .iter()
                .map(|product| ProductCardView::new(product, currency))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
