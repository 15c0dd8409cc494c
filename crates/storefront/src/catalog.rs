//! Static product catalog.
//!
//! The catalog is an ordered, read-only sequence of product records. The
//! default catalog is compiled into the binary from `data/products.json`;
//! deployments can point `STOREFRONT_CATALOG_PATH` at another JSON document
//! with the same shape, which is loaded once at startup.
//!
//! # Format
//!
//! ```json
//! [
//!   {
//!     "id": "p1",
//!     "name": "Stoneware Mug",
//!     "description": "...",
//!     "price": "14.50",
//!     "image": "/static/images/products/mug.svg",
//!     "category": "Kitchen"
//!   }
//! ]
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use emporium_core::{Price, ProductId};

/// Highest unit price a record may carry, in the base currency.
///
/// Keeps every converted price, line total and subtotal within `Decimal`
/// range for any supported currency and the basket's quantity cap.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// The catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/products.json");

/// Errors loading or validating a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),
    #[error("product {0} costs more than {max}", max = MAX_PRICE)]
    PriceTooLarge(ProductId),
}

/// A single catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price in the base currency.
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    /// Unit price as a base-currency [`Price`].
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::base(self.price)
    }
}

/// Ordered, immutable product catalog.
///
/// Cheap to clone; clones share the same records.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
    index: Arc<HashMap<ProductId, usize>>,
}

impl Catalog {
    /// Build a catalog from records, validating ids, names and prices.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if two records share an id, a name is blank,
    /// or a price is negative or above [`MAX_PRICE`].
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id.clone()));
            }
            if product.price.is_sign_negative() {
                return Err(CatalogError::NegativePrice(product.id.clone()));
            }
            if product.price > MAX_PRICE {
                return Err(CatalogError::PriceTooLarge(product.id.clone()));
            }
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self {
            products: products.into(),
            index: Arc::new(index),
        })
    }

    /// An empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            products: Arc::from(Vec::new()),
            index: Arc::new(HashMap::new()),
        }
    }

    /// Parse and validate a JSON catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and the validation
    /// errors of [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error only if `data/products.json` is invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load a catalog document from disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_json`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Records in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index
            .get(id)
            .and_then(|&position| self.products.get(position))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    /// Build a test product with a given id, name and price.
    pub fn product(id: &str, name: &str, price: &str) -> Product {
        Product {
            id: ProductId::parse(id).unwrap(),
            name: name.to_string(),
            description: String::new(),
            price: price.parse().unwrap(),
            image: None,
            category: None,
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        let first = catalog.products().first().unwrap();
        assert_eq!(first.id.as_str(), "p1");
    }

    #[test]
    fn test_preserves_order() {
        let catalog = Catalog::new(vec![
            product("b", "Bee", "1.00"),
            product("a", "Ant", "2.00"),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::new(vec![product("p1", "Mug", "9.00")]).unwrap();
        let id = ProductId::parse("p1").unwrap();
        assert_eq!(catalog.get(&id).unwrap().name, "Mug");
        assert!(catalog.get(&ProductId::parse("p2").unwrap()).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            product("p1", "Mug", "9.00"),
            product("p1", "Cup", "8.00"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id.as_str() == "p1"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Catalog::new(vec![product("p1", "Mug", "-1.00")]);
        assert!(matches!(result, Err(CatalogError::NegativePrice(_))));
    }

    #[test]
    fn test_price_bound() {
        let at_limit = Catalog::new(vec![product("p1", "Car", "1000000000")]);
        assert!(at_limit.is_ok());

        let result = Catalog::from_json(
            r#"[{"id":"p1","name":"Yacht","price":"1000000000000000000000000000"}]"#,
        );
        assert!(matches!(result, Err(CatalogError::PriceTooLarge(id)) if id.as_str() == "p1"));
    }

    #[test]
    fn test_most_expensive_line_converts_without_overflow() {
        use emporium_core::CurrencyCode;

        let catalog = Catalog::new(vec![product("p1", "Car", "1000000000")]).unwrap();
        let car = catalog.products().first().unwrap();
        for currency in CurrencyCode::ALL {
            let line = car.unit_price().convert(currency).times(99);
            assert!(line.amount > Decimal::ZERO);
        }
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Catalog::new(vec![product("p1", "  ", "1.00")]);
        assert!(matches!(result, Err(CatalogError::EmptyName(_))));
    }

    #[test]
    fn test_from_json_minimal_record() {
        let catalog = Catalog::from_json(r#"[{"id":"p1","name":"Mug","price":"3.50"}]"#).unwrap();
        let mug = catalog.products().first().unwrap();
        assert_eq!(mug.name, "Mug");
        assert!(mug.image.is_none());
        assert_eq!(mug.unit_price().display(), "$3.50");
    }

    #[test]
    fn test_from_json_empty_array() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_from_json_rejects_bad_id() {
        let result = Catalog::from_json(r#"[{"id":"bad id","name":"Mug","price":"1"}]"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
