//! Catalog inspection commands.

use std::path::Path;

use tracing::info;

use emporium_storefront::catalog::{Catalog, CatalogError};

/// Validate a catalog document.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, is not valid JSON, or
/// fails validation (duplicate ids, blank names, negative or oversized
/// prices).
pub fn validate(path: &Path) -> Result<Catalog, CatalogError> {
    let catalog = Catalog::load(path)?;
    info!(path = %path.display(), products = catalog.len(), "Catalog is valid");
    Ok(catalog)
}

/// One display line per record: id, name, price, category.
#[must_use]
pub fn summarize(catalog: &Catalog) -> Vec<String> {
    catalog
        .products()
        .iter()
        .map(|product| {
            format!(
                "{}\t{}\t{}\t{}",
                product.id,
                product.name,
                product.unit_price().display(),
                product.category.as_deref().unwrap_or("-"),
            )
        })
        .collect()
}

/// Log every record of a catalog.
///
/// # Errors
///
/// Returns `CatalogError` if the catalog cannot be loaded.
pub fn list(path: Option<&Path>) -> Result<(), CatalogError> {
    let catalog = match path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };

    for line in summarize(&catalog) {
        info!("{line}");
    }
    info!(products = catalog.len(), "Done");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_builtin() {
        let catalog = Catalog::builtin().unwrap();
        let lines = summarize(&catalog);
        assert_eq!(lines.len(), catalog.len());
        assert!(lines.first().unwrap().starts_with("p1\t"));
    }

    #[test]
    fn test_validate_missing_file() {
        let result = validate(Path::new("/nonexistent/products.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    /// Write `json` to a fresh temp file and validate it.
    fn validate_json(name: &str, json: &str) -> Result<Catalog, CatalogError> {
        let dir = std::env::temp_dir().join(format!("emporium-cli-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.json");
        std::fs::write(&path, json).unwrap();

        let result = validate(&path);
        std::fs::remove_dir_all(&dir).unwrap();
        result
    }

    #[test]
    fn test_validate_written_file() {
        let catalog =
            validate_json("valid", r#"[{"id":"x1","name":"Jug","price":"7.00"}]"#).unwrap();
        let id = emporium_core::ProductId::parse("x1").unwrap();
        assert_eq!(catalog.get(&id).unwrap().name, "Jug");
    }

    #[test]
    fn test_validate_reports_oversized_price() {
        let result = validate_json(
            "oversized",
            r#"[{"id":"x1","name":"Yacht","price":"1000000000000000000000000000"}]"#,
        );
        assert!(matches!(result, Err(CatalogError::PriceTooLarge(_))));
    }
}
