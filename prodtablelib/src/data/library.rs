//! Product libraries: where a table gets its collection from.
//!
//! A library is asked for its products exactly once, when a
//! [`ProductTable`](crate::ProductTable) is loaded. The table never asks again.

use std::path::{Path, PathBuf};

use crate::error::ProdtableError;
use crate::Result;

use super::product::{Product, ProductCollection};

/// Source of a product collection.
pub trait ProductLibrary {
    /// Return the full collection. Called once per table.
    fn products(&self) -> Result<ProductCollection>;
}

/// A library backed by a collection already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticLibrary {
    products: ProductCollection,
}

impl StaticLibrary {
    pub fn new(products: ProductCollection) -> Self {
        Self { products }
    }
}

impl ProductLibrary for StaticLibrary {
    fn products(&self) -> Result<ProductCollection> {
        Ok(self.products.clone())
    }
}

impl FromIterator<(String, Product)> for StaticLibrary {
    fn from_iter<I: IntoIterator<Item = (String, Product)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A library that reads a catalog JSON object (`{ handle: product, ... }`)
/// from disk.
#[derive(Debug, Clone)]
pub struct JsonFileLibrary {
    path: PathBuf,
}

impl JsonFileLibrary {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path this library reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductLibrary for JsonFileLibrary {
    fn products(&self) -> Result<ProductCollection> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| ProdtableError::FileRead {
                path: self.path.clone(),
                source: e,
            })?;

        let products: ProductCollection =
            serde_json::from_str(&content).map_err(|e| ProdtableError::Parse {
                path: self.path.clone(),
                source: e,
            })?;

        tracing::debug!(
            path = %self.path.display(),
            count = products.len(),
            "catalog loaded"
        );

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_static_library_returns_collection() {
        let library: StaticLibrary = [
            ("b".to_string(), Product::new("B", 200)),
            ("a".to_string(), Product::new("A", 100)),
        ]
        .into_iter()
        .collect();

        let products = library.products().unwrap();
        let handles: Vec<&str> = products.keys().map(String::as_str).collect();
        assert_eq!(handles, vec!["b", "a"]);
    }

    #[test]
    fn test_json_file_library_reads_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"blue-shirt": {"title": "Blue Shirt", "price": 2500, "colors": {"blue": {}}}}"#,
        )
        .unwrap();

        let products = JsonFileLibrary::new(&path).products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products["blue-shirt"].title, "Blue Shirt");
        assert_eq!(products["blue-shirt"].color_count(), 1);
    }

    #[test]
    fn test_json_file_library_missing_file() {
        let dir = tempdir().unwrap();
        let library = JsonFileLibrary::new(dir.path().join("nope.json"));
        let err = library.products().unwrap_err();

        match err {
            ProdtableError::FileRead { ref path, .. } => assert_eq!(path, library.path()),
            ref other => panic!("expected FileRead, got {other:?}"),
        }
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_json_file_library_malformed_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"{"hat": {"title": "Hat", "price": "cheap"}}"#).unwrap();

        let err = JsonFileLibrary::new(&path).products().unwrap_err();
        assert!(matches!(err, ProdtableError::Parse { .. }));
    }
}
