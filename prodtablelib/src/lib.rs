//! # prodtablelib
//!
//! Render a product catalog as an HTML table.
//!
//! ## Overview
//!
//! A catalog is a collection of products keyed by handle. This library loads
//! it once from a [`ProductLibrary`], formats each product into a table row,
//! and renders the table as inline-styled HTML:
//!
//! - **Image**: the featured image, or a placeholder when there is none or
//!   it fails to load
//! - **Title**: the product title as-is
//! - **Price**: US dollars from integer cents (`2500` → `$25.00`)
//! - **Number of Colors**: `No Colors`, `1 Color Available`, `3 Colors Available`
//!
//! ## Pipeline
//!
//! 1. **data**: `Product`, `ProductCollection` and the `ProductLibrary` seam
//! 2. **format**: pure cell formatting (currency, price, colors)
//! 3. **output**: `ProductTable` → `TableView` → HTML
//!
//! Everything is pure data except `JsonFileLibrary`, which reads a file.
//!
//! ## Example
//!
//! ```rust
//! use prodtablelib::{render_html, JsonFileLibrary, ProductTable, RenderOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("catalog.json");
//! fs::write(&path, r#"{
//!     "blue-shirt": {"title": "Blue Shirt", "price": 2500, "colors": {"blue": {}}}
//! }"#).unwrap();
//!
//! let table = ProductTable::load(&JsonFileLibrary::new(&path)).unwrap();
//! let view = table.render();
//! assert_eq!(view.rows[0].price.to_string(), "$25.00");
//!
//! let html = render_html(&view, &RenderOptions::new().pretty(false)).unwrap();
//! assert!(html.contains("1 Color Available"));
//! ```

pub mod data;
pub mod error;
pub mod format;
pub mod options;
pub mod output;

pub use data::{Colors, JsonFileLibrary, Product, ProductCollection, ProductLibrary, StaticLibrary};
pub use error::ProdtableError;
pub use format::{color_availability, format_currency, price_range, PriceLabel};
pub use options::{OutputFormat, RenderOptions};
pub use output::{
    render_html, render_table, resolve_image, HeaderCell, ImageEvent, ImageOutcome, ImageState,
    ProductRow, ProductTable, TableStyles, TableView, PLACEHOLDER_IMAGE_URL, STYLES,
    TABLE_HEADERS,
};

/// Result type for prodtablelib operations
pub type Result<T> = std::result::Result<T, ProdtableError>;
