//! Output: present a product catalog as a table.
//!
//! This module handles the last stage of the pipeline, turning a loaded
//! collection into display data and markup. It provides:
//!
//! - **ProductTable**: the loaded collection plus per-row image state
//! - **TableView**: header and body rows with every cell formatted
//! - **ImageState**: image source and its load-failure fallback
//! - **render_html**: inline-styled HTML for a TableView
//!
//! ## Example
//!
//! ```rust
//! use prodtablelib::{render_html, Product, ProductTable, RenderOptions, StaticLibrary};
//!
//! let library: StaticLibrary = [("mug".to_string(), Product::new("Mug", 800).color("white"))]
//!     .into_iter()
//!     .collect();
//! let table = ProductTable::load(&library).unwrap();
//! let view = table.render();
//!
//! assert_eq!(view.rows[0].colors, "1 Color Available");
//! let html = render_html(&view, &RenderOptions::new()).unwrap();
//! assert!(html.contains("<th"));
//! ```

pub mod html;
pub mod image;
pub mod table;

pub use html::{render_html, TableStyles, STYLES};
pub use image::{resolve_image, ImageEvent, ImageOutcome, ImageState, PLACEHOLDER_IMAGE_URL};
pub use table::{render_table, HeaderCell, ProductRow, ProductTable, TableView, TABLE_HEADERS};
