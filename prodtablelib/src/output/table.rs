//! Table-ready data structures for a product catalog.
//!
//! The data flow is:
//! 1. Raw data (ProductCollection, from a ProductLibrary)
//! 2. ProductTable (the loaded collection plus per-row image state)
//! 3. TableView (formatted cells, ready for a renderer or for JSON)
//!
//! TableView is a pure presentation layer: every cell is already text, and
//! renderers only lay it out.

use indexmap::IndexMap;
use serde::Serialize;

use crate::data::{Product, ProductCollection, ProductLibrary};
use crate::error::ProdtableError;
use crate::format::{color_availability, price_range, PriceLabel};
use crate::Result;

use super::image::{resolve_image, ImageEvent, ImageOutcome, ImageState};

/// Column labels, in display order.
pub const TABLE_HEADERS: [&str; 4] = ["Image", "Title", "Price", "Number of Colors"];

/// A header cell. Keyed by its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
}

/// One body row: a product's four cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    /// Stable row key, `product-row-{handle}`
    pub key: String,
    /// Product handle the row was built from
    pub handle: String,
    pub image: ImageState,
    /// Product title, as-is
    pub title: String,
    pub price: PriceLabel,
    /// Color count text ("No Colors", "1 Color Available", ...)
    pub colors: String,
}

/// Table-ready catalog data.
///
/// Exactly one header row and one body row per product, in collection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<ProductRow>,
}

/// A catalog loaded once from a [`ProductLibrary`].
///
/// The collection is never reloaded or changed after [`ProductTable::load`].
/// The only state that moves is each row's image, through
/// [`ProductTable::image_event`].
#[derive(Debug, Clone)]
pub struct ProductTable {
    products: ProductCollection,
    images: IndexMap<String, ImageState>,
}

impl ProductTable {
    /// Load the collection from a library.
    pub fn load<L: ProductLibrary + ?Sized>(library: &L) -> Result<Self> {
        let products = library.products()?;
        tracing::debug!(count = products.len(), "product table loaded");
        Ok(Self::from_collection(products))
    }

    /// Build a table over a collection that is already in hand.
    pub fn from_collection(products: ProductCollection) -> Self {
        let images = products
            .iter()
            .map(|(handle, product)| (handle.clone(), resolve_image(product)))
            .collect();
        Self { products, images }
    }

    /// The loaded collection.
    pub fn products(&self) -> &ProductCollection {
        &self.products
    }

    /// Number of body rows.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Build the row for one product handle.
    pub fn build_row(&self, handle: &str) -> Result<ProductRow> {
        let (handle, product) = self
            .products
            .get_key_value(handle)
            .ok_or_else(|| ProdtableError::UnknownHandle(handle.to_string()))?;
        Ok(self.row(handle, product))
    }

    /// Header row plus one body row per product, in collection order.
    pub fn render(&self) -> TableView {
        TableView {
            headers: build_headers(),
            rows: self
                .products
                .iter()
                .map(|(handle, product)| self.row(handle, product))
                .collect(),
        }
    }

    /// Row for a product, with the row's current image state.
    fn row(&self, handle: &str, product: &Product) -> ProductRow {
        let image = self
            .images
            .get(handle)
            .cloned()
            .unwrap_or_else(|| resolve_image(product));
        tracing::trace!(handle, "building product row");
        ProductRow {
            key: format!("product-row-{handle}"),
            handle: handle.to_string(),
            image,
            title: product.title.clone(),
            price: price_range(product),
            colors: color_availability(product),
        }
    }

    /// Feed an image event to a row's image.
    pub fn image_event(&mut self, handle: &str, event: ImageEvent) -> Result<ImageOutcome> {
        let image = self
            .images
            .get_mut(handle)
            .ok_or_else(|| ProdtableError::UnknownHandle(handle.to_string()))?;
        let outcome = image.apply(event);
        tracing::debug!(handle, ?outcome, "image event applied");
        Ok(outcome)
    }
}

/// Render a collection with every image in its initial state.
pub fn render_table(products: &ProductCollection) -> TableView {
    ProductTable::from_collection(products.clone()).render()
}

fn build_headers() -> Vec<HeaderCell> {
    TABLE_HEADERS
        .iter()
        .map(|label| HeaderCell {
            key: label.to_string(),
            label: label.to_string(),
        })
        .collect()
}
