//! Image cells and their load-failure fallback.
//!
//! Instead of mutating a live element when an image fails to load, each row
//! owns an [`ImageState`] and failures are fed through [`ImageState::apply`].
//! A state with a handler swaps to the placeholder and drops the handler, so
//! a failing placeholder can never trigger another swap.

use serde::{Deserialize, Serialize};

use crate::data::Product;

/// Shown when a product has no image or its image fails to load.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://cdn.shopify.com/s/files/1/0533/2089/files/placeholder-images-image_large.png?format=webp&v=1530129081";

/// Render state of one product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageState {
    /// Current image source
    pub src: String,
    /// Alt text, `Product Image for {title}`
    pub alt: String,
    /// Whether the product image style applies (featured images only)
    pub styled: bool,
    /// Whether a load failure still swaps in the placeholder
    pub on_error: bool,
}

/// Something the renderer reported about an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEvent {
    /// The image source could not be loaded (404, network error, bad URL)
    LoadFailed,
}

/// What applying an [`ImageEvent`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutcome {
    /// The handler ran: source is now the placeholder and the handler is gone
    Replaced,
    /// No handler was attached; nothing changed
    Ignored,
}

impl ImageState {
    /// Apply an event to this image.
    pub fn apply(&mut self, event: ImageEvent) -> ImageOutcome {
        match event {
            ImageEvent::LoadFailed if self.on_error => {
                tracing::debug!(from = %self.src, "image failed to load, using placeholder");
                self.on_error = false;
                self.src = PLACEHOLDER_IMAGE_URL.to_string();
                ImageOutcome::Replaced
            }
            ImageEvent::LoadFailed => {
                tracing::trace!(src = %self.src, "image failed to load, no handler attached");
                ImageOutcome::Ignored
            }
        }
    }

    /// Whether the placeholder is showing.
    pub fn is_placeholder(&self) -> bool {
        self.src == PLACEHOLDER_IMAGE_URL
    }
}

/// Initial image state for a product.
///
/// Featured images get the image style and a fallback handler. Products
/// without one show the placeholder straight away, unstyled and with no
/// handler.
pub fn resolve_image(product: &Product) -> ImageState {
    let alt = format!("Product Image for {}", product.title);
    match &product.featured_image {
        Some(url) => ImageState {
            src: url.clone(),
            alt,
            styled: true,
            on_error: true,
        },
        None => ImageState {
            src: PLACEHOLDER_IMAGE_URL.to_string(),
            alt,
            styled: false,
            on_error: false,
        },
    }
}
