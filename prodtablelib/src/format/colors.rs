//! Color count cell text.

use crate::data::Product;

/// How many colors a product comes in, as cell text.
pub fn color_availability(product: &Product) -> String {
    match product.color_count() {
        0 => "No Colors".to_string(),
        1 => "1 Color Available".to_string(),
        n => format!("{n} Colors Available"),
    }
}
