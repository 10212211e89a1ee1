//! Cell formatting: turn product fields into display text.
//!
//! Every function here is a pure function of its input:
//!
//! - **format_currency**: cents to `$1,234.56`
//! - **price_range**: the price cell ([`PriceLabel`])
//! - **color_availability**: the color count cell

pub mod colors;
pub mod currency;
pub mod price;

pub use colors::color_availability;
pub use currency::{coerce_number, format_currency, format_number};
pub use price::{price_range, PriceLabel};
