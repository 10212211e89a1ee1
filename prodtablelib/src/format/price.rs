//! Price cell text.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::data::Product;

use super::currency::{coerce_number, format_currency, format_number};

/// What the price cell shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceLabel {
    /// One formatted price (`"$25.00"`)
    Single(String),
    /// Numeric difference of the lowest and the regular formatted prices.
    ///
    /// Both operands are currency text, so this is NaN for every real
    /// catalog; it is kept as-is because the intended range format was never
    /// defined.
    Difference(f64),
}

impl PriceLabel {
    /// True when the label carries a number that is not a number.
    pub fn is_nan(&self) -> bool {
        matches!(self, PriceLabel::Difference(v) if v.is_nan())
    }
}

impl fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceLabel::Single(text) => f.write_str(text),
            PriceLabel::Difference(value) => f.write_str(&format_number(*value)),
        }
    }
}

impl Serialize for PriceLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Price text for a product.
///
/// Products whose variants share one price show that price. Products with
/// varying prices subtract the formatted regular price from the formatted
/// lowest price, as numbers; a missing lowest price is also NaN.
pub fn price_range(product: &Product) -> PriceLabel {
    if !product.price_varies {
        return PriceLabel::Single(format_currency(product.price));
    }

    let low = product
        .price_min
        .map_or(f64::NAN, |min| coerce_number(&format_currency(min)));
    let high = coerce_number(&format_currency(product.price));

    PriceLabel::Difference(low - high)
}
