//! Product records and the ordered collection they live in.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Variant data keyed by color name.
///
/// Variant payloads are opaque to the table; only the keys are counted.
pub type Colors = IndexMap<String, serde_json::Value>;

/// Products keyed by their unique handle.
///
/// Iteration order is the order products were inserted (document order for a
/// parsed catalog), and that is the order rows are rendered in.
pub type ProductCollection = IndexMap<String, Product>;

/// A single catalog entry.
///
/// Prices are integers in minor currency units (cents).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    /// Display title
    pub title: String,
    /// Featured image URL. Empty strings are read as absent.
    #[serde(default, deserialize_with = "non_empty_string")]
    pub featured_image: Option<String>,
    /// Price in cents
    pub price: i64,
    /// Lowest variant price in cents, present when variant prices diverge
    #[serde(default)]
    pub price_min: Option<i64>,
    /// Whether variants are priced differently
    #[serde(rename = "priceVaries", default)]
    pub price_varies: bool,
    /// Color name to variant data
    #[serde(default)]
    pub colors: Option<Colors>,
}

impl Product {
    /// Create a product with a title and a single price.
    pub fn new(title: impl Into<String>, price: i64) -> Self {
        Self {
            title: title.into(),
            price,
            ..Self::default()
        }
    }

    /// Builder: set the featured image URL.
    pub fn featured_image(mut self, url: impl Into<String>) -> Self {
        self.featured_image = Some(url.into());
        self
    }

    /// Builder: mark the price as varying, with the lowest variant price.
    pub fn price_varies(mut self, price_min: i64) -> Self {
        self.price_varies = true;
        self.price_min = Some(price_min);
        self
    }

    /// Builder: add a color with empty variant data.
    pub fn color(mut self, name: impl Into<String>) -> Self {
        self.colors
            .get_or_insert_with(Colors::new)
            .insert(name.into(), serde_json::Value::Object(Default::default()));
        self
    }

    /// Number of distinct colors; zero when `colors` is absent.
    pub fn color_count(&self) -> usize {
        self.colors.as_ref().map_or(0, |c| c.len())
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
