//! Rendering options.
//!
//! This module contains the configuration types that control how a
//! [`TableView`](crate::TableView) is turned into output.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ProdtableError;

/// Output format for a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Inline-styled HTML table
    #[default]
    Html,
    /// The table model as JSON
    Json,
    /// Aligned plain-text columns
    Text,
}

impl FromStr for OutputFormat {
    type Err = ProdtableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(ProdtableError::UnknownFormat(s.to_string())),
        }
    }
}

/// Options for HTML rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// One element per line, indented by nesting depth
    pub pretty: bool,
    /// Wrap the table in a standalone HTML document
    pub document: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            document: false,
        }
    }
}

impl RenderOptions {
    /// Create default options: pretty, table only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Builder: set document wrapping
    pub fn document(mut self, document: bool) -> Self {
        self.document = document;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_default() {
        let options = RenderOptions::default();
        assert!(options.pretty);
        assert!(!options.document);
        assert_eq!(options, RenderOptions::new());
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new().pretty(false).document(true);
        assert!(!options.pretty);
        assert!(options.document);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("html").unwrap(), OutputFormat::Html);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Text);
        assert!(matches!(
            OutputFormat::from_str("csv"),
            Err(ProdtableError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Html);
    }
}
