//! Error types for prodtablelib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog or building its table
#[derive(Error, Debug)]
pub enum ProdtableError {
    /// Failed to read a catalog file
    #[error("failed to read catalog '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catalog file is not a valid product collection
    #[error("failed to parse catalog '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// No product is stored under the given handle
    #[error("unknown product handle: {0}")]
    UnknownHandle(String),

    /// Invalid output format name
    #[error("unknown output format '{0}' (expected html, json or text)")]
    UnknownFormat(String),

    /// Template failed to load or render
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
