//! Catalog data: product records and the libraries that supply them.
//!
//! This is the input side of the pipeline:
//!
//! - **Product** / **ProductCollection**: the catalog as plain data
//! - **ProductLibrary**: the seam a table loads its collection through
//!
//! Nothing in this module formats or renders anything.

pub mod library;
pub mod product;

pub use library::{JsonFileLibrary, ProductLibrary, StaticLibrary};
pub use product::{Colors, Product, ProductCollection};
