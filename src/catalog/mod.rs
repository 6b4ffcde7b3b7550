//! The catalog engine: record store, validation and stock rules.

pub mod error;
pub mod input;
mod store;

pub use error::*;
pub use store::Catalog;
