//! # sweet-shop
//!
//! In-memory inventory manager for a sweet shop.
//!
//! - [`catalog::Catalog`] is the engine: an ordered record store with
//!   validation and stock rules. It is synchronous and does no I/O.
//! - [`actors::CatalogService`] owns the catalog and handles one request at a
//!   time; [`clients::CatalogClient`] is the cloneable handle used to call it.
//! - [`app_system::ShopSystem`] starts and stops the service.
//! - [`console::Console`] is the interactive menu driven by the binary.

pub mod domain;
pub mod catalog;
pub mod messages;
pub mod clients;
pub mod actors;
pub mod app_system;
pub mod console;

#[cfg(test)]
mod mock_framework;
