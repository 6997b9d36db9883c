//! Inventory domain module.
//!
//! Holds the storefront catalog: each product's price, remaining stock and
//! promotions. Pure domain logic plus the serde shape of the static catalog
//! configuration (no file watching, no persistence).

pub mod catalog;
pub mod product;
pub mod store;

pub use catalog::{CatalogConfig, CatalogError, ProductConfig};
pub use product::{Product, Promotion};
pub use store::InventoryStore;
