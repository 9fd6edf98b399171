//! `stockbook-core` — domain foundation for the product catalog.
//!
//! This crate contains **pure domain** types (no persistence or UI concerns).

pub mod error;
pub mod product;

pub use error::ValidationError;
pub use product::{Product, ProductDraft, ProductId, ProductKind};
