//! `stockbook-store` — durable storage for product records.
//!
//! **Responsibility:** own the on-disk SQLite table of products and expose
//! the CRUD + export surface the desktop shell calls into. No business
//! logic lives here beyond keeping invalid rows out of the table.

mod catalog;
mod error;
mod export;

pub use catalog::CatalogStore;
pub use error::{StoreError, StoreResult};
