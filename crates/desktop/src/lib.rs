//! `stockbook-desktop`
//!
//! **Responsibility:** thin desktop shell around the catalog store.
//!
//! This crate provides:
//! - Registration-form parsing (the per-field checks the UI surfaces)
//! - Runtime configuration (database and export paths)
//! - Tauri command bindings (feature `tauri`)
//!
//! The shell owns no hidden state: after every mutation the frontend
//! re-queries the full list and re-renders the table from that snapshot.

pub mod config;
pub mod form;

#[cfg(feature = "tauri")]
pub mod commands;

pub use config::Config;
pub use form::{FormError, RegistrationForm};
