//! Tauri commands bridging the frontend to the catalog store.
//!
//! Each command performs exactly one store call and maps errors to strings
//! for the frontend to display. After any mutation the frontend re-queries
//! [`list_products`] and re-renders the table from that snapshot.

use std::sync::Arc;

use serde::Serialize;
use stockbook_core::{Product, ProductId};
use stockbook_store::{CatalogStore, StoreError};
use tauri::State;

use crate::config::Config;
use crate::form::RegistrationForm;

/// Application state shared across Tauri commands.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub config: Config,
}

/// Row shape handed to the frontend table.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRow {
    pub id: i64,
    pub description: String,
    pub quantity: i64,
    pub value: f64,
    pub kind: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().as_i64(),
            description: product.description().to_string(),
            quantity: product.quantity(),
            value: product.value(),
            kind: product.kind().as_str().to_string(),
        }
    }
}

fn present(err: StoreError) -> String {
    tracing::error!("store operation failed: {err}");
    err.to_string()
}

/// Register a new product from the form and return its assigned id.
#[tauri::command]
pub async fn register_product(
    form: RegistrationForm,
    state: State<'_, AppState>,
) -> Result<i64, String> {
    let draft = form.parse().map_err(|e| e.to_string())?;
    let id = state.store.create(&draft).await.map_err(present)?;
    Ok(id.as_i64())
}

/// Full catalog snapshot, ordered by id ascending.
#[tauri::command]
pub async fn list_products(state: State<'_, AppState>) -> Result<Vec<ProductRow>, String> {
    let products = state.store.list().await.map_err(present)?;
    Ok(products.iter().map(ProductRow::from).collect())
}

/// Replace every non-id field of the product with the given id.
#[tauri::command]
pub async fn update_product(
    id: i64,
    form: RegistrationForm,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let draft = form.parse().map_err(|e| e.to_string())?;
    state
        .store
        .update(ProductId::new(id), &draft)
        .await
        .map_err(present)
}

/// Delete one product, keyed on its persisted id (never a table row index).
#[tauri::command]
pub async fn delete_product(id: i64, state: State<'_, AppState>) -> Result<(), String> {
    state
        .store
        .delete_one(ProductId::new(id))
        .await
        .map_err(present)
}

/// Delete every product. The frontend asks the user for confirmation
/// before invoking this; the store deletes unconditionally once called.
#[tauri::command]
pub async fn delete_all_products(state: State<'_, AppState>) -> Result<u64, String> {
    state.store.delete_all().await.map_err(present)
}

/// Export the current snapshot to the configured xlsx path; returns the
/// number of exported rows.
#[tauri::command]
pub async fn export_products(state: State<'_, AppState>) -> Result<u64, String> {
    state
        .store
        .export_snapshot(&state.config.export_path)
        .await
        .map_err(present)
}
