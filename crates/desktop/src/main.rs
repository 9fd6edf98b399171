//! Tauri application entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri")]
use std::sync::Arc;

#[cfg(feature = "tauri")]
use anyhow::Context;
#[cfg(feature = "tauri")]
use stockbook_desktop::commands::*;
#[cfg(feature = "tauri")]
use stockbook_desktop::Config;
#[cfg(feature = "tauri")]
use stockbook_store::CatalogStore;

#[cfg(feature = "tauri")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    tracing::info!(db = %config.db_path.display(), "opening catalog database");

    let store = CatalogStore::open(&config.db_path)
        .await
        .with_context(|| {
            format!(
                "failed to open catalog database at {}",
                config.db_path.display()
            )
        })?;

    let state = AppState {
        store: Arc::new(store),
        config,
    };

    tauri::Builder::default()
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            register_product,
            list_products,
            update_product,
            delete_product,
            delete_all_products,
            export_products,
        ])
        .run(tauri::generate_context!())
        .context("error while running tauri application")?;

    Ok(())
}

#[cfg(not(feature = "tauri"))]
fn main() {
    eprintln!("This binary requires the 'tauri' feature to be enabled.");
    eprintln!("Build with: cargo build --features tauri");
    std::process::exit(1);
}
