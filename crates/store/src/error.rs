//! Store error taxonomy.

use stockbook_core::{ProductId, ValidationError};
use thiserror::Error;

/// Result type used across the store layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the catalog store.
///
/// Every failure reaches the caller as one of these; the store never
/// retries and never silently drops a failed mutation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A field value violated its constraint; nothing was persisted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No row with the given id exists (update/delete).
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// Writing the export workbook failed.
    #[error("export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// The backing database file could not be opened or created.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// A statement against an open database failed.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
