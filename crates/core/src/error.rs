//! Domain error model.

use thiserror::Error;

/// A product field failed validation.
///
/// The presentation layer runs the same checks before submitting, but the
/// store accepts only values that already passed them; an invalid row is
/// never persisted regardless of what the caller does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Description is empty or whitespace-only.
    #[error("description must not be empty")]
    EmptyDescription,

    /// Quantity is below zero.
    #[error("quantity must be non-negative, got {0}")]
    NegativeQuantity(i64),

    /// Value is negative, NaN or infinite.
    #[error("value must be a non-negative number")]
    InvalidValue,

    /// Type string is not one of the known product kinds.
    #[error("unknown product type: {0:?}")]
    UnknownKind(String),
}
