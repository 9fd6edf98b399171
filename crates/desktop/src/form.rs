//! Registration form parsing.
//!
//! The form arrives as raw strings straight out of the text inputs; parsing
//! reports the first offending field so the frontend can point the user at
//! it, the way the original per-field error dialogs did.

use serde::{Deserialize, Serialize};
use stockbook_core::{ProductDraft, ProductKind, ValidationError};
use thiserror::Error;

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub description: String,
    pub quantity: String,
    pub value: String,
    pub kind: String,
}

/// A form field that cannot be turned into a product draft.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("fill in the Description field")]
    MissingDescription,

    #[error("fill in the Quantity field with a non-negative whole number")]
    BadQuantity,

    #[error("fill in the Value field with a non-negative number")]
    BadValue,

    #[error("select a Type")]
    MissingKind,

    /// Fields parsed individually but the tuple failed domain validation
    /// (e.g. an unknown type name).
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl RegistrationForm {
    /// Turn the raw fields into a validated draft.
    pub fn parse(&self) -> Result<ProductDraft, FormError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::MissingDescription);
        }

        let quantity: i64 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| FormError::BadQuantity)?;
        if quantity < 0 {
            return Err(FormError::BadQuantity);
        }

        let value: f64 = self.value.trim().parse().map_err(|_| FormError::BadValue)?;
        if !value.is_finite() || value < 0.0 {
            return Err(FormError::BadValue);
        }

        let kind = self.kind.trim();
        if kind.is_empty() {
            return Err(FormError::MissingKind);
        }
        let kind = kind.parse::<ProductKind>()?;

        Ok(ProductDraft::new(description, quantity, value, kind)?)
    }
}
