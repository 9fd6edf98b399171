//! The product entity and its validated field tuple.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier of a stored product.
///
/// Assigned by the catalog store on insert; monotonically increasing and
/// never reused after deletion. Immutable once assigned.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

/// Packaging type of a product. Closed set; the registration form offers
/// exactly these options.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Box,
    Bag,
    Unit,
}

impl ProductKind {
    /// Every kind, in the order the form presents them.
    pub const ALL: [ProductKind; 3] = [ProductKind::Box, ProductKind::Bag, ProductKind::Unit];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Box => "box",
            ProductKind::Bag => "bag",
            ProductKind::Unit => "unit",
        }
    }
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "box" => Ok(ProductKind::Box),
            "bag" => Ok(ProductKind::Bag),
            "unit" => Ok(ProductKind::Unit),
            _ => Err(ValidationError::UnknownKind(s.to_string())),
        }
    }
}

/// The non-id fields of a product, validated on construction.
///
/// A draft cannot be built with an invalid field tuple, so anything that
/// accepts a `ProductDraft` can persist it without re-checking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    description: String,
    quantity: i64,
    value: f64,
    kind: ProductKind,
}

impl ProductDraft {
    pub fn new(
        description: impl Into<String>,
        quantity: i64,
        value: f64,
        kind: ProductKind,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity(quantity));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidValue);
        }
        Ok(Self {
            description,
            quantity,
            value,
            kind,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }
}

/// A stored product row: an id plus the four user-editable fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    description: String,
    quantity: i64,
    value: f64,
    kind: ProductKind,
}

impl Product {
    /// Attach a store-assigned id to a validated draft.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            description: draft.description,
            quantity: draft.quantity,
            value: draft.value,
            kind: draft.kind,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }
}
