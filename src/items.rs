//! Line Items
//!
//! A line item is one `(product, size, color)` selection in the cart, with a
//! quantity. Candidates arrive from the storefront without an identifier and
//! are promoted to stored items when inserted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::products::{ProductId, ProductSnapshot};

/// Unique identifier of a cart line item, generated at insertion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(Uuid);

impl LineItemId {
    /// Generate a fresh identifier for a newly inserted item.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

/// One `(product, size, color)` selection in the cart, with a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique identifier, generated when the item was first added.
    pub id: LineItemId,

    /// Catalog product this item refers to.
    pub product: ProductId,

    /// Product display data copied when the item was first added.
    pub snapshot: ProductSnapshot,

    /// Number of units, at least 1.
    pub quantity: u32,

    /// Free-form size selector.
    pub size: String,

    /// Free-form color selector.
    pub color: String,

    /// Optional designer display label.
    pub designer: Option<String>,
}

impl LineItem {
    /// Promote a candidate to a stored line item with a fresh identifier.
    #[must_use]
    pub fn from_candidate(candidate: NewLineItem) -> Self {
        Self {
            id: LineItemId::generate(),
            product: candidate.product,
            snapshot: candidate.snapshot,
            quantity: candidate.quantity,
            size: candidate.size,
            color: candidate.color,
            designer: candidate.designer,
        }
    }

    /// Whether a candidate refers to the same `(product, size, color)` variant.
    #[must_use]
    pub fn matches_variant(&self, candidate: &NewLineItem) -> bool {
        self.product == candidate.product
            && self.size == candidate.size
            && self.color == candidate.color
    }

    /// Price of this row in minor units: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.snapshot.unit_price * u64::from(self.quantity)
    }
}

/// A line item candidate as submitted by the storefront, before an
/// identifier has been assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    /// Catalog product being added.
    pub product: ProductId,

    /// Product display data at add-time.
    pub snapshot: ProductSnapshot,

    /// Number of units to add.
    pub quantity: u32,

    /// Free-form size selector.
    pub size: String,

    /// Free-form color selector.
    pub color: String,

    /// Optional designer display label.
    pub designer: Option<String>,
}
