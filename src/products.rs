//! Products
//!
//! Catalog reference types. The catalog itself is owned by an external
//! collaborator; the cart keeps only the identifier and a display snapshot
//! copied at add-time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap a catalog identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw catalog identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display data for a product as it looked when it was added to the cart.
///
/// Copied, not linked: later catalog price changes do not retroactively
/// alter cart totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Product name.
    pub name: String,

    /// Unit price in minor units.
    pub unit_price: u64,

    /// Product image URL, display only.
    pub image: Option<String>,
}
