//! Immutable menu entries.

use serde::{Deserialize, Serialize};

use crate::types::{ItemId, Price};

/// A purchasable menu entry.
///
/// Catalog items are static reference data: the menu renderer reads them and
/// the cart snapshots them at add-time. They are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique catalog id.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price in whole rupees.
    pub price: Price,
    /// Display glyph shown on cards and cart lines.
    #[serde(rename = "emoji")]
    pub glyph: String,
}

impl CatalogItem {
    /// Create a catalog item.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: Price,
        glyph: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            glyph: glyph.into(),
        }
    }
}
