//! Material entity - An inventory line (paint, tools, supplies).
//!
//! Only the inputs are stored. Total value and stock status are derived from
//! quantity, unit cost and reorder level every time they are read, so they can
//! never disagree with the inputs after an update.

use serde::{Deserialize, Serialize};

use super::{Record, string_enum};
use crate::core::ids::EntityKind;

/// Stock level relative to the reorder threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// Above the reorder level
    InStock,
    /// At or below the reorder level, but not empty
    LowStock,
    /// Quantity is zero
    OutOfStock,
}

string_enum!(StockStatus {
    InStock => "in-stock",
    LowStock => "low-stock",
    OutOfStock => "out-of-stock",
});

impl StockStatus {
    /// Classifies a quantity against its reorder level.
    #[must_use]
    pub const fn classify(quantity: u32, reorder_level: u32) -> Self {
        if quantity == 0 {
            Self::OutOfStock
        } else if quantity <= reorder_level {
            Self::LowStock
        } else {
            Self::InStock
        }
    }
}

/// Material record. Unknown keys in fixture data (such as a precomputed
/// `total_value` or `status`) are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// `MAT-NNN`
    pub id: String,
    /// Display name
    pub name: String,
    /// Category (e.g. "Paint", "Tools")
    pub category: String,
    /// Units on hand
    pub quantity: u32,
    /// Unit label (e.g. "Gallon")
    pub unit: String,
    /// Cost per unit in dollars
    pub unit_cost: f64,
    /// Quantity at or below which the line needs reordering
    pub reorder_level: u32,
}

impl Material {
    /// `quantity × unit_cost`
    #[must_use]
    pub fn total_value(&self) -> f64 {
        f64::from(self.quantity) * self.unit_cost
    }

    #[must_use]
    pub const fn status(&self) -> StockStatus {
        StockStatus::classify(self.quantity, self.reorder_level)
    }
}

impl Record for Material {
    const KIND: EntityKind = EntityKind::Material;

    fn id(&self) -> &str {
        &self.id
    }
}
