//! Material dialog form.

use crate::{
    entities::Material,
    errors::{Error, Result, ValidationErrors},
};

use super::{RecordForm, non_negative_count, positive_amount, require_text};

/// Reorder level offered by a fresh material form
pub const DEFAULT_REORDER_LEVEL: u32 = 10;

/// Raw input of the material dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialForm {
    /// Set when editing an existing material
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit: String,
    pub unit_cost: String,
    pub reorder_level: String,
}

impl Default for MaterialForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            category: String::new(),
            quantity: String::new(),
            unit: String::new(),
            unit_cost: String::new(),
            reorder_level: DEFAULT_REORDER_LEVEL.to_string(),
        }
    }
}

impl From<&Material> for MaterialForm {
    fn from(material: &Material) -> Self {
        Self {
            id: Some(material.id.clone()),
            name: material.name.clone(),
            category: material.category.clone(),
            quantity: material.quantity.to_string(),
            unit: material.unit.clone(),
            unit_cost: material.unit_cost.to_string(),
            reorder_level: material.reorder_level.to_string(),
        }
    }
}

impl RecordForm for MaterialForm {
    type Output = Material;

    fn editing_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self, id: &str) -> Result<Material> {
        let mut errors = ValidationErrors::default();

        let name = require_text(
            &mut errors,
            "name",
            &self.name,
            2,
            "Material name must be at least 2 characters.",
        );
        let category = require_text(
            &mut errors,
            "category",
            &self.category,
            1,
            "Please select a category.",
        );
        let quantity = non_negative_count(
            &mut errors,
            "quantity",
            &self.quantity,
            "Quantity must be a non-negative whole number.",
        );
        let unit = require_text(&mut errors, "unit", &self.unit, 1, "Please enter a unit.");
        let unit_cost = positive_amount(
            &mut errors,
            "unit_cost",
            &self.unit_cost,
            "Unit cost must be a positive number.",
        );
        let reorder_level = non_negative_count(
            &mut errors,
            "reorder_level",
            &self.reorder_level,
            "Reorder level must be a non-negative whole number.",
        );

        match (quantity, unit_cost, reorder_level) {
            (Some(quantity), Some(unit_cost), Some(reorder_level)) => {
                errors.into_result(Material {
                    id: id.to_string(),
                    name,
                    category,
                    quantity,
                    unit,
                    unit_cost,
                    reorder_level,
                })
            }
            _ => Err(Error::Validation(errors)),
        }
    }
}
