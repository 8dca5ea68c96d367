//! Project allocation entities - Staff hours and material quantities set
//! aside for one project.
//!
//! Allocations have no id of their own. A staff allocation is identified by
//! its project and employee; material allocations are listed per project and
//! removed per material. References to employees and materials are checked
//! when the allocation is made, not afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee hours planned on a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffAllocation {
    /// `PROJ-NNN` the hours belong to
    pub project_id: String,
    /// `EMP-NNN`
    pub employee_id: String,
    /// Role on this project (e.g. "Lead Painter")
    pub role: String,
    pub hours_allocated: u32,
    pub start_date: NaiveDate,
}

/// Material quantity used on a project. The unit cost is the one in effect
/// when the material was allocated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialAllocation {
    /// `PROJ-NNN` the material is used on
    pub project_id: String,
    /// `MAT-NNN`
    pub material_id: String,
    pub quantity: u32,
    /// Cost per unit in dollars at allocation time
    pub unit_cost: f64,
    pub date_added: NaiveDate,
}

impl MaterialAllocation {
    /// `quantity × unit_cost`
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        f64::from(self.quantity) * self.unit_cost
    }
}
