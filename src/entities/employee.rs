//! Employee entity - A member of staff with an hourly rate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Record, string_enum};
use crate::core::ids::EntityKind;

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeStatus {
    /// Currently working
    Active,
    /// Temporarily away
    OnLeave,
    /// No longer employed
    Terminated,
}

string_enum!(EmployeeStatus {
    Active => "active",
    OnLeave => "on-leave",
    Terminated => "terminated",
});

/// Employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// `EMP-NNN`
    pub id: String,
    /// Full name
    pub name: String,
    /// Work email
    pub email: String,
    /// Contact phone, free format
    pub phone: String,
    /// Job title (e.g. "Lead Painter")
    pub role: String,
    /// Department (e.g. "Residential")
    pub department: String,
    /// Employment status
    pub status: EmployeeStatus,
    /// Date hired
    pub hire_date: NaiveDate,
    /// Pay in dollars per hour
    pub hourly_rate: f64,
}

impl Record for Employee {
    const KIND: EntityKind = EntityKind::Employee;

    fn id(&self) -> &str {
        &self.id
    }
}
