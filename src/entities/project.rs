//! Project entity - A painting or remodeling job for a client.
//!
//! Each project has a client, a free-text type (the dialog offers fixed
//! choices), a status, a scheduled date range and a contract value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Record, string_enum};
use crate::core::ids::EntityKind;

/// Where a project stands. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Accepted but not started
    Pending,
    /// Work under way
    InProgress,
    /// Delivered
    Completed,
    /// Called off
    Cancelled,
}

string_enum!(ProjectStatus {
    Pending => "pending",
    InProgress => "in-progress",
    Completed => "completed",
    Cancelled => "cancelled",
});

impl ProjectStatus {
    /// Pending and in-progress projects count as active on the dashboard.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }
}

/// Project record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// `PROJ-NNN`
    pub id: String,
    /// Display name (e.g. "Johnson Residence")
    pub name: String,
    /// Client name
    pub client: String,
    /// Kind of work (e.g. "Residential Painting")
    #[serde(rename = "type")]
    pub project_type: String,
    /// Current status
    pub status: ProjectStatus,
    /// Scheduled start
    pub start_date: NaiveDate,
    /// Scheduled end
    pub end_date: NaiveDate,
    /// Contract value in dollars
    pub value: f64,
}

impl Record for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> &str {
        &self.id
    }
}
