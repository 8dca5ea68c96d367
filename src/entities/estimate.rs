//! Estimate entity - A scheduled quote visit that may become a project.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Record, string_enum};
use crate::core::ids::EntityKind;

/// Estimate status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EstimateStatus {
    /// Awaiting the client's answer
    Pending,
    /// Accepted by the client
    Approved,
    /// Declined by the client
    Rejected,
    /// Visit done and closed
    Completed,
}

string_enum!(EstimateStatus {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
    Completed => "completed",
});

/// Where the estimate request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EstimateSource {
    /// Submitted through the public contact form
    Website,
    /// Entered by staff
    Admin,
}

string_enum!(EstimateSource {
    Website => "website",
    Admin => "admin",
});

/// Estimate record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// `EST-NNN`
    pub id: String,
    /// Client name
    pub client: String,
    /// Visit address
    pub address: String,
    /// Requested service (e.g. "Exterior Painting")
    #[serde(rename = "type")]
    pub service_type: String,
    /// Visit date
    pub date: NaiveDate,
    /// Visit time, `HH:MM`
    pub time: String,
    /// Quoted value in dollars
    pub value: f64,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Current status
    pub status: EstimateStatus,
    /// Request origin
    pub source: EstimateSource,
}

impl Record for Estimate {
    const KIND: EntityKind = EntityKind::Estimate;

    fn id(&self) -> &str {
        &self.id
    }
}
