//! Public contact form on the marketing site.
//!
//! A contact message may carry a request for an estimate visit. Such a
//! request is turned into a prefilled [`EstimateForm`] for staff to quote;
//! nothing is written to the store until that form is submitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    entities::{EstimateSource, EstimateStatus, string_enum},
    errors::{Error, Result, ValidationErrors},
};

use super::{EstimateForm, choice, optional_text, require_text, valid_email};

/// Kind of service a visitor asks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    Residential,
    Commercial,
    Remodeling,
    Other,
}

string_enum!(ServiceType {
    Residential => "residential",
    Commercial => "commercial",
    Remodeling => "remodeling",
    Other => "other",
});

impl ServiceType {
    /// Service name used on estimates.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential Painting",
            Self::Commercial => "Commercial Painting",
            Self::Remodeling => "Remodeling",
            Self::Other => "Other",
        }
    }
}

/// Raw input of the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub message: String,
    /// Whether the visitor also wants an estimate visit
    pub request_estimate: bool,
    pub preferred_date: String,
    pub preferred_time: String,
    pub address: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            service_type: ServiceType::Residential.as_str().to_string(),
            message: String::new(),
            request_estimate: false,
            preferred_date: String::new(),
            preferred_time: String::new(),
            address: String::new(),
        }
    }
}

/// A validated contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: ServiceType,
    pub message: String,
    /// Present when the visitor asked for an estimate visit
    pub visit: Option<VisitRequest>,
}

/// Preferred details for an estimate visit. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitRequest {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub address: Option<String>,
}

impl ContactForm {
    /// Checks the form. Visit fields are ignored unless `request_estimate`
    /// is set; when given, the date must be `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<ContactRequest> {
        let mut errors = ValidationErrors::default();

        let name = require_text(
            &mut errors,
            "name",
            &self.name,
            2,
            "Name must be at least 2 characters.",
        );
        let email = valid_email(&mut errors, "email", &self.email);
        let phone = require_text(
            &mut errors,
            "phone",
            &self.phone,
            10,
            "Please enter a valid phone number.",
        );
        let service_type = choice(
            &mut errors,
            "service_type",
            &self.service_type,
            ServiceType::from_value,
            "Please select a service type.",
        );
        let message = require_text(
            &mut errors,
            "message",
            &self.message,
            10,
            "Message must be at least 10 characters.",
        );

        let visit = if self.request_estimate {
            let date = optional_text(&self.preferred_date).and_then(|raw| {
                let parsed = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok();
                if parsed.is_none() {
                    errors.push("preferred_date", "Please select a valid date.");
                }
                parsed
            });
            Some(VisitRequest {
                date,
                time: optional_text(&self.preferred_time),
                address: optional_text(&self.address),
            })
        } else {
            None
        };

        match service_type {
            Some(service_type) => errors.into_result(ContactRequest {
                name,
                email,
                phone,
                service_type,
                message,
                visit,
            }),
            None => Err(Error::Validation(errors)),
        }
    }
}

impl ContactRequest {
    /// Prefills an estimate form from the visit request, or `None` when the
    /// visitor did not ask for one. The value is left blank for staff to
    /// quote.
    #[must_use]
    pub fn estimate_form(&self) -> Option<EstimateForm> {
        let visit = self.visit.as_ref()?;
        Some(EstimateForm {
            id: None,
            client: self.name.clone(),
            address: visit.address.clone().unwrap_or_default(),
            service_type: self.service_type.label().to_string(),
            date: visit.date.map(|d| d.to_string()).unwrap_or_default(),
            time: visit.time.clone().unwrap_or_default(),
            value: String::new(),
            notes: self.message.clone(),
            status: EstimateStatus::Pending.as_str().to_string(),
            source: EstimateSource::Website.as_str().to_string(),
        })
    }
}
