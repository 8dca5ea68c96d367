//! Estimate dialog form.

use crate::{
    entities::{Estimate, EstimateSource, EstimateStatus},
    errors::{Error, Result, ValidationErrors},
};

use super::{
    RecordForm, choice, optional_text, positive_amount, require_text, required_date,
    required_time,
};

/// Raw input of the estimate dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateForm {
    /// Set when editing an existing estimate
    pub id: Option<String>,
    pub client: String,
    pub address: String,
    pub service_type: String,
    pub date: String,
    pub time: String,
    pub value: String,
    pub notes: String,
    pub status: String,
    pub source: String,
}

impl Default for EstimateForm {
    fn default() -> Self {
        Self {
            id: None,
            client: String::new(),
            address: String::new(),
            service_type: String::new(),
            date: String::new(),
            time: String::new(),
            value: String::new(),
            notes: String::new(),
            status: EstimateStatus::Pending.as_str().to_string(),
            source: EstimateSource::Admin.as_str().to_string(),
        }
    }
}

impl From<&Estimate> for EstimateForm {
    fn from(estimate: &Estimate) -> Self {
        Self {
            id: Some(estimate.id.clone()),
            client: estimate.client.clone(),
            address: estimate.address.clone(),
            service_type: estimate.service_type.clone(),
            date: estimate.date.to_string(),
            time: estimate.time.clone(),
            value: estimate.value.to_string(),
            notes: estimate.notes.clone().unwrap_or_default(),
            status: estimate.status.as_str().to_string(),
            source: estimate.source.as_str().to_string(),
        }
    }
}

impl RecordForm for EstimateForm {
    type Output = Estimate;

    fn editing_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self, id: &str) -> Result<Estimate> {
        let mut errors = ValidationErrors::default();

        let client = require_text(
            &mut errors,
            "client",
            &self.client,
            2,
            "Client name must be at least 2 characters.",
        );
        let address = require_text(
            &mut errors,
            "address",
            &self.address,
            5,
            "Address must be at least 5 characters.",
        );
        let service_type = require_text(
            &mut errors,
            "type",
            &self.service_type,
            1,
            "Please select a service type.",
        );
        let date = required_date(&mut errors, "date", &self.date, "Please select a date.");
        let time = required_time(&mut errors, "time", &self.time, "Please select a time.");
        let value = positive_amount(
            &mut errors,
            "value",
            &self.value,
            "Value must be a positive number.",
        );
        let status = choice(
            &mut errors,
            "status",
            &self.status,
            EstimateStatus::from_value,
            "Please select a status.",
        );
        let source = choice(
            &mut errors,
            "source",
            &self.source,
            EstimateSource::from_value,
            "Please select a source.",
        );

        match (date, time, value, status, source) {
            (Some(date), Some(time), Some(value), Some(status), Some(source)) => {
                errors.into_result(Estimate {
                    id: id.to_string(),
                    client,
                    address,
                    service_type,
                    date,
                    time,
                    value,
                    notes: optional_text(&self.notes),
                    status,
                    source,
                })
            }
            _ => Err(Error::Validation(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{errors::Error, forms::submit, test_utils::seeded_store};

    fn filled_form() -> EstimateForm {
        EstimateForm {
            client: "Pedro Alves".to_string(),
            address: "Rua Verde, 88".to_string(),
            service_type: "Interior Painting".to_string(),
            date: "2023-08-21".to_string(),
            time: "8:00".to_string(),
            value: "1500".to_string(),
            ..EstimateForm::default()
        }
    }

    #[test]
    fn test_staff_entered_estimate_defaults() -> Result<()> {
        let estimate = filled_form().validate("EST-100")?;

        assert_eq!(estimate.status, EstimateStatus::Pending);
        assert_eq!(estimate.source, EstimateSource::Admin);
        assert_eq!(estimate.time, "08:00");
        assert_eq!(estimate.notes, None);
        Ok(())
    }

    #[test]
    fn test_short_address_and_missing_time_fail() {
        let form = EstimateForm {
            address: "Rua".to_string(),
            time: String::new(),
            ..filled_form()
        };

        let Err(Error::Validation(errors)) = form.validate("EST-100") else {
            panic!("expected validation failure");
        };
        assert!(errors.has("address"));
        assert!(errors.has("time"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_submit_approves_existing_estimate() -> Result<()> {
        let mut store = seeded_store();
        let mut form = EstimateForm::from(store.estimate("EST-001").unwrap());
        form.status = "approved".to_string();
        form.notes = "Client asked for low-VOC paint".to_string();

        submit(&mut store, &form)?;

        let estimate = store.estimate("EST-001").unwrap();
        assert_eq!(estimate.status, EstimateStatus::Approved);
        assert_eq!(
            estimate.notes.as_deref(),
            Some("Client asked for low-VOC paint")
        );
        assert_eq!(estimate.client, "João Silva");
        Ok(())
    }
}
