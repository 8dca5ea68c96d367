//! Form validation - the boundary between raw dialog input and the store.
//!
//! Each form holds the text the user typed. `validate` either produces a
//! fully typed record or reports every failing field at once; the store is
//! never called with a record that did not pass. [`submit`] runs the dialog
//! flow: a form without an id is added under a fresh id, a form with an id
//! replaces that record.

pub mod contact;
pub mod employee;
pub mod estimate;
pub mod material;
pub mod project;
pub mod transaction;

pub use contact::{ContactForm, ContactRequest, ServiceType, VisitRequest};
pub use employee::EmployeeForm;
pub use estimate::EstimateForm;
pub use material::MaterialForm;
pub use project::ProjectForm;
pub use transaction::TransactionForm;

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use tracing::info;

use crate::{
    core::store::{DashboardStore, Outcome},
    entities::{Employee, Estimate, FinancialTransaction, Material, Project, Record},
    errors::{Result, ValidationErrors},
};

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+'-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").ok()
});

/// A dialog form that produces one kind of record.
pub trait RecordForm {
    /// Record produced by a valid form
    type Output: StoreRecord;

    /// Id of the record being edited, or `None` when adding.
    fn editing_id(&self) -> Option<&str>;

    /// Checks every field and builds the record under `id`.
    fn validate(&self, id: &str) -> Result<Self::Output>;
}

/// Routes a record to its collection's add and update operations.
pub trait StoreRecord: Record {
    fn add_to(self, store: &mut DashboardStore) -> Result<()>;
    fn update_in(self, store: &mut DashboardStore) -> Result<Outcome>;
}

impl StoreRecord for Project {
    fn add_to(self, store: &mut DashboardStore) -> Result<()> {
        store.add_project(self)
    }

    fn update_in(self, store: &mut DashboardStore) -> Result<Outcome> {
        store.update_project(self)
    }
}

impl StoreRecord for Employee {
    fn add_to(self, store: &mut DashboardStore) -> Result<()> {
        store.add_employee(self)
    }

    fn update_in(self, store: &mut DashboardStore) -> Result<Outcome> {
        store.update_employee(self)
    }
}

impl StoreRecord for Material {
    fn add_to(self, store: &mut DashboardStore) -> Result<()> {
        store.add_material(self)
    }

    fn update_in(self, store: &mut DashboardStore) -> Result<Outcome> {
        store.update_material(self)
    }
}

impl StoreRecord for FinancialTransaction {
    fn add_to(self, store: &mut DashboardStore) -> Result<()> {
        store.add_transaction(self)
    }

    fn update_in(self, store: &mut DashboardStore) -> Result<Outcome> {
        store.update_transaction(self)
    }
}

impl StoreRecord for Estimate {
    fn add_to(self, store: &mut DashboardStore) -> Result<()> {
        store.add_estimate(self)
    }

    fn update_in(self, store: &mut DashboardStore) -> Result<Outcome> {
        store.update_estimate(self)
    }
}

/// Validates `form` and applies it to the store.
///
/// Adding takes the next id for the record's kind. Editing keeps the form's
/// id; an edit of a record that no longer exists follows the store's mode.
/// On validation failure the store is untouched.
pub fn submit<F: RecordForm>(store: &mut DashboardStore, form: &F) -> Result<F::Output> {
    let kind = <F::Output as Record>::KIND;
    match form.editing_id() {
        Some(id) => {
            let record = form.validate(id)?;
            let outcome = record.clone().update_in(store)?;
            info!(%kind, id, ?outcome, "Record updated from form");
            Ok(record)
        }
        None => {
            let id = store.next_id(kind);
            let record = form.validate(&id)?;
            record.clone().add_to(store)?;
            info!(%kind, id = %id, "Record added from form");
            Ok(record)
        }
    }
}

// --- field checks ---
//
// Each check records a failure in `errors` and returns the parsed value when
// the field is usable. A `None` from a check always comes with an entry in
// `errors`.

fn require_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    min_chars: usize,
    message: &str,
) -> String {
    let trimmed = value.trim();
    if trimmed.chars().count() < min_chars {
        errors.push(field, message);
    }
    trimmed.to_string()
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Reads a number the way a numeric input coerces text: blank is 0.
fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn positive_amount(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
    message: &str,
) -> Option<f64> {
    match coerce_number(raw) {
        Some(n) if n > 0.0 => Some(n),
        _ => {
            errors.push(field, message);
            None
        }
    }
}

fn non_negative_count(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
    message: &str,
) -> Option<u32> {
    let number = coerce_number(raw).filter(|n| n.fract() == 0.0 && *n >= 0.0);
    match number {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(n) if n <= f64::from(u32::MAX) => Some(n as u32),
        _ => {
            errors.push(field, message);
            None
        }
    }
}

fn required_date(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
    message: &str,
) -> Option<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
    if parsed.is_none() {
        errors.push(field, message);
    }
    parsed
}

fn required_time(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
    message: &str,
) -> Option<String> {
    let trimmed = raw.trim();
    match NaiveTime::parse_from_str(trimmed, "%H:%M") {
        Ok(time) => Some(time.format("%H:%M").to_string()),
        Err(_) => {
            errors.push(field, message);
            None
        }
    }
}

fn choice<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
    parse: fn(&str) -> Option<T>,
    message: &str,
) -> Option<T> {
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        errors.push(field, message);
    }
    parsed
}

fn valid_email(errors: &mut ValidationErrors, field: &'static str, raw: &str) -> String {
    let trimmed = raw.trim();
    if !EMAIL_RE.as_ref().is_some_and(|re| re.is_match(trimmed)) {
        errors.push(field, "Please enter a valid email address.");
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;

    fn assert_rejected<F: RecordForm>(form: &F, id: &str) {
        let Err(Error::Validation(errors)) = form.validate(id) else {
            panic!("expected validation failure for {id}");
        };
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_blank_dialogs_are_rejected_not_built() {
        assert_rejected(&ProjectForm::default(), "PROJ-2000");
        assert_rejected(&EmployeeForm::default(), "EMP-100");
        assert_rejected(&MaterialForm::default(), "MAT-100");
        assert_rejected(&TransactionForm::default(), "TRX-100");
        assert_rejected(&EstimateForm::default(), "EST-100");
    }

    #[test]
    fn test_only_typed_fields_failing_still_rejects() {
        let form = ProjectForm {
            name: "Garcia Kitchen".to_string(),
            client: "Maria Garcia".to_string(),
            project_type: "Kitchen Remodeling".to_string(),
            status: "archived".to_string(),
            start_date: "soon".to_string(),
            end_date: "later".to_string(),
            value: "lots".to_string(),
            ..ProjectForm::default()
        };
        let Err(Error::Validation(errors)) = form.validate("PROJ-2000") else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_coerce_number_treats_blank_as_zero() {
        assert_eq!(coerce_number(""), Some(0.0));
        assert_eq!(coerce_number("  12.5 "), Some(12.5));
        assert_eq!(coerce_number("abc"), None);
        assert_eq!(coerce_number("inf"), None);
    }

    #[test]
    fn test_non_negative_count_rejects_fractions_and_negatives() {
        let mut errors = ValidationErrors::default();
        assert_eq!(non_negative_count(&mut errors, "quantity", "", "bad"), Some(0));
        assert_eq!(non_negative_count(&mut errors, "quantity", "48", "bad"), Some(48));
        assert!(errors.is_empty());

        assert_eq!(non_negative_count(&mut errors, "quantity", "2.5", "bad"), None);
        assert_eq!(non_negative_count(&mut errors, "quantity", "-1", "bad"), None);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_positive_amount_rejects_zero_and_blank() {
        let mut errors = ValidationErrors::default();
        assert_eq!(positive_amount(&mut errors, "value", "0", "bad"), None);
        assert_eq!(positive_amount(&mut errors, "value", "", "bad"), None);
        assert_eq!(positive_amount(&mut errors, "value", "0.01", "bad"), Some(0.01));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_email_shapes() {
        let mut errors = ValidationErrors::default();
        valid_email(&mut errors, "email", "john.smith@paintpro.com");
        valid_email(&mut errors, "email", "o'neil+jobs@mail.example.org");
        assert!(errors.is_empty());

        valid_email(&mut errors, "email", "john.smith");
        valid_email(&mut errors, "email", "john@paintpro");
        valid_email(&mut errors, "email", "john smith@paintpro.com");
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_required_time_normalizes() {
        let mut errors = ValidationErrors::default();
        assert_eq!(
            required_time(&mut errors, "time", "9:30", "bad"),
            Some("09:30".to_string())
        );
        assert_eq!(required_time(&mut errors, "time", "25:00", "bad"), None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_require_text_counts_characters_after_trimming() {
        let mut errors = ValidationErrors::default();
        assert_eq!(require_text(&mut errors, "name", " Jo ", 2, "short"), "Jo");
        assert!(errors.is_empty());
        require_text(&mut errors, "name", "  a  ", 2, "short");
        assert!(errors.has("name"));
    }
}
