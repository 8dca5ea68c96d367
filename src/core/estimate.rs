//! Estimate to project conversion.
//!
//! An approved estimate becomes a pending project for the same client. The
//! project form is prefilled from the estimate so the dialog can adjust it
//! before saving; the estimate itself is left as it is.

use chrono::Days;
use tracing::info;

use crate::{
    core::{ids::EntityKind, store::DashboardStore},
    entities::{Estimate, Project, ProjectStatus},
    errors::{Error, Result},
    forms::{ProjectForm, submit},
};

/// Default length of a converted project
pub const CONVERTED_PROJECT_DAYS: u64 = 30;

/// Builds the project form offered when converting `estimate`.
///
/// Name is `"{service type} - {client}"`, status is pending, and the project
/// runs from the visit date for [`CONVERTED_PROJECT_DAYS`] days at the quoted
/// value.
#[must_use]
pub fn project_form_for(estimate: &Estimate) -> ProjectForm {
    let end_date = estimate
        .date
        .checked_add_days(Days::new(CONVERTED_PROJECT_DAYS))
        .unwrap_or(estimate.date);

    ProjectForm {
        id: None,
        name: format!("{} - {}", estimate.service_type, estimate.client),
        client: estimate.client.clone(),
        project_type: estimate.service_type.clone(),
        status: ProjectStatus::Pending.as_str().to_string(),
        start_date: estimate.date.to_string(),
        end_date: end_date.to_string(),
        value: estimate.value.to_string(),
    }
}

/// Converts the estimate with `estimate_id` into a new project using the
/// prefilled form unchanged.
///
/// # Errors
/// `Error::NotFound` if there is no such estimate, or the project form's
/// validation error if the estimate's data does not make a valid project.
pub fn convert_to_project(store: &mut DashboardStore, estimate_id: &str) -> Result<Project> {
    let form = store
        .estimate(estimate_id)
        .map(project_form_for)
        .ok_or_else(|| Error::NotFound {
            kind: EntityKind::Estimate,
            id: estimate_id.to_string(),
        })?;

    let project = submit(store, &form)?;
    info!(estimate_id, project_id = %project.id, "Estimate converted to project");
    Ok(project)
}
