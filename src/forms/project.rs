//! Project dialog form.

use crate::{
    entities::{Project, ProjectStatus},
    errors::{Error, Result, ValidationErrors},
};

use super::{RecordForm, choice, positive_amount, require_text, required_date};

/// Raw input of the project dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectForm {
    /// Set when editing an existing project
    pub id: Option<String>,
    pub name: String,
    pub client: String,
    pub project_type: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub value: String,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            client: String::new(),
            project_type: String::new(),
            status: ProjectStatus::Pending.as_str().to_string(),
            start_date: String::new(),
            end_date: String::new(),
            value: String::new(),
        }
    }
}

impl From<&Project> for ProjectForm {
    fn from(project: &Project) -> Self {
        Self {
            id: Some(project.id.clone()),
            name: project.name.clone(),
            client: project.client.clone(),
            project_type: project.project_type.clone(),
            status: project.status.as_str().to_string(),
            start_date: project.start_date.to_string(),
            end_date: project.end_date.to_string(),
            value: project.value.to_string(),
        }
    }
}

impl RecordForm for ProjectForm {
    type Output = Project;

    fn editing_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self, id: &str) -> Result<Project> {
        let mut errors = ValidationErrors::default();

        let name = require_text(
            &mut errors,
            "name",
            &self.name,
            2,
            "Project name must be at least 2 characters.",
        );
        let client = require_text(
            &mut errors,
            "client",
            &self.client,
            2,
            "Client name must be at least 2 characters.",
        );
        let project_type = require_text(
            &mut errors,
            "type",
            &self.project_type,
            1,
            "Please select a project type.",
        );
        let status = choice(
            &mut errors,
            "status",
            &self.status,
            ProjectStatus::from_value,
            "Please select a status.",
        );
        let start_date = required_date(
            &mut errors,
            "start_date",
            &self.start_date,
            "Please select a start date.",
        );
        let end_date = required_date(
            &mut errors,
            "end_date",
            &self.end_date,
            "Please select an end date.",
        );
        let value = positive_amount(
            &mut errors,
            "value",
            &self.value,
            "Value must be a positive number.",
        );

        match (status, start_date, end_date, value) {
            (Some(status), Some(start_date), Some(end_date), Some(value)) => {
                errors.into_result(Project {
                    id: id.to_string(),
                    name,
                    client,
                    project_type,
                    status,
                    start_date,
                    end_date,
                    value,
                })
            }
            _ => Err(Error::Validation(errors)),
        }
    }
}
