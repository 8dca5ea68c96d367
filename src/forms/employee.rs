//! Employee dialog form.

use crate::{
    entities::{Employee, EmployeeStatus},
    errors::{Error, Result, ValidationErrors},
};

use super::{
    RecordForm, choice, positive_amount, require_text, required_date, valid_email,
};

/// Raw input of the employee dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    /// Set when editing an existing employee
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department: String,
    pub status: String,
    pub hire_date: String,
    pub hourly_rate: String,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: String::new(),
            department: String::new(),
            status: EmployeeStatus::Active.as_str().to_string(),
            hire_date: String::new(),
            hourly_rate: String::new(),
        }
    }
}

impl From<&Employee> for EmployeeForm {
    fn from(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id.clone()),
            name: employee.name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            role: employee.role.clone(),
            department: employee.department.clone(),
            status: employee.status.as_str().to_string(),
            hire_date: employee.hire_date.to_string(),
            hourly_rate: employee.hourly_rate.to_string(),
        }
    }
}

impl RecordForm for EmployeeForm {
    type Output = Employee;

    fn editing_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self, id: &str) -> Result<Employee> {
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
        let role = require_text(&mut errors, "role", &self.role, 1, "Please select a role.");
        let department = require_text(
            &mut errors,
            "department",
            &self.department,
            1,
            "Please select a department.",
        );
        let status = choice(
            &mut errors,
            "status",
            &self.status,
            EmployeeStatus::from_value,
            "Please select a status.",
        );
        let hire_date = required_date(
            &mut errors,
            "hire_date",
            &self.hire_date,
            "Please select a hire date.",
        );
        let hourly_rate = positive_amount(
            &mut errors,
            "hourly_rate",
            &self.hourly_rate,
            "Hourly rate must be a positive number.",
        );

        match (status, hire_date, hourly_rate) {
            (Some(status), Some(hire_date), Some(hourly_rate)) => errors.into_result(Employee {
                id: id.to_string(),
                name,
                email,
                phone,
                role,
                department,
                status,
                hire_date,
                hourly_rate,
            }),
            _ => Err(Error::Validation(errors)),
        }
    }
}
