//! Shared test utilities for the dashboard store.
//!
//! This module provides the fixture-seeded store used by most tests and
//! builders for single records with sensible defaults.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use crate::{
    config::seed::{Seed, default_seed},
    core::store::{DashboardStore, StoreMode},
    entities::{
        Employee, EmployeeStatus, Estimate, EstimateSource, EstimateStatus, FinancialTransaction,
        Material, Project, ProjectStatus, TransactionType,
    },
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The built-in fixture records.
pub fn fixture_seed() -> Seed {
    default_seed().unwrap()
}

/// A lenient store loaded with the built-in fixtures.
/// This is the standard setup for store and report tests.
pub fn seeded_store() -> DashboardStore {
    seeded_store_with_mode(StoreMode::Lenient)
}

/// A store loaded with the built-in fixtures in the given mode.
pub fn seeded_store_with_mode(mode: StoreMode) -> DashboardStore {
    DashboardStore::from_seed(fixture_seed(), mode).unwrap()
}

/// Creates a test project.
///
/// # Defaults
/// * client: "Test Client", type: "Residential Painting"
/// * runs 2023-07-01 to 2023-07-31
/// * value: 5000.0
pub fn sample_project(id: &str, status: ProjectStatus) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {id}"),
        client: "Test Client".to_string(),
        project_type: "Residential Painting".to_string(),
        status,
        start_date: date(2023, 7, 1),
        end_date: date(2023, 7, 31),
        value: 5000.0,
    }
}

/// Creates an active test employee hired 2022-01-10 at 25.0 per hour.
pub fn sample_employee(id: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: "Test Painter".to_string(),
        email: "painter@paintpro.com".to_string(),
        phone: "(555) 000-0000".to_string(),
        role: "Painter".to_string(),
        department: "Residential".to_string(),
        status: EmployeeStatus::Active,
        hire_date: date(2022, 1, 10),
        hourly_rate: 25.0,
    }
}

/// Creates a test material in the "Paint" category, sold by the gallon.
pub fn sample_material(id: &str, quantity: u32, unit_cost: f64, reorder_level: u32) -> Material {
    Material {
        id: id.to_string(),
        name: "Test Paint".to_string(),
        category: "Paint".to_string(),
        quantity,
        unit: "Gallon".to_string(),
        unit_cost,
        reorder_level,
    }
}

/// Creates a test transaction dated 2023-08-01 with no project or status.
pub fn sample_transaction(
    id: &str,
    transaction_type: TransactionType,
    category: &str,
    amount: f64,
) -> FinancialTransaction {
    FinancialTransaction {
        id: id.to_string(),
        description: format!("{category} entry"),
        transaction_type,
        category: category.to_string(),
        amount,
        date: date(2023, 8, 1),
        project: None,
        status: None,
    }
}

/// Creates a pending, staff-entered test estimate for a 2023-08-15 visit at
/// 10:00, quoted at 2000.0.
pub fn sample_estimate(id: &str) -> Estimate {
    Estimate {
        id: id.to_string(),
        client: "Test Client".to_string(),
        address: "100 Main Street".to_string(),
        service_type: "Interior Painting".to_string(),
        date: date(2023, 8, 15),
        time: "10:00".to_string(),
        value: 2000.0,
        notes: None,
        status: EstimateStatus::Pending,
        source: EstimateSource::Admin,
    }
}
