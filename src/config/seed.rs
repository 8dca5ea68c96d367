//! Fixture seed loading from seed.toml
//!
//! The store starts every session from a fixed set of records. The default
//! set is compiled into the binary; a different file can be named in the
//! application configuration.

use crate::{
    entities::{
        Employee, Estimate, FinancialTransaction, Material, MaterialAllocation, Project,
        StaffAllocation,
    },
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;

/// Fixture records compiled into the crate.
const DEFAULT_SEED: &str = include_str!("../../seed.toml");

/// Structure of a seed file. Every table is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Seed {
    /// `[[projects]]`
    pub projects: Vec<Project>,
    /// `[[employees]]`
    pub employees: Vec<Employee>,
    /// `[[materials]]`
    pub materials: Vec<Material>,
    /// `[[transactions]]`
    pub transactions: Vec<FinancialTransaction>,
    /// `[[estimates]]`
    pub estimates: Vec<Estimate>,
    /// `[[staff_allocations]]`, checked against projects and employees
    pub staff_allocations: Vec<StaffAllocation>,
    /// `[[material_allocations]]`, checked against projects and materials
    pub material_allocations: Vec<MaterialAllocation>,
}

/// Parses seed records from TOML text.
pub fn parse_seed(contents: &str) -> Result<Seed> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed data: {e}"),
    })
}

/// Loads seed records from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A record is missing a required field or has an unknown status
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Seed> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading seed data from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;
    parse_seed(&contents)
}

/// The built-in fixture records.
pub fn default_seed() -> Result<Seed> {
    parse_seed(DEFAULT_SEED)
}
