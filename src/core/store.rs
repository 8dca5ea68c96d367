//! Dashboard store - The in-memory collections and the only sanctioned way to
//! change them.
//!
//! Every mutation takes `&mut self`, so a store has exactly one writer at a
//! time. Collections keep insertion order: add appends, update replaces in
//! place, delete filters the record out. Share a store across tasks through
//! [`StoreHandle`](crate::core::handle::StoreHandle).

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{
    config::seed::Seed,
    core::ids::{self, EntityKind},
    entities::{
        Employee, Estimate, FinancialTransaction, Material, MaterialAllocation, Project, Record,
        StaffAllocation,
    },
    errors::{Error, Result},
};

/// How update/delete report an id with no matching record.
///
/// Either way the collection is left exactly as it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    /// Report `Ok(Outcome::Unmatched)`
    #[default]
    Lenient,
    /// Report `Err(Error::NotFound)`
    Strict,
}

/// Result of an update or delete that did not fail.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A record with the id existed and was replaced or removed
    Applied,
    /// No record had the id; nothing changed
    Unmatched,
}

/// Insertion-ordered records of one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    /// Full snapshot in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Next free id for this collection, recomputed from its current contents.
    #[must_use]
    pub fn next_id(&self) -> String {
        ids::next_id(T::KIND, self.items.iter().map(Record::id))
    }

    fn push(&mut self, record: T) -> Result<()> {
        if self.contains(record.id()) {
            return Err(Error::DuplicateId {
                kind: T::KIND,
                id: record.id().to_string(),
            });
        }
        debug!(kind = %T::KIND, id = record.id(), "record added");
        self.items.push(record);
        Ok(())
    }

    fn replace(&mut self, record: T) -> Outcome {
        match self.items.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                debug!(kind = %T::KIND, id = record.id(), "record replaced");
                *slot = record;
                Outcome::Applied
            }
            None => Outcome::Unmatched,
        }
    }

    fn remove(&mut self, id: &str) -> Outcome {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        if self.items.len() == before {
            Outcome::Unmatched
        } else {
            debug!(kind = %T::KIND, id, "record deleted");
            Outcome::Applied
        }
    }
}

/// The dashboard's entity store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStore {
    mode: StoreMode,
    projects: Collection<Project>,
    employees: Collection<Employee>,
    materials: Collection<Material>,
    transactions: Collection<FinancialTransaction>,
    estimates: Collection<Estimate>,
    staff_allocations: Vec<StaffAllocation>,
    material_allocations: Vec<MaterialAllocation>,
}

impl DashboardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(mode: StoreMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Creates a store holding the fixture records of `seed`, in seed order.
    ///
    /// A seed that repeats an id within one kind is rejected.
    pub fn from_seed(seed: Seed, mode: StoreMode) -> Result<Self> {
        let mut store = Self::new(mode);
        for project in seed.projects {
            store.projects.push(project)?;
        }
        for employee in seed.employees {
            store.employees.push(employee)?;
        }
        for material in seed.materials {
            store.materials.push(material)?;
        }
        for transaction in seed.transactions {
            store.transactions.push(transaction)?;
        }
        for estimate in seed.estimates {
            store.estimates.push(estimate)?;
        }
        for allocation in seed.staff_allocations {
            store.assign_employee(allocation)?;
        }
        for allocation in seed.material_allocations {
            store.push_material_allocation(allocation)?;
        }
        info!(
            projects = store.projects.len(),
            employees = store.employees.len(),
            materials = store.materials.len(),
            transactions = store.transactions.len(),
            estimates = store.estimates.len(),
            staff_allocations = store.staff_allocations.len(),
            material_allocations = store.material_allocations.len(),
            "Store seeded"
        );
        Ok(store)
    }

    #[must_use]
    pub const fn mode(&self) -> StoreMode {
        self.mode
    }

    /// Next id for `kind`. Calling it twice without an add in between
    /// returns the same value.
    #[must_use]
    pub fn next_id(&self, kind: EntityKind) -> String {
        match kind {
            EntityKind::Project => self.projects.next_id(),
            EntityKind::Employee => self.employees.next_id(),
            EntityKind::Material => self.materials.next_id(),
            EntityKind::Transaction => self.transactions.next_id(),
            EntityKind::Estimate => self.estimates.next_id(),
        }
    }

    // --- reads ---

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        self.projects.as_slice()
    }

    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        self.employees.as_slice()
    }

    #[must_use]
    pub fn materials(&self) -> &[Material] {
        self.materials.as_slice()
    }

    #[must_use]
    pub fn transactions(&self) -> &[FinancialTransaction] {
        self.transactions.as_slice()
    }

    #[must_use]
    pub fn estimates(&self) -> &[Estimate] {
        self.estimates.as_slice()
    }

    #[must_use]
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    #[must_use]
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.get(id)
    }

    #[must_use]
    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    #[must_use]
    pub fn transaction(&self, id: &str) -> Option<&FinancialTransaction> {
        self.transactions.get(id)
    }

    #[must_use]
    pub fn estimate(&self, id: &str) -> Option<&Estimate> {
        self.estimates.get(id)
    }

    // --- projects ---

    /// Appends a project. Get its id from [`Self::next_id`] first.
    pub fn add_project(&mut self, project: Project) -> Result<()> {
        self.projects.push(project)
    }

    /// Replaces the project with the same id.
    pub fn update_project(&mut self, project: Project) -> Result<Outcome> {
        let id = project.id.clone();
        let outcome = self.projects.replace(project);
        self.check(EntityKind::Project, &id, outcome)
    }

    /// Removes the project and every allocation made to it. Transactions
    /// that point at it are kept.
    pub fn delete_project(&mut self, id: &str) -> Result<Outcome> {
        let outcome = self.projects.remove(id);
        if outcome == Outcome::Applied {
            self.staff_allocations.retain(|a| a.project_id != id);
            self.material_allocations.retain(|a| a.project_id != id);
        }
        self.check(EntityKind::Project, id, outcome)
    }

    // --- employees ---

    pub fn add_employee(&mut self, employee: Employee) -> Result<()> {
        self.employees.push(employee)
    }

    pub fn update_employee(&mut self, employee: Employee) -> Result<Outcome> {
        let id = employee.id.clone();
        let outcome = self.employees.replace(employee);
        self.check(EntityKind::Employee, &id, outcome)
    }

    pub fn delete_employee(&mut self, id: &str) -> Result<Outcome> {
        let outcome = self.employees.remove(id);
        self.check(EntityKind::Employee, id, outcome)
    }

    // --- materials ---

    pub fn add_material(&mut self, material: Material) -> Result<()> {
        self.materials.push(material)
    }

    /// Replaces the material with the same id. Its total value and stock
    /// status follow from the new record's inputs.
    pub fn update_material(&mut self, material: Material) -> Result<Outcome> {
        let id = material.id.clone();
        let outcome = self.materials.replace(material);
        self.check(EntityKind::Material, &id, outcome)
    }

    pub fn delete_material(&mut self, id: &str) -> Result<Outcome> {
        let outcome = self.materials.remove(id);
        self.check(EntityKind::Material, id, outcome)
    }

    // --- financial transactions ---

    pub fn add_transaction(&mut self, transaction: FinancialTransaction) -> Result<()> {
        self.transactions.push(transaction)
    }

    pub fn update_transaction(&mut self, transaction: FinancialTransaction) -> Result<Outcome> {
        let id = transaction.id.clone();
        let outcome = self.transactions.replace(transaction);
        self.check(EntityKind::Transaction, &id, outcome)
    }

    pub fn delete_transaction(&mut self, id: &str) -> Result<Outcome> {
        let outcome = self.transactions.remove(id);
        self.check(EntityKind::Transaction, id, outcome)
    }

    // --- estimates ---

    pub fn add_estimate(&mut self, estimate: Estimate) -> Result<()> {
        self.estimates.push(estimate)
    }

    pub fn update_estimate(&mut self, estimate: Estimate) -> Result<Outcome> {
        let id = estimate.id.clone();
        let outcome = self.estimates.replace(estimate);
        self.check(EntityKind::Estimate, &id, outcome)
    }

    pub fn delete_estimate(&mut self, id: &str) -> Result<Outcome> {
        let outcome = self.estimates.remove(id);
        self.check(EntityKind::Estimate, id, outcome)
    }

    // --- project allocations ---

    /// Staff allocated to `project_id`, in allocation order.
    #[must_use]
    pub fn staff_for(&self, project_id: &str) -> Vec<&StaffAllocation> {
        self.staff_allocations
            .iter()
            .filter(|a| a.project_id == project_id)
            .collect()
    }

    /// Materials allocated to `project_id`, in allocation order.
    #[must_use]
    pub fn materials_for(&self, project_id: &str) -> Vec<&MaterialAllocation> {
        self.material_allocations
            .iter()
            .filter(|a| a.project_id == project_id)
            .collect()
    }

    /// Puts an employee on a project.
    ///
    /// The project and the employee must exist, and an employee is allocated
    /// to a given project at most once.
    pub fn assign_employee(&mut self, allocation: StaffAllocation) -> Result<()> {
        self.require(EntityKind::Project, &allocation.project_id)?;
        self.require(EntityKind::Employee, &allocation.employee_id)?;
        let taken = self.staff_allocations.iter().any(|a| {
            a.project_id == allocation.project_id && a.employee_id == allocation.employee_id
        });
        if taken {
            return Err(Error::DuplicateId {
                kind: EntityKind::Employee,
                id: allocation.employee_id,
            });
        }
        debug!(
            project_id = %allocation.project_id,
            employee_id = %allocation.employee_id,
            hours = allocation.hours_allocated,
            "employee assigned"
        );
        self.staff_allocations.push(allocation);
        Ok(())
    }

    /// Takes an employee off a project.
    pub fn unassign_employee(&mut self, project_id: &str, employee_id: &str) -> Result<Outcome> {
        let before = self.staff_allocations.len();
        self.staff_allocations
            .retain(|a| !(a.project_id == project_id && a.employee_id == employee_id));
        let outcome = if self.staff_allocations.len() == before {
            Outcome::Unmatched
        } else {
            debug!(project_id, employee_id, "employee unassigned");
            Outcome::Applied
        };
        self.check(EntityKind::Employee, employee_id, outcome)
    }

    /// Allocates `quantity` of a material to a project at the material's
    /// current unit cost. The same material may be allocated more than once.
    pub fn allocate_material(
        &mut self,
        project_id: &str,
        material_id: &str,
        quantity: u32,
        date_added: NaiveDate,
    ) -> Result<MaterialAllocation> {
        let unit_cost = self
            .materials
            .get(material_id)
            .map(|m| m.unit_cost)
            .ok_or_else(|| Error::NotFound {
                kind: EntityKind::Material,
                id: material_id.to_string(),
            })?;
        let allocation = MaterialAllocation {
            project_id: project_id.to_string(),
            material_id: material_id.to_string(),
            quantity,
            unit_cost,
            date_added,
        };
        self.push_material_allocation(allocation.clone())?;
        Ok(allocation)
    }

    /// Removes every allocation of `material_id` from a project.
    pub fn release_material(&mut self, project_id: &str, material_id: &str) -> Result<Outcome> {
        let before = self.material_allocations.len();
        self.material_allocations
            .retain(|a| !(a.project_id == project_id && a.material_id == material_id));
        let outcome = if self.material_allocations.len() == before {
            Outcome::Unmatched
        } else {
            debug!(project_id, material_id, "material released");
            Outcome::Applied
        };
        self.check(EntityKind::Material, material_id, outcome)
    }

    fn push_material_allocation(&mut self, allocation: MaterialAllocation) -> Result<()> {
        self.require(EntityKind::Project, &allocation.project_id)?;
        self.require(EntityKind::Material, &allocation.material_id)?;
        debug!(
            project_id = %allocation.project_id,
            material_id = %allocation.material_id,
            quantity = allocation.quantity,
            "material allocated"
        );
        self.material_allocations.push(allocation);
        Ok(())
    }

    fn require(&self, kind: EntityKind, id: &str) -> Result<()> {
        let exists = match kind {
            EntityKind::Project => self.projects.contains(id),
            EntityKind::Employee => self.employees.contains(id),
            EntityKind::Material => self.materials.contains(id),
            EntityKind::Transaction => self.transactions.contains(id),
            EntityKind::Estimate => self.estimates.contains(id),
        };
        if exists {
            Ok(())
        } else {
            Err(Error::NotFound {
                kind,
                id: id.to_string(),
            })
        }
    }

    fn check(&self, kind: EntityKind, id: &str, outcome: Outcome) -> Result<Outcome> {
        match (outcome, self.mode) {
            (Outcome::Unmatched, StoreMode::Strict) => {
                warn!(%kind, id, "no record with this id");
                Err(Error::NotFound {
                    kind,
                    id: id.to_string(),
                })
            }
            (Outcome::Unmatched, StoreMode::Lenient) => {
                debug!(%kind, id, "no record with this id; nothing changed");
                Ok(outcome)
            }
            (Outcome::Applied, _) => Ok(outcome),
        }
    }
}
