//! Read-side helpers for tables and boards.
//!
//! Filtering, searching, sorting and pagination all work on borrowed
//! snapshots and never touch the store.

use std::cmp::Ordering;

use crate::entities::{
    Employee, EmployeeStatus, Estimate, EstimateSource, EstimateStatus, FinancialTransaction,
    Project, ProjectStatus, TransactionType,
};

/// Sort order for a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Sorts `items` in place by `key`. Equal keys keep their relative order.
pub fn sort_by_key<T, K, F>(items: &mut [T], direction: SortDirection, key: F)
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    items.sort_by(|a, b| {
        let ordering = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// One page of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Rows on this page
    pub items: &'a [T],
    /// Zero-based page index, clamped to the last page
    pub index: usize,
    /// Number of pages; at least 1 even for an empty table
    pub page_count: usize,
    /// Rows across all pages
    pub total: usize,
}

/// Slices `items` into the page at `index` (zero-based).
///
/// An index past the end yields the last page. `page_size` of 0 is treated
/// as 1.
#[must_use]
pub fn paginate<T>(items: &[T], index: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let page_count = items.len().div_ceil(page_size).max(1);
    let index = index.min(page_count - 1);
    let start = (index * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    Page {
        items: &items[start..end],
        index,
        page_count,
        total: items.len(),
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Employee directory filter. Empty search matches everyone.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    /// Case-insensitive text matched against name, email and role
    pub search: String,
    pub status: Option<EmployeeStatus>,
    /// Exact department match
    pub department: Option<String>,
}

impl EmployeeFilter {
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = contains_ignore_case(&employee.name, &needle)
            || contains_ignore_case(&employee.email, &needle)
            || contains_ignore_case(&employee.role, &needle);
        let matches_status = self.status.is_none_or(|s| employee.status == s);
        let matches_department = self
            .department
            .as_deref()
            .is_none_or(|d| employee.department == d);

        matches_search && matches_status && matches_department
    }

    #[must_use]
    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Distinct departments in the order they first appear.
#[must_use]
pub fn departments(employees: &[Employee]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for employee in employees {
        if !seen.contains(&employee.department.as_str()) {
            seen.push(&employee.department);
        }
    }
    seen
}

/// Preset views of the projects table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    /// In progress only
    Active,
    Completed,
    Pending,
}

impl ProjectFilter {
    #[must_use]
    pub fn apply(self, projects: &[Project]) -> Vec<&Project> {
        let wanted = match self {
            Self::All => None,
            Self::Active => Some(ProjectStatus::InProgress),
            Self::Completed => Some(ProjectStatus::Completed),
            Self::Pending => Some(ProjectStatus::Pending),
        };
        projects
            .iter()
            .filter(|p| wanted.is_none_or(|s| p.status == s))
            .collect()
    }
}

/// Projects split into board columns by status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectBoard<'a> {
    pub pending: Vec<&'a Project>,
    pub in_progress: Vec<&'a Project>,
    pub completed: Vec<&'a Project>,
    pub cancelled: Vec<&'a Project>,
}

impl<'a> ProjectBoard<'a> {
    #[must_use]
    pub fn build(projects: &'a [Project]) -> Self {
        let mut board = Self::default();
        for project in projects {
            let column = match project.status {
                ProjectStatus::Pending => &mut board.pending,
                ProjectStatus::InProgress => &mut board.in_progress,
                ProjectStatus::Completed => &mut board.completed,
                ProjectStatus::Cancelled => &mut board.cancelled,
            };
            column.push(project);
        }
        board
    }
}

/// Estimate list filter. `None` means "all".
#[derive(Debug, Clone, Default)]
pub struct EstimateFilter {
    pub status: Option<EstimateStatus>,
    pub source: Option<EstimateSource>,
    /// Case-insensitive client name search
    pub client: String,
}

impl EstimateFilter {
    #[must_use]
    pub fn matches(&self, estimate: &Estimate) -> bool {
        self.status.is_none_or(|s| estimate.status == s)
            && self.source.is_none_or(|s| estimate.source == s)
            && contains_ignore_case(&estimate.client, &self.client.to_lowercase())
    }

    #[must_use]
    pub fn apply<'a>(&self, estimates: &'a [Estimate]) -> Vec<&'a Estimate> {
        estimates.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Estimates whose visit falls on `date`.
#[must_use]
pub fn estimates_on(estimates: &[Estimate], date: chrono::NaiveDate) -> Vec<&Estimate> {
    estimates.iter().filter(|e| e.date == date).collect()
}

/// Transactions of one direction.
#[must_use]
pub fn transactions_of_type(
    transactions: &[FinancialTransaction],
    transaction_type: TransactionType,
) -> Vec<&FinancialTransaction> {
    transactions
        .iter()
        .filter(|t| t.transaction_type == transaction_type)
        .collect()
}

/// Transactions linked to a project, newest first.
#[must_use]
pub fn transactions_for_project<'a>(
    transactions: &'a [FinancialTransaction],
    project_id: &str,
) -> Vec<&'a FinancialTransaction> {
    let mut linked: Vec<&FinancialTransaction> = transactions
        .iter()
        .filter(|t| t.project.as_deref() == Some(project_id))
        .collect();
    linked.sort_by(|a, b| b.date.cmp(&a.date));
    linked
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use chrono::NaiveDate;

    fn ids<T: crate::entities::Record>(records: &[&T]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_employee_search_is_case_insensitive_across_fields() {
        let store = seeded_store();

        let by_name = EmployeeFilter {
            search: "MARIA".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_name.apply(store.employees())), vec!["EMP-002"]);

        let by_role = EmployeeFilter {
            search: "carpenter".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_role.apply(store.employees())), vec!["EMP-007"]);

        let everyone = EmployeeFilter::default();
        assert_eq!(everyone.apply(store.employees()).len(), 10);
    }

    #[test]
    fn test_employee_status_and_department_filters_combine() {
        let store = seeded_store();
        let filter = EmployeeFilter {
            search: "painter".to_string(),
            status: Some(EmployeeStatus::Active),
            department: Some("Residential".to_string()),
        };

        assert_eq!(
            ids(&filter.apply(store.employees())),
            vec!["EMP-001", "EMP-003", "EMP-006"]
        );
    }

    #[test]
    fn test_departments_in_first_seen_order() {
        let store = seeded_store();
        assert_eq!(
            departments(store.employees()),
            vec!["Residential", "Commercial", "Remodeling", "Administration", "Sales"]
        );
    }

    #[test]
    fn test_project_filter_presets() {
        let store = seeded_store();
        assert_eq!(ProjectFilter::All.apply(store.projects()).len(), 7);
        assert_eq!(
            ids(&ProjectFilter::Active.apply(store.projects())),
            vec!["PROJ-1234", "PROJ-1236"]
        );
        assert_eq!(
            ids(&ProjectFilter::Pending.apply(store.projects())),
            vec!["PROJ-1235", "PROJ-1237"]
        );
    }

    #[test]
    fn test_project_board_columns() {
        let store = seeded_store();
        let board = ProjectBoard::build(store.projects());

        assert_eq!(board.pending.len(), 2);
        assert_eq!(board.in_progress.len(), 2);
        assert_eq!(ids(&board.completed), vec!["PROJ-1238", "PROJ-1239"]);
        assert_eq!(ids(&board.cancelled), vec!["PROJ-1240"]);
    }

    #[test]
    fn test_estimate_filter() {
        let store = seeded_store();
        let pending_web = EstimateFilter {
            status: Some(EstimateStatus::Pending),
            source: Some(EstimateSource::Website),
            ..Default::default()
        };
        assert_eq!(
            ids(&pending_web.apply(store.estimates())),
            vec!["EST-001", "EST-006", "EST-008"]
        );

        let by_client = EstimateFilter {
            client: "silva".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_client.apply(store.estimates())), vec!["EST-001"]);
    }

    #[test]
    fn test_estimates_on_date() {
        let store = seeded_store();
        let date = NaiveDate::from_ymd_opt(2023, 8, 22).unwrap();
        assert_eq!(ids(&estimates_on(store.estimates(), date)), vec!["EST-004"]);
    }

    #[test]
    fn test_transactions_for_project_newest_first() {
        let store = seeded_store();
        assert_eq!(
            ids(&transactions_for_project(store.transactions(), "PROJ-1234")),
            vec!["TRX-001", "TRX-002"]
        );
        assert!(transactions_for_project(store.transactions(), "PROJ-9999").is_empty());
    }

    #[test]
    fn test_transactions_of_type() {
        let store = seeded_store();
        assert_eq!(
            transactions_of_type(store.transactions(), TransactionType::Income).len(),
            5
        );
    }

    #[test]
    fn test_sort_by_key_descending_value() {
        let store = seeded_store();
        let mut projects = store.projects().to_vec();
        sort_by_key(&mut projects, SortDirection::Descending, |p| p.value);

        assert_eq!(projects[0].id, "PROJ-1240");
        assert_eq!(projects.last().unwrap().id, "PROJ-1234");
    }

    #[test]
    fn test_sort_by_key_is_stable() {
        let store = seeded_store();
        let mut materials = store.materials().to_vec();
        sort_by_key(&mut materials, SortDirection::Ascending, |m| m.category.clone());

        let paint: Vec<&str> = materials
            .iter()
            .filter(|m| m.category == "Paint")
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(paint, vec!["MAT-001", "MAT-002", "MAT-003", "MAT-004", "MAT-005"]);
        assert_eq!(materials[0].category, "Materials");
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=23).collect();

        let first = paginate(&items, 0, 10);
        assert_eq!(first.items, &items[0..10]);
        assert_eq!(first.page_count, 3);
        assert_eq!(first.total, 23);

        let last = paginate(&items, 2, 10);
        assert_eq!(last.items, &[21, 22, 23]);

        let past_end = paginate(&items, 9, 10);
        assert_eq!(past_end.index, 2);
        assert_eq!(past_end.items, last.items);
    }

    #[test]
    fn test_paginate_empty_table_has_one_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 0, 10);

        assert!(page.items.is_empty());
        assert_eq!(page.page_count, 1);
        assert_eq!(page.index, 0);
    }
}
