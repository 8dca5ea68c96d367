//! Dashboard report generation.
//!
//! Every figure here is computed from the store's current collections each
//! time it is asked for; nothing is cached or written back. Functions are
//! framework-agnostic and return structured data for the presentation layer
//! to format.

use chrono::NaiveDate;

use crate::{
    core::{query, store::DashboardStore},
    entities::{
        EmployeeStatus, FinancialTransaction, Material, PaymentStatus, Project, ProjectStatus,
        MaterialAllocation, StaffAllocation, StockStatus, TransactionType,
    },
};

/// Expense category counted as material spending on the overview.
pub const MATERIALS_CATEGORY: &str = "Materials";

/// Expense category for payroll.
pub const LABOR_CATEGORY: &str = "Labor";

/// Expense categories listed on their own in a project's cost breakdown.
/// Anything else outside labor and materials is grouped as "Other".
pub const BREAKDOWN_CATEGORIES: [&str; 3] = ["Transportation", "Equipment", "Overhead"];

/// Headline numbers for the dashboard overview.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Sum of all income
    pub total_revenue: f64,
    /// Projects pending or in progress
    pub active_projects: usize,
    /// Employees with active status
    pub team_members: usize,
    /// Expenses in the materials category
    pub material_expenses: f64,
}

/// Income and expenses booked against one project.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectFinances {
    /// Income linked to the project
    pub income: f64,
    /// Expenses linked to the project
    pub expenses: f64,
    /// `income - expenses`
    pub balance: f64,
    /// `balance / income` as a percentage, 0 when there is no income
    pub profit_margin: f64,
}

/// One row of the active projects list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectOverview {
    /// The project itself
    pub project: Project,
    /// Its linked income and expenses
    pub finances: ProjectFinances,
    /// Days until the end date, negative when overdue
    pub days_remaining: i64,
    /// Elapsed share of the schedule, 0-100
    pub progress: u8,
}

/// Active projects with their portfolio totals.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveOverview {
    /// Rows ordered by end date, soonest first
    pub rows: Vec<ProjectOverview>,
    pub totals: PortfolioTotals,
}

/// Sums over the active projects.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PortfolioTotals {
    /// Contract value
    pub value: f64,
    pub income: f64,
    pub expenses: f64,
    /// `income - expenses`
    pub balance: f64,
}

/// Operating costs and profit of one project.
///
/// Labor comes from staff allocations at each employee's current hourly
/// rate and materials from material allocations. Linked expense
/// transactions count only outside the labor and materials categories, so
/// the same cost is not booked twice.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCostReport {
    /// Income linked to the project
    pub income: f64,
    pub labor_costs: f64,
    pub material_costs: f64,
    /// Linked expenses outside labor and materials
    pub other_expenses: f64,
    /// `labor + materials + other`
    pub operating_costs: f64,
    /// `income - operating_costs`
    pub net_profit: f64,
    /// Net profit as a percentage of income, 0 without income
    pub profit_margin: f64,
    /// Operating costs as a percentage of the contract value
    pub budget_used: f64,
    /// Income as a percentage of the contract value
    pub income_share: f64,
    /// Labor, Materials, each of [`BREAKDOWN_CATEGORIES`], then Other
    pub expense_breakdown: Vec<(&'static str, f64)>,
}

/// Computes the overview headline numbers.
#[must_use]
pub fn dashboard_stats(store: &DashboardStore) -> DashboardStats {
    let transactions = store.transactions();
    DashboardStats {
        total_revenue: total_income(transactions),
        active_projects: store
            .projects()
            .iter()
            .filter(|p| p.status.is_active())
            .count(),
        team_members: store
            .employees()
            .iter()
            .filter(|e| e.status == EmployeeStatus::Active)
            .count(),
        material_expenses: expenses_in_category(transactions, MATERIALS_CATEGORY),
    }
}

fn sum_where<F>(transactions: &[FinancialTransaction], predicate: F) -> f64
where
    F: Fn(&FinancialTransaction) -> bool,
{
    transactions
        .iter()
        .filter(|t| predicate(t))
        .map(|t| t.amount)
        .sum()
}

/// Sum of every income transaction.
#[must_use]
pub fn total_income(transactions: &[FinancialTransaction]) -> f64 {
    sum_where(transactions, FinancialTransaction::is_income)
}

/// Sum of every expense transaction.
#[must_use]
pub fn total_expenses(transactions: &[FinancialTransaction]) -> f64 {
    sum_where(transactions, FinancialTransaction::is_expense)
}

/// Income still waiting to be collected (status pending).
#[must_use]
pub fn pending_receivables(transactions: &[FinancialTransaction]) -> f64 {
    sum_where(transactions, |t| {
        t.is_income() && t.status == Some(PaymentStatus::Pending)
    })
}

/// Expenses whose category matches exactly.
#[must_use]
pub fn expenses_in_category(transactions: &[FinancialTransaction], category: &str) -> f64 {
    sum_where(transactions, |t| t.is_expense() && t.category == category)
}

/// Mean contract value across all projects, 0 for none.
#[must_use]
pub fn average_project_value(projects: &[Project]) -> f64 {
    if projects.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = projects.len() as f64;
    projects.iter().map(|p| p.value).sum::<f64>() / count
}

/// Value of everything on the shelves.
#[must_use]
pub fn inventory_value(materials: &[Material]) -> f64 {
    materials.iter().map(Material::total_value).sum()
}

/// Materials that are low or out of stock, in collection order.
#[must_use]
pub fn materials_needing_reorder(materials: &[Material]) -> Vec<&Material> {
    materials
        .iter()
        .filter(|m| m.status() != StockStatus::InStock)
        .collect()
}

/// Income and expenses linked to `project_id`.
#[must_use]
pub fn project_finances(transactions: &[FinancialTransaction], project_id: &str) -> ProjectFinances {
    let linked = |t: &FinancialTransaction| t.project.as_deref() == Some(project_id);
    let income = sum_where(transactions, |t| linked(t) && t.is_income());
    let expenses = sum_where(transactions, |t| linked(t) && t.is_expense());
    let balance = income - expenses;
    ProjectFinances {
        income,
        expenses,
        balance,
        profit_margin: calculate_margin(balance, income),
    }
}

/// Profit as a percentage of income, 0 when there is no income.
#[must_use]
pub fn calculate_margin(profit: f64, income: f64) -> f64 {
    if income > 0.0 {
        (profit / income) * 100.0
    } else {
        0.0
    }
}

/// Whole days from `today` until the project's end date; negative once the
/// end date has passed.
#[must_use]
pub fn days_remaining(project: &Project, today: NaiveDate) -> i64 {
    (project.end_date - today).num_days()
}

/// Share of the scheduled time already elapsed, as shown on the overview.
///
/// Completed projects are at 100 and cancelled ones at 0. Otherwise it is
/// `(total - remaining) / total` rounded and clamped to 0-100. A schedule
/// with no length counts as done once its end date is reached.
#[must_use]
pub fn schedule_progress(project: &Project, today: NaiveDate) -> u8 {
    match project.status {
        ProjectStatus::Completed => 100,
        ProjectStatus::Cancelled => 0,
        ProjectStatus::Pending | ProjectStatus::InProgress => {
            let total = (project.end_date - project.start_date).num_days();
            let remaining = days_remaining(project, today);
            if total <= 0 {
                return if remaining <= 0 { 100 } else { 0 };
            }
            #[allow(clippy::cast_precision_loss)]
            let percent = ((total - remaining) as f64 / total as f64 * 100.0).round();
            // Clamped to 0-100 first, so the cast cannot truncate.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let progress = percent.clamp(0.0, 100.0) as u8;
            progress
        }
    }
}

/// Rough progress shown on a project's detail page.
///
/// Pending projects sit at 10. In-progress projects move from 25 towards 75
/// over the last 30 days before the end date and stay inside that band.
#[must_use]
pub fn estimated_progress(project: &Project, today: NaiveDate) -> f64 {
    match project.status {
        ProjectStatus::Completed => 100.0,
        ProjectStatus::Cancelled => 0.0,
        ProjectStatus::Pending => 10.0,
        ProjectStatus::InProgress => {
            #[allow(clippy::cast_precision_loss)]
            let remaining = days_remaining(project, today) as f64;
            (100.0 - (remaining / 30.0) * 100.0).clamp(25.0, 75.0)
        }
    }
}

/// Active projects ordered by end date (soonest first), each with its
/// finances, days remaining and schedule progress, plus their totals.
#[must_use]
pub fn active_project_overview(store: &DashboardStore, today: NaiveDate) -> ActiveOverview {
    let mut active: Vec<&Project> = store
        .projects()
        .iter()
        .filter(|p| p.status.is_active())
        .collect();
    active.sort_by_key(|p| p.end_date);

    let rows: Vec<ProjectOverview> = active
        .into_iter()
        .map(|project| ProjectOverview {
            finances: project_finances(store.transactions(), &project.id),
            days_remaining: days_remaining(project, today),
            progress: schedule_progress(project, today),
            project: project.clone(),
        })
        .collect();

    let mut totals = rows
        .iter()
        .fold(PortfolioTotals::default(), |mut acc, row| {
            acc.value += row.project.value;
            acc.income += row.finances.income;
            acc.expenses += row.finances.expenses;
            acc
        });
    totals.balance = totals.income - totals.expenses;

    ActiveOverview { rows, totals }
}

/// Cost of one staff allocation: hours times the employee's hourly rate.
/// An employee no longer in the store costs nothing.
#[must_use]
pub fn labor_cost(store: &DashboardStore, allocation: &StaffAllocation) -> f64 {
    store
        .employee(&allocation.employee_id)
        .map_or(0.0, |e| e.hourly_rate * f64::from(allocation.hours_allocated))
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Builds the cost report for `project`.
#[must_use]
pub fn project_cost_report(store: &DashboardStore, project: &Project) -> ProjectCostReport {
    let linked_expense = |t: &FinancialTransaction| {
        t.is_expense() && t.project.as_deref() == Some(project.id.as_str())
    };

    let income = project_finances(store.transactions(), &project.id).income;
    let labor_costs: f64 = store
        .staff_for(&project.id)
        .into_iter()
        .map(|a| labor_cost(store, a))
        .sum();
    let material_costs: f64 = store
        .materials_for(&project.id)
        .into_iter()
        .map(MaterialAllocation::total_cost)
        .sum();
    let other_expenses = sum_where(store.transactions(), |t| {
        linked_expense(t) && t.category != MATERIALS_CATEGORY && t.category != LABOR_CATEGORY
    });

    let mut expense_breakdown = vec![("Labor", labor_costs), ("Materials", material_costs)];
    let mut named = 0.0;
    for category in BREAKDOWN_CATEGORIES {
        let amount = sum_where(store.transactions(), |t| {
            linked_expense(t) && t.category == category
        });
        named += amount;
        expense_breakdown.push((category, amount));
    }
    expense_breakdown.push(("Other", other_expenses - named));

    let operating_costs = labor_costs + material_costs + other_expenses;
    let net_profit = income - operating_costs;
    ProjectCostReport {
        income,
        labor_costs,
        material_costs,
        other_expenses,
        operating_costs,
        net_profit,
        profit_margin: calculate_margin(net_profit, income),
        budget_used: percent_of(operating_costs, project.value),
        income_share: percent_of(income, project.value),
        expense_breakdown,
    }
}

/// The `limit` most recent transactions, newest first. Transactions on the
/// same date keep their collection order.
#[must_use]
pub fn recent_transactions(
    transactions: &[FinancialTransaction],
    limit: usize,
) -> Vec<&FinancialTransaction> {
    let mut sorted: Vec<&FinancialTransaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80%`
///
/// # Arguments
/// * `progress_percent` - Progress percentage (0-100)
/// * `bar_length` - Length of the progress bar in characters (default 10)
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_progress = progress_percent.clamp(0.0, 100.0);

    // Cast safety: clamped_progress ∈ [0, 100], length is small (10-20).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_progress / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {progress_percent:.0}%")
}

/// Formats a transaction amount with the sign of its direction.
///
/// # Returns
/// Formatted string like "+$50.00" or "-$25.50"
#[must_use]
pub fn format_transaction_amount(transaction: &FinancialTransaction) -> String {
    match transaction.transaction_type {
        TransactionType::Income => format!("+${:.2}", transaction.amount),
        TransactionType::Expense => format!("-${:.2}", transaction.amount),
    }
}

/// Generates a summary line for a transaction.
#[must_use]
pub fn format_transaction_summary(transaction: &FinancialTransaction) -> String {
    let amount_str = format_transaction_amount(transaction);
    let date = transaction.date.format("%Y-%m-%d");
    let category = &transaction.category;
    let desc = &transaction.description;

    format!("{date} | {amount_str} | {category} | {desc}")
}

/// Text lines of the dashboard summary: headline stats, the active projects
/// with their totals, the first page of the projects table and the most
/// recent transactions.
#[must_use]
pub fn summary_lines(
    store: &DashboardStore,
    today: NaiveDate,
    recent: usize,
    page_size: usize,
) -> Vec<String> {
    let stats = dashboard_stats(store);
    let mut lines = vec![format!(
        "Revenue ${:.2} | {} active projects | {} team members | materials ${:.2}",
        stats.total_revenue, stats.active_projects, stats.team_members, stats.material_expenses
    )];

    let overview = active_project_overview(store, today);
    for row in &overview.rows {
        let costs = project_cost_report(store, &row.project);
        lines.push(format!(
            "{} ({}) {} | {} days remaining | budget used {:.1}%",
            row.project.name,
            row.project.client,
            format_progress_bar(f64::from(row.progress), None),
            row.days_remaining,
            costs.budget_used
        ));
    }
    let totals = overview.totals;
    lines.push(format!(
        "Active total ${:.2} | income ${:.2} | expenses ${:.2} | balance ${:.2}",
        totals.value, totals.income, totals.expenses, totals.balance
    ));

    let page = query::paginate(store.projects(), 0, page_size);
    lines.push(format!(
        "Projects page {} of {} ({} total)",
        page.index + 1,
        page.page_count,
        page.total
    ));
    for project in page.items {
        lines.push(format!("{} | {} | {}", project.id, project.status, project.name));
    }

    for transaction in recent_transactions(store.transactions(), recent) {
        lines.push(format_transaction_summary(transaction));
    }
    lines
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::Result;
    use crate::test_utils::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dashboard_stats_for_seed() {
        let store = seeded_store();
        let stats = dashboard_stats(&store);

        // 2250 + 6400 + 4100 + 3400 + 7800
        assert_eq!(stats.total_revenue, 23950.0);
        // PROJ-1234, 1235, 1236, 1237
        assert_eq!(stats.active_projects, 4);
        // all but EMP-005 (on leave) and EMP-009 (terminated)
        assert_eq!(stats.team_members, 8);
        assert_eq!(stats.material_expenses, 1245.0);
    }

    #[test]
    fn test_totals_for_seed() {
        let store = seeded_store();
        let transactions = store.transactions();

        assert_eq!(total_expenses(transactions), 12685.0);
        // No seeded income is pending; TRX-010 is overdue.
        assert_eq!(pending_receivables(transactions), 0.0);
        assert_eq!(expenses_in_category(transactions, "Labor"), 8540.0);
        assert_eq!(expenses_in_category(transactions, "labor"), 0.0);
    }

    #[test]
    fn test_pending_receivables_counts_only_pending_income() {
        let mut pending = sample_transaction("TRX-001", TransactionType::Income, "Project Payment", 500.0);
        pending.status = Some(PaymentStatus::Pending);
        let mut paid = sample_transaction("TRX-002", TransactionType::Income, "Project Payment", 300.0);
        paid.status = Some(PaymentStatus::Paid);

        assert_eq!(pending_receivables(&[pending, paid]), 500.0);
    }

    #[test]
    fn test_average_project_value() {
        assert_eq!(average_project_value(&[]), 0.0);

        let mut a = sample_project("PROJ-001", ProjectStatus::Pending);
        a.value = 1000.0;
        let mut b = sample_project("PROJ-002", ProjectStatus::Pending);
        b.value = 3000.0;
        assert_eq!(average_project_value(&[a, b]), 2000.0);
    }

    #[test]
    fn test_inventory_reorder_list_for_seed() {
        let store = seeded_store();
        let ids: Vec<&str> = materials_needing_reorder(store.materials())
            .into_iter()
            .map(|m| m.id.as_str())
            .collect();

        assert_eq!(ids, vec!["MAT-003", "MAT-008", "MAT-009"]);
    }

    #[test]
    fn test_inventory_value_sums_derived_totals() {
        let materials = vec![
            sample_material("MAT-001", 8, 12.99, 10),
            sample_material("MAT-002", 0, 5.49, 25),
            sample_material("MAT-003", 4, 2.5, 1),
        ];
        assert_eq!(inventory_value(&materials), 103.92 + 10.0);
    }

    #[test]
    fn test_project_finances_for_seeded_project() {
        let store = seeded_store();
        let finances = project_finances(store.transactions(), "PROJ-1234");

        assert_eq!(finances.income, 2250.0);
        assert_eq!(finances.expenses, 1245.0);
        assert_eq!(finances.balance, 1005.0);
        assert!((finances.profit_margin - 44.666_666).abs() < 1e-3);
    }

    #[test]
    fn test_project_finances_without_income_has_zero_margin() {
        let store = seeded_store();
        let finances = project_finances(store.transactions(), "PROJ-1240");

        assert_eq!(finances.income, 0.0);
        assert_eq!(finances.balance, 0.0);
        assert_eq!(finances.profit_margin, 0.0);
    }

    #[test]
    fn test_days_remaining_is_negative_when_late() {
        let project = sample_project("PROJ-001", ProjectStatus::InProgress);
        // sample project runs 2023-07-01 .. 2023-07-31
        assert_eq!(days_remaining(&project, day(2023, 7, 21)), 10);
        assert_eq!(days_remaining(&project, day(2023, 7, 31)), 0);
        assert_eq!(days_remaining(&project, day(2023, 8, 5)), -5);
    }

    #[test]
    fn test_schedule_progress() {
        let project = sample_project("PROJ-001", ProjectStatus::InProgress);
        // 30-day schedule
        assert_eq!(schedule_progress(&project, day(2023, 6, 1)), 0);
        assert_eq!(schedule_progress(&project, day(2023, 7, 16)), 50);
        assert_eq!(schedule_progress(&project, day(2023, 9, 1)), 100);

        let mut done = project.clone();
        done.status = ProjectStatus::Completed;
        assert_eq!(schedule_progress(&done, day(2023, 6, 1)), 100);

        let mut cancelled = project;
        cancelled.status = ProjectStatus::Cancelled;
        assert_eq!(schedule_progress(&cancelled, day(2023, 9, 1)), 0);
    }

    #[test]
    fn test_schedule_progress_zero_length_schedule() {
        let mut project = sample_project("PROJ-001", ProjectStatus::Pending);
        project.end_date = project.start_date;

        assert_eq!(schedule_progress(&project, day(2023, 6, 30)), 0);
        assert_eq!(schedule_progress(&project, day(2023, 7, 1)), 100);
    }

    #[test]
    fn test_estimated_progress_bands() {
        let project = sample_project("PROJ-001", ProjectStatus::InProgress);
        assert_eq!(estimated_progress(&project, day(2023, 5, 1)), 25.0);
        assert_eq!(estimated_progress(&project, day(2023, 7, 16)), 50.0);
        assert_eq!(estimated_progress(&project, day(2023, 7, 31)), 75.0);

        let pending = sample_project("PROJ-002", ProjectStatus::Pending);
        assert_eq!(estimated_progress(&pending, day(2023, 7, 16)), 10.0);
    }

    #[test]
    fn test_active_overview_sorted_by_end_date() {
        let store = seeded_store();
        let overview = active_project_overview(&store, day(2023, 8, 1));
        let ids: Vec<&str> = overview.rows.iter().map(|o| o.project.id.as_str()).collect();

        assert_eq!(ids, vec!["PROJ-1234", "PROJ-1236", "PROJ-1235", "PROJ-1237"]);
        assert_eq!(overview.rows[0].days_remaining, 19);
        assert_eq!(overview.rows[0].finances.balance, 1005.0);
    }

    #[test]
    fn test_active_overview_totals_for_seed() {
        let store = seeded_store();
        let totals = active_project_overview(&store, day(2023, 8, 1)).totals;

        // 4500 + 8200 + 12800 + 15600
        assert_eq!(totals.value, 41100.0);
        // 2250 + 4100 + 6400 + 7800
        assert_eq!(totals.income, 20550.0);
        assert_eq!(totals.expenses, 1245.0);
        assert_eq!(totals.balance, 19305.0);
    }

    #[test]
    fn test_active_overview_totals_skip_closed_projects() -> Result<()> {
        let mut store = seeded_store();
        let mut project = store.project("PROJ-1237").unwrap().clone();
        project.status = ProjectStatus::Completed;
        let _ = store.update_project(project)?;

        let overview = active_project_overview(&store, day(2023, 8, 1));
        assert_eq!(overview.rows.len(), 3);
        assert_eq!(overview.totals.value, 25500.0);
        assert_eq!(overview.totals.income, 12750.0);
        Ok(())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_cost_report_for_seeded_project() {
        let store = seeded_store();
        let project = store.project("PROJ-1234").unwrap();

        let report = project_cost_report(&store, project);

        // 28.5 * 160 + 24.0 * 120 + 23.75 * 120
        assert!(close(report.labor_costs, 10290.0));
        // 695.76 + 395.88 + 99.80 + 104.85
        assert!(close(report.material_costs, 1296.29));
        // the linked Materials expense is covered by the allocations
        assert!(close(report.other_expenses, 0.0));
        assert!(close(report.operating_costs, 11586.29));
        assert!(close(report.income, 2250.0));
        assert!(close(report.net_profit, -9336.29));
        assert!(close(report.profit_margin, -9336.29 / 2250.0 * 100.0));
        assert!(close(report.budget_used, 11586.29 / 4500.0 * 100.0));
        assert!(close(report.income_share, 50.0));
    }

    #[test]
    fn test_cost_report_breakdown_groups_other_expenses() -> Result<()> {
        let mut store = seeded_store();
        for (id, category, amount) in [
            ("TRX-011", "Equipment", 350.0),
            ("TRX-012", "Permits", 120.0),
            ("TRX-013", "Labor", 900.0),
            ("TRX-014", "Transportation", 80.0),
        ] {
            let mut expense = sample_transaction(id, TransactionType::Expense, category, amount);
            expense.project = Some("PROJ-1236".to_string());
            store.add_transaction(expense)?;
        }
        let project = store.project("PROJ-1236").unwrap();

        let report = project_cost_report(&store, project);

        assert!(close(report.labor_costs, 0.0));
        assert!(close(report.material_costs, 0.0));
        assert!(close(report.other_expenses, 550.0));
        assert_eq!(
            report.expense_breakdown,
            vec![
                ("Labor", 0.0),
                ("Materials", 0.0),
                ("Transportation", 80.0),
                ("Equipment", 350.0),
                ("Overhead", 0.0),
                ("Other", 120.0),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_labor_cost_of_removed_employee_is_zero() -> Result<()> {
        let mut store = seeded_store();
        let _ = store.delete_employee("EMP-006")?;
        let project = store.project("PROJ-1234").unwrap();

        let report = project_cost_report(&store, project);

        // 28.5 * 160 + 24.0 * 120
        assert!(close(report.labor_costs, 7440.0));
        Ok(())
    }

    #[test]
    fn test_recent_transactions_newest_first() {
        let store = seeded_store();
        let recent = recent_transactions(store.transactions(), 3);
        let ids: Vec<&str> = recent.iter().map(|t| t.id.as_str()).collect();

        assert_eq!(ids, vec!["TRX-001", "TRX-002", "TRX-003"]);
        assert_eq!(recent_transactions(store.transactions(), 50).len(), 10);
    }

    #[test]
    fn test_format_progress_bar() {
        assert_eq!(format_progress_bar(100.0, Some(10)), "[██████████] 100%");
        assert_eq!(format_progress_bar(50.0, Some(10)), "[█████░░░░░] 50%");
        assert_eq!(format_progress_bar(0.0, None), "[░░░░░░░░░░] 0%");
    }

    #[test]
    fn test_format_transaction_amount_by_type() {
        let income = sample_transaction("TRX-001", TransactionType::Income, "Project Payment", 50.0);
        let expense = sample_transaction("TRX-002", TransactionType::Expense, "Labor", 25.5);

        assert_eq!(format_transaction_amount(&income), "+$50.00");
        assert_eq!(format_transaction_amount(&expense), "-$25.50");
    }

    #[test]
    fn test_format_transaction_summary() {
        let store = seeded_store();
        let trx = store.transaction("TRX-005").unwrap();
        assert_eq!(
            format_transaction_summary(trx),
            "2023-08-01 | -$350.00 | Equipment | Vehicle Maintenance"
        );
    }

    #[test]
    fn test_summary_lines_page_projects_and_limit_transactions() {
        let store = seeded_store();

        let lines = summary_lines(&store, day(2023, 8, 1), 2, 3);

        assert_eq!(
            lines[0],
            "Revenue $23950.00 | 4 active projects | 8 team members | materials $1245.00"
        );
        assert!(lines.contains(&"Projects page 1 of 3 (7 total)".to_string()));
        assert!(lines.contains(&"PROJ-1236 | in-progress | Rivera Kitchen Remodel".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("PROJ-1237 |")));
        assert!(lines.contains(
            &"Active total $41100.00 | income $20550.00 | expenses $1245.00 | balance $19305.00"
                .to_string()
        ));
        // 1 stats + 4 active + 1 total + 1 page header + 3 rows + 2 transactions
        assert_eq!(lines.len(), 12);
        assert!(lines[11].starts_with("2023-08-10 |"));
    }
}
