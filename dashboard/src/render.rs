//! Plain-text rendering of table pages, analytics and employee details

use shared::Employee;
use std::fmt::Write;

use crate::config::DisplayPreferences;
use crate::core::format::{PerformanceTier, format_currency, format_date, status_label};
use crate::types::{AnalyticsReport, GroupAverage, GroupCount, TablePage, ViewState};

const HIDDEN: &str = "••••••";

fn salary_cell(salary: f64, prefs: &DisplayPreferences) -> String {
    if prefs.show_salary { format_currency(salary) } else { HIDDEN.to_string() }
}

fn email_cell<'a>(email: &'a str, prefs: &DisplayPreferences) -> &'a str {
    if prefs.show_email { email } else { HIDDEN }
}

/// One page of the employee table with a header describing the view
pub fn render_table(page: &TablePage, state: &ViewState, prefs: &DisplayPreferences) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Employees: {} matched | department: {} | sort: {} {} | page {} of {}",
        page.total_matched,
        state.department,
        state.sort_field.label(),
        state.sort_direction.arrow(),
        page.page,
        page.total_pages
    );
    if !state.search.trim().is_empty() {
        let _ = writeln!(out, "Search: \"{}\"", state.search.trim());
    }

    if page.rows.is_empty() {
        out.push_str("No employees found\n");
        return out;
    }

    if prefs.compact_view {
        for e in &page.rows {
            let _ = writeln!(
                out,
                "{:>4}  {} {} <{}> {} / {}",
                e.id.0,
                e.first_name,
                e.last_name,
                email_cell(&e.email, prefs),
                e.department,
                e.position
            );
        }
        return out;
    }

    let _ = writeln!(
        out,
        "{:>4}  {:<22} {:<30} {:<12} {:<24} {:>10}  {:<9} {:<13} {:>6}  {:<8}",
        "ID", "Name", "Email", "Department", "Position", "Salary", "Location", "Hired", "Rating", "Status"
    );
    for e in &page.rows {
        let _ = writeln!(
            out,
            "{:>4}  {:<22} {:<30} {:<12} {:<24} {:>10}  {:<9} {:<13} {:>6.1}  {:<8}",
            e.id.0,
            e.full_name(),
            email_cell(&e.email, prefs),
            e.department,
            e.position,
            salary_cell(e.salary, prefs),
            e.location,
            format_date(&e.hire_date),
            e.performance_rating,
            status_label(e.is_active)
        );
    }
    out
}

/// Full record as shown in the detail dialog
pub fn render_employee(employee: &Employee, prefs: &DisplayPreferences) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", employee.full_name(), employee.id);
    let _ = writeln!(out, "  Position:    {} | {}", employee.position, employee.department);
    let _ = writeln!(out, "  Email:       {}", email_cell(&employee.email, prefs));
    let _ = writeln!(out, "  Location:    {}", employee.location);
    let _ = writeln!(out, "  Hired:       {}", format_date(&employee.hire_date));
    let _ = writeln!(out, "  Age:         {}", employee.age);
    let _ = writeln!(out, "  Salary:      {}", salary_cell(employee.salary, prefs));
    let _ = writeln!(
        out,
        "  Performance: {:.1} ({})",
        employee.performance_rating,
        PerformanceTier::from_rating(employee.performance_rating).label()
    );
    let _ = writeln!(out, "  Projects:    {}", employee.projects_completed);
    let _ = writeln!(out, "  Status:      {}", status_label(employee.is_active));
    if let Some(manager) = &employee.manager {
        let _ = writeln!(out, "  Manager:     {}", manager);
    }
    if !employee.skills.is_empty() {
        let _ = writeln!(out, "  Skills:      {}", employee.skills.join(", "));
    }
    out
}

fn push_counts(out: &mut String, title: &str, counts: &[GroupCount]) {
    let _ = writeln!(out, "\n{title}");
    for group in counts {
        let _ = writeln!(out, "  {:<16} {:>4}", group.category, group.count);
    }
}

fn push_averages(out: &mut String, title: &str, averages: &[GroupAverage], cell: impl Fn(f64) -> String) {
    let _ = writeln!(out, "\n{title}");
    for group in averages {
        let _ = writeln!(out, "  {:<16} {:>10}", group.department, cell(group.average));
    }
}

/// Summary cards followed by every chart dataset
pub fn render_report(report: &AnalyticsReport, prefs: &DisplayPreferences) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    let _ = writeln!(out, "Total employees:    {}", summary.total_employees);
    let _ = writeln!(out, "Active employees:   {}", summary.active_employees);
    let _ = writeln!(out, "Average salary:     {}", salary_cell(summary.avg_salary, prefs));
    let _ = writeln!(out, "Average rating:     {:.1}", summary.avg_performance_rating);
    let _ = writeln!(out, "Departments:        {}", summary.total_departments);

    push_counts(&mut out, "Employees by department", &report.department_distribution);
    push_counts(&mut out, "Employees by location", &report.location_distribution);
    push_averages(&mut out, "Average salary by department", &report.salary_by_department, |v| {
        salary_cell(v, prefs)
    });
    push_averages(&mut out, "Average projects by department", &report.projects_by_department, |v| {
        format!("{v:.0}")
    });
    push_averages(&mut out, "Average rating by department", &report.rating_by_department, |v| {
        format!("{v:.1}")
    });

    let _ = writeln!(out, "\nPerformance distribution");
    for bucket in &report.performance_distribution {
        let _ = writeln!(out, "  {:<10} {:>4}", bucket.name, bucket.count);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::employee;
    use crate::core::{AnalyticsEngine, Roster, view};

    fn page_of(rows: Vec<Employee>) -> TablePage {
        let total = rows.len();
        TablePage {
            rows,
            total_matched: total,
            total_pages: 1,
            page: 1,
        }
    }

    #[test]
    fn test_table_shows_formatted_salary() {
        let page = page_of(vec![employee(1, "Engineering", 85000.0, 4.2)]);
        let text = render_table(&page, &ViewState::default(), &DisplayPreferences::default());
        assert!(text.contains("$85,000"));
        assert!(text.contains("Jan 15, 2020"));
        assert!(text.contains("page 1 of 1"));
    }

    #[test]
    fn test_hidden_salary_is_masked() {
        let prefs = DisplayPreferences {
            show_salary: false,
            ..Default::default()
        };
        let e = employee(1, "Engineering", 85000.0, 4.2);

        assert!(!render_table(&page_of(vec![e.clone()]), &ViewState::default(), &prefs).contains("$85,000"));
        assert!(render_employee(&e, &prefs).contains(HIDDEN));
    }

    #[test]
    fn test_hidden_email_is_masked() {
        let prefs = DisplayPreferences {
            show_email: false,
            ..Default::default()
        };
        let e = employee(1, "Engineering", 85000.0, 4.2);
        let compact = DisplayPreferences {
            compact_view: true,
            ..prefs.clone()
        };

        assert!(!render_table(&page_of(vec![e.clone()]), &ViewState::default(), &prefs).contains(&e.email));
        assert!(!render_table(&page_of(vec![e.clone()]), &ViewState::default(), &compact).contains(&e.email));
        let detail = render_employee(&e, &prefs);
        assert!(!detail.contains(&e.email));
        assert!(detail.contains(HIDDEN));
        // salary is still shown
        assert!(detail.contains("$85,000"));
    }

    #[test]
    fn test_empty_page_message() {
        let page = TablePage {
            rows: Vec::new(),
            total_matched: 0,
            total_pages: 1,
            page: 1,
        };
        let text = render_table(&page, &ViewState::default(), &DisplayPreferences::default());
        assert!(text.contains("No employees found"));
    }

    #[test]
    fn test_compact_view_single_line_rows() {
        let prefs = DisplayPreferences {
            compact_view: true,
            ..Default::default()
        };
        let roster = Roster::new(vec![employee(1, "Sales", 1.0, 3.0), employee(2, "HR", 2.0, 4.0)]).unwrap();
        let text = render_table(&view(&roster, &ViewState::default()), &ViewState::default(), &prefs);
        // header plus one line per employee
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_report_lists_every_dataset() {
        let roster = Roster::new(vec![employee(1, "Sales", 50000.0, 4.6)]).unwrap();
        let report = AnalyticsEngine::new().report(&roster);
        let text = render_report(&report, &DisplayPreferences::default());

        assert!(text.contains("Total employees:    1"));
        assert!(text.contains("Employees by location"));
        assert!(text.contains("Performance distribution"));
        assert!(text.contains("4.5-5.0"));
    }

    #[test]
    fn test_detail_view_includes_tier() {
        let text = render_employee(&employee(3, "HR", 70000.0, 4.7), &DisplayPreferences::default());
        assert!(text.contains("First3 Last3 (#3)"));
        assert!(text.contains("Excellent"));
    }
}
