//! CSV export of the filtered and sorted table (every matching row, not just one page)

use shared::{Component, Employee, component_info};

use crate::core::format::{full_name, status_label};
use crate::core::roster::Roster;
use crate::core::table::filter_and_sort;
use crate::error::{DashboardError, DashboardResult};
use crate::types::ViewState;

pub const CSV_HEADERS: [&str; 9] = [
    "ID",
    "Name",
    "Email",
    "Department",
    "Position",
    "Location",
    "Salary",
    "Performance",
    "Status",
];

/// Default file name offered for downloads
pub const EXPORT_FILE_NAME: &str = "employees.csv";

/// Rendered CSV together with the number of data rows it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub content: String,
    pub rows: usize,
}

/// Export the rows matching `state`, unless exporting is switched off
pub fn export_view(roster: &Roster, state: &ViewState, allow_export: bool) -> DashboardResult<CsvExport> {
    if !allow_export {
        return Err(DashboardError::ExportDisabled);
    }

    let rows = filter_and_sort(roster, state);
    component_info!(Component::Export, "📤 Exporting {} rows as CSV", rows.len());
    Ok(CsvExport {
        content: to_csv(&rows),
        rows: rows.len(),
    })
}

/// Serialize rows in the given order, header first, lines joined by `\n`
pub fn to_csv(rows: &[&Employee]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for employee in rows {
        let fields = [
            employee.id.to_string(),
            quote_always(&full_name(&employee.first_name, &employee.last_name)),
            escape(&employee.email),
            escape(&employee.department),
            escape(&employee.position),
            escape(&employee.location),
            employee.salary.to_string(),
            employee.performance_rating.to_string(),
            status_label(employee.is_active).to_string(),
        ];
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

fn quote_always(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Quote only when the field would otherwise break the row
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        quote_always(field)
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::employee;
    use crate::types::{SortDirection, SortField};

    #[test]
    fn test_csv_layout() {
        let mut ada = employee(7, "Engineering", 85000.0, 4.5);
        ada.first_name = "Ada".to_string();
        ada.last_name = "Lovelace".to_string();
        ada.email = "ada@example.com".to_string();
        ada.position = "Engineer".to_string();
        ada.location = "London".to_string();
        ada.is_active = false;

        let csv = to_csv(&[&ada]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Name,Email,Department,Position,Location,Salary,Performance,Status");
        assert_eq!(
            lines[1],
            "7,\"Ada Lovelace\",ada@example.com,Engineering,Engineer,London,85000,4.5,Inactive"
        );
    }

    #[test]
    fn test_csv_escapes_commas_and_quotes() {
        let mut e = employee(1, "Sales", 1.0, 1.0);
        e.location = "Portland, OR".to_string();
        e.position = "\"Chief\" Closer".to_string();

        let csv = to_csv(&[&e]);
        assert!(csv.contains(",\"Portland, OR\","));
        assert!(csv.contains(",\"\"\"Chief\"\" Closer\","));
    }

    #[test]
    fn test_export_follows_view_order_and_ignores_paging() {
        let roster = Roster::new(vec![
            employee(1, "Sales", 300.0, 1.0),
            employee(2, "HR", 100.0, 1.0),
            employee(3, "Sales", 200.0, 1.0),
        ])
        .unwrap();
        let state = ViewState::default()
            .with_sort(SortField::Salary, SortDirection::Asc)
            .with_page_size(1);

        let export = export_view(&roster, &state, true).unwrap();
        assert_eq!(export.rows, 3);
        let ids: Vec<&str> = export.content.lines().skip(1).map(|l| l.split(',').next().unwrap()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_row_count_ignores_embedded_newlines() {
        let mut e = employee(1, "Sales", 1.0, 1.0);
        e.position = "Line1\nLine2".to_string();
        let roster = Roster::new(vec![e]).unwrap();

        let export = export_view(&roster, &ViewState::default(), true).unwrap();

        assert_eq!(export.rows, 1);
        assert!(export.content.contains("\"Line1\nLine2\""));
    }

    #[test]
    fn test_export_disabled() {
        let result = export_view(&Roster::empty(), &ViewState::default(), false);
        assert!(matches!(result, Err(DashboardError::ExportDisabled)));
    }
}
