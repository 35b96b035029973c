//! Add/edit form rules, applied before a draft reaches the roster store
//!
//! The store itself only checks that required fields are present; range
//! and syntax rules live here so every violation can be reported at once.

use regex::Regex;
use shared::EmployeePatch;
use std::sync::OnceLock;

use crate::core::format::parse_date;
use crate::error::{DashboardError, DashboardResult};
use crate::types::{FieldViolation, KNOWN_DEPARTMENTS};

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

pub fn is_valid_email(input: &str) -> bool {
    email_pattern().is_match(input)
}

/// Validate a draft for a new record: every required field must be supplied
pub fn validate_new(draft: &EmployeePatch) -> DashboardResult<()> {
    into_result(collect_violations(draft, true))
}

/// Validate an edit: only supplied fields are checked
pub fn validate_changes(patch: &EmployeePatch) -> DashboardResult<()> {
    into_result(collect_violations(patch, false))
}

fn into_result(violations: Vec<FieldViolation>) -> DashboardResult<()> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(DashboardError::Validation { violations })
    }
}

/// Every violated rule, in form order
pub fn collect_violations(patch: &EmployeePatch, require_all: bool) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    require_text("firstName", &patch.first_name, "First name", require_all, &mut violations);
    require_text("lastName", &patch.last_name, "Last name", require_all, &mut violations);

    match &patch.age {
        Some(age) if !(18..=100).contains(age) => {
            violations.push(FieldViolation::new("age", "Age must be between 18 and 100"))
        }
        None if require_all => violations.push(FieldViolation::new("age", "Age is required")),
        _ => {}
    }

    match &patch.email {
        Some(email) if !is_valid_email(email) => {
            violations.push(FieldViolation::new("email", "Invalid email address"))
        }
        None if require_all => violations.push(FieldViolation::new("email", "Email is required")),
        _ => {}
    }

    require_text("location", &patch.location, "Location", require_all, &mut violations);

    match &patch.department {
        Some(department) if department.trim().is_empty() => {
            violations.push(FieldViolation::new("department", "Department is required"))
        }
        Some(department) if !KNOWN_DEPARTMENTS.contains(&department.as_str()) => violations.push(
            FieldViolation::new("department", format!("Department must be one of {}", KNOWN_DEPARTMENTS.join(", "))),
        ),
        None if require_all => violations.push(FieldViolation::new("department", "Department is required")),
        _ => {}
    }

    require_text("position", &patch.position, "Position", require_all, &mut violations);

    match patch.salary {
        Some(salary) if !salary.is_finite() || salary < 0.0 => {
            violations.push(FieldViolation::new("salary", "Salary must be positive"))
        }
        None if require_all => violations.push(FieldViolation::new("salary", "Salary is required")),
        _ => {}
    }

    match &patch.hire_date {
        Some(date) if date.trim().is_empty() => {
            violations.push(FieldViolation::new("hireDate", "Hire date is required"))
        }
        Some(date) if parse_date(date).is_none() => {
            violations.push(FieldViolation::new("hireDate", "Hire date must be a valid date"))
        }
        None if require_all => violations.push(FieldViolation::new("hireDate", "Hire date is required")),
        _ => {}
    }

    match patch.performance_rating {
        Some(rating) if !(0.0..=5.0).contains(&rating) => violations.push(FieldViolation::new(
            "performanceRating",
            "Performance rating must be between 0 and 5",
        )),
        None if require_all => {
            violations.push(FieldViolation::new("performanceRating", "Performance rating is required"))
        }
        _ => {}
    }

    // projectsCompleted is unsigned, so only presence can fail
    if require_all && patch.projects_completed.is_none() {
        violations.push(FieldViolation::new("projectsCompleted", "Projects completed is required"));
    }

    if require_all && patch.is_active.is_none() {
        violations.push(FieldViolation::new("isActive", "Status is required"));
    }

    violations
}

fn require_text(
    field: &str,
    value: &Option<String>,
    label: &str,
    require_all: bool,
    violations: &mut Vec<FieldViolation>,
) {
    match value {
        Some(v) if v.trim().is_empty() => violations.push(FieldViolation::new(field, format!("{label} is required"))),
        None if require_all => violations.push(FieldViolation::new(field, format!("{label} is required"))),
        _ => {}
    }
}

/// Split the comma-separated skills input into trimmed, non-empty entries
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::draft;

    #[test]
    fn test_complete_draft_is_valid() {
        assert!(validate_new(&draft("Grace", "Hopper")).is_ok());
    }

    #[test]
    fn test_reports_every_violation() {
        let mut bad = draft("", "Hopper");
        bad.email = Some("not-an-email".to_string());
        bad.age = Some(17);
        bad.performance_rating = Some(5.5);
        bad.department = Some("Legal".to_string());

        let violations = collect_violations(&bad, true);
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["firstName", "age", "email", "department", "performanceRating"]);
    }

    #[test]
    fn test_missing_fields_only_matter_for_new_records() {
        let partial = EmployeePatch {
            salary: Some(42000.0),
            ..Default::default()
        };
        assert!(validate_changes(&partial).is_ok());

        match validate_new(&partial) {
            Err(DashboardError::Validation { violations }) => {
                assert!(violations.iter().any(|v| v.field == "firstName"));
                assert!(!violations.iter().any(|v| v.field == "salary"));
            }
            other => panic!("Expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_changes_still_checked_for_ranges() {
        let patch = EmployeePatch {
            salary: Some(-1.0),
            hire_date: Some("yesterday-ish".to_string()),
            ..Default::default()
        };
        let violations = collect_violations(&patch, false);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("a.b@example.co.uk"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("ab@example"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_parse_skills() {
        assert_eq!(
            parse_skills(" Rust, SQL ,, Leadership "),
            vec!["Rust".to_string(), "SQL".to_string(), "Leadership".to_string()]
        );
        assert!(parse_skills("  ").is_empty());
    }
}
