//! Immutable roster snapshots
//!
//! Every mutation returns a new `Roster`; the receiver is never modified.
//! Failed operations leave the caller holding the unchanged original.

use serde::Serialize;
use shared::{Employee, EmployeeId, EmployeePatch, SharedError};
use std::collections::HashSet;

use crate::error::{DashboardError, DashboardResult};

/// Ordered sequence of employee records, unique by id
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Build a roster, rejecting duplicate ids
    pub fn new(employees: Vec<Employee>) -> DashboardResult<Self> {
        let mut seen = HashSet::with_capacity(employees.len());
        for employee in &employees {
            if !seen.insert(employee.id) {
                return Err(DashboardError::DuplicateId { id: employee.id });
            }
        }
        Ok(Self { employees })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Id for the next added record: one past the current maximum, 1 when empty
    pub fn next_id(&self) -> DashboardResult<EmployeeId> {
        let max = self.employees.iter().map(|e| e.id).max().unwrap_or(EmployeeId(0));
        max.next().ok_or(DashboardError::IdExhausted { max })
    }

    /// Append a record built from `draft`, returning the new roster and the record
    pub fn with_added(&self, draft: EmployeePatch) -> DashboardResult<(Roster, Employee)> {
        let employee = draft.into_employee(self.next_id()?).map_err(missing_to_validation)?;

        let mut employees = self.employees.clone();
        employees.push(employee.clone());
        Ok((Roster { employees }, employee))
    }

    /// Merge `patch` over the record with `id`
    pub fn with_updated(&self, id: EmployeeId, patch: &EmployeePatch) -> DashboardResult<(Roster, Employee)> {
        let position = self.position_of(id)?;
        let merged = patch.apply_to(&self.employees[position]);

        let blank = merged.blank_required_fields();
        if !blank.is_empty() {
            return Err(DashboardError::missing_fields(&blank));
        }

        let mut employees = self.employees.clone();
        employees[position] = merged.clone();
        Ok((Roster { employees }, merged))
    }

    /// Drop the record with `id`, keeping the order of the rest
    pub fn without(&self, id: EmployeeId) -> DashboardResult<(Roster, Employee)> {
        let position = self.position_of(id)?;

        let mut employees = self.employees.clone();
        let removed = employees.remove(position);
        Ok((Roster { employees }, removed))
    }

    fn position_of(&self, id: EmployeeId) -> DashboardResult<usize> {
        self.employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(DashboardError::NotFound { id })
    }
}

fn missing_to_validation(error: SharedError) -> DashboardError {
    match error {
        SharedError::MissingFields { fields } => DashboardError::missing_fields(&fields),
        other => DashboardError::SharedError(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{draft, employee};

    fn roster_of(ids: &[u64]) -> Roster {
        Roster::new(ids.iter().map(|&id| employee(id, "Engineering", 50000.0, 3.0)).collect()).unwrap()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Roster::new(vec![
            employee(1, "HR", 1.0, 1.0),
            employee(1, "Sales", 2.0, 2.0),
        ]);
        assert!(matches!(result, Err(DashboardError::DuplicateId { id: EmployeeId(1) })));
    }

    #[test]
    fn test_add_assigns_max_plus_one() {
        let roster = roster_of(&[4, 9, 2]);
        let (next, added) = roster.with_added(draft("Grace", "Hopper")).unwrap();

        assert_eq!(added.id, EmployeeId(10));
        assert_eq!(next.len(), 4);
        assert_eq!(next.employees().last().unwrap().id, EmployeeId(10));
        // original snapshot untouched
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_add_to_empty_roster_starts_at_one() {
        let (next, added) = Roster::empty().with_added(draft("Grace", "Hopper")).unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(added.id, EmployeeId(1));
    }

    #[test]
    fn test_add_after_largest_id_is_rejected() {
        let roster = roster_of(&[u64::MAX]);

        let result = roster.with_added(draft("Grace", "Hopper"));

        assert!(matches!(result, Err(DashboardError::IdExhausted { max: EmployeeId(u64::MAX) })));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_add_missing_fields_is_validation_error() {
        let partial = EmployeePatch {
            first_name: Some("Solo".to_string()),
            ..Default::default()
        };

        match roster_of(&[1]).with_added(partial) {
            Err(DashboardError::Validation { violations }) => {
                assert!(violations.iter().any(|v| v.field == "email"));
                assert!(violations.iter().all(|v| v.message == "is required"));
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_add_then_remove_round_trips() {
        let roster = roster_of(&[3, 1, 2]);
        let (added, new_employee) = roster.with_added(draft("Alan", "Turing")).unwrap();
        let (restored, removed) = added.without(new_employee.id).unwrap();

        assert_eq!(restored, roster);
        assert_eq!(removed, new_employee);
    }

    #[test]
    fn test_update_merges_and_keeps_position() {
        let roster = roster_of(&[1, 2, 3]);
        let patch = EmployeePatch {
            salary: Some(99000.0),
            department: Some("Finance".to_string()),
            ..Default::default()
        };

        let (next, updated) = roster.with_updated(EmployeeId(2), &patch).unwrap();
        assert_eq!(updated.salary, 99000.0);
        assert_eq!(updated.department, "Finance");
        assert_eq!(updated.first_name, roster.employees()[1].first_name);
        assert_eq!(next.employees()[1], updated);
        assert_eq!(next.employees()[0], roster.employees()[0]);
    }

    #[test]
    fn test_update_cannot_blank_required_field() {
        let patch = EmployeePatch {
            position: Some(String::new()),
            ..Default::default()
        };
        let result = roster_of(&[1]).with_updated(EmployeeId(1), &patch);
        assert!(matches!(result, Err(DashboardError::Validation { .. })));
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let roster = roster_of(&[1, 2]);
        assert!(matches!(
            roster.with_updated(EmployeeId(7), &EmployeePatch::default()),
            Err(DashboardError::NotFound { id: EmployeeId(7) })
        ));
        assert!(matches!(
            roster.without(EmployeeId(7)),
            Err(DashboardError::NotFound { id: EmployeeId(7) })
        ));
    }

    #[test]
    fn test_remove_preserves_order() {
        let (next, _) = roster_of(&[5, 6, 7, 8]).without(EmployeeId(6)).unwrap();
        let ids: Vec<u64> = next.employees().iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![5, 7, 8]);
    }
}
