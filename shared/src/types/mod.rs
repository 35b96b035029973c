//! Core types used throughout the dashboard

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod employee;

pub use employee::{Employee, EmployeePatch};

/// Identifier of an employee record, unique within a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

impl EmployeeId {
    /// Identifier that follows this one, `None` once the id space is used up
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EmployeeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(EmployeeId)
            .map_err(|_| format!("Invalid employee id: {s}"))
    }
}

impl From<u64> for EmployeeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Dashboard component emitting a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// Roster store and its backend
    Store,
    /// Seed data loading
    Seed,
    /// Table view engine
    TableView,
    /// Aggregation engine
    Analytics,
    /// CSV export
    Export,
    /// Command line surface and interactive shell
    Cli,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Store => write!(f, "store"),
            Component::Seed => write!(f, "seed"),
            Component::TableView => write!(f, "table_view"),
            Component::Analytics => write!(f, "analytics"),
            Component::Export => write!(f, "export"),
            Component::Cli => write!(f, "cli"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_id_parsing() {
        assert_eq!("42".parse::<EmployeeId>(), Ok(EmployeeId(42)));
        assert_eq!(" 7 ".parse::<EmployeeId>(), Ok(EmployeeId(7)));
        assert!("abc".parse::<EmployeeId>().is_err());
        assert!("-1".parse::<EmployeeId>().is_err());
    }

    #[test]
    fn test_employee_id_next() {
        assert_eq!(EmployeeId(9).next(), Some(EmployeeId(10)));
        assert_eq!(EmployeeId(u64::MAX).next(), None);
    }

    #[test]
    fn test_component_display() {
        assert_eq!(Component::Store.to_string(), "store");
        assert_eq!(Component::TableView.to_string(), "table_view");
    }
}
