//! Dashboard-specific error types

use thiserror::Error;
use shared::{EmployeeId, SharedError};

use crate::types::FieldViolation;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Validation failed: {}", FieldViolation::summarize(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("Employee not found: {id}")]
    NotFound { id: EmployeeId },

    #[error("Seed data rejected: {message}")]
    SeedError { message: String },

    #[error("Duplicate employee id in seed data: {id}")]
    DuplicateId { id: EmployeeId },

    #[error("No employee id left after {max}")]
    IdExhausted { max: EmployeeId },

    #[error("Export is disabled by the privacy preferences")]
    ExportDisabled,

    #[error("Roster backend failed: {message}")]
    BackendError { message: String },

    #[error("Invalid command: {details}")]
    InvalidCommand { details: String },

    #[error("Configuration error: {field} = {value}")]
    ConfigError { field: String, value: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DashboardError {
    /// Validation failure for a set of required fields
    pub fn missing_fields(fields: &[&'static str]) -> Self {
        Self::Validation {
            violations: fields
                .iter()
                .map(|field| FieldViolation::new(field, "is required"))
                .collect(),
        }
    }

    pub fn invalid_command(details: impl Into<String>) -> Self {
        Self::InvalidCommand { details: details.into() }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
