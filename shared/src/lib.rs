//! Shared types for the staff roster dashboard
//!
//! Contains the employee data model, the model-level error type and the
//! tracing setup used by every component of the workspace.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
