//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod analytics;
pub mod export;
pub mod format;
pub mod roster;
pub mod table;
pub mod validation;

// Re-export commonly used types
pub use analytics::{AnalyticsEngine, GroupField, Metric};
pub use export::{CsvExport, EXPORT_FILE_NAME, export_view, to_csv};
pub use roster::Roster;
pub use table::{departments, filter_and_sort, view};
pub use validation::{validate_changes, validate_new};
