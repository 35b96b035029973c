//! Staff roster dashboard
//!
//! A roster store holding immutable snapshots, a table view engine for
//! search, filtering, sorting and pagination, and an aggregation engine for
//! the analytics view. The binary drives them from the command line or an
//! interactive shell.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod services;
pub mod shell;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::{DashboardConfig, DisplayPreferences, SeedChoice};
pub use error::{DashboardError, DashboardResult};
pub use shell::{ShellCommand, ShellSession};
pub use types::*;

// Re-export core engines
pub use core::{AnalyticsEngine, Roster, export_view, view};

// Re-export trait definitions
pub use traits::{RosterBackend, SeedSource};

// Re-export service implementations
pub use services::{EmbeddedSeedSource, FileSeedSource, RosterStore, SimulatedBackend};
