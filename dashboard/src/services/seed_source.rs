//! Seed data sources
//!
//! The roster is read once at startup, either from a JSON file on disk or
//! from the sample dataset compiled into the binary. It is never written back.

use async_trait::async_trait;
use serde::Deserialize;
use shared::{Component, Employee, component_debug, component_error, component_info};
use std::path::PathBuf;

use crate::config::SeedChoice;
use crate::core::Roster;
use crate::error::{DashboardError, DashboardResult};
use crate::traits::SeedSource;

/// Sample dataset shipped with the dashboard
pub const SAMPLE_DATA: &str = include_str!("../../data/sample-data.json");

/// Accepted seed layouts: `{ "employees": [...] }` or a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum SeedDocument {
    Wrapped { employees: Vec<Employee> },
    Bare(Vec<Employee>),
}

/// Parse seed JSON into a roster, rejecting duplicate ids
pub fn parse_seed(input: &str) -> DashboardResult<Roster> {
    let document: SeedDocument = serde_json::from_str(input).map_err(|e| DashboardError::SeedError {
        message: format!("expected {{\"employees\": [...]}} or an array of employees: {e}"),
    })?;

    let employees = match document {
        SeedDocument::Wrapped { employees } => employees,
        SeedDocument::Bare(employees) => employees,
    };
    Roster::new(employees)
}

/// Source matching the configured seed choice
pub fn seed_source(choice: &SeedChoice) -> Box<dyn SeedSource> {
    match choice {
        SeedChoice::Embedded => Box::new(EmbeddedSeedSource),
        SeedChoice::File(path) => Box::new(FileSeedSource::new(path.clone())),
    }
}

/// Load the startup roster, logging where it came from or why it failed
pub async fn load_roster(source: &dyn SeedSource) -> DashboardResult<Roster> {
    component_debug!(Component::Seed, "Loading roster from {}", source.describe());

    source.load().await.inspect_err(|e| {
        component_error!(Component::Seed, "❌ Loading seed data from {} failed: {}", source.describe(), e);
    })
}

/// Seed read from a JSON file
pub struct FileSeedSource {
    path: PathBuf,
}

impl FileSeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SeedSource for FileSeedSource {
    async fn load(&self) -> DashboardResult<Roster> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let roster = parse_seed(&content)?;
        component_info!(
            Component::Seed,
            "📁 Loaded {} employees from {}",
            roster.len(),
            self.path.display()
        );
        Ok(roster)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Seed compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSeedSource;

#[async_trait]
impl SeedSource for EmbeddedSeedSource {
    async fn load(&self) -> DashboardResult<Roster> {
        let roster = parse_seed(SAMPLE_DATA)?;
        component_info!(Component::Seed, "📦 Loaded {} sample employees", roster.len());
        Ok(roster)
    }

    fn describe(&self) -> String {
        "embedded sample data".to_string()
    }
}
