//! Runtime configuration resolved from command line flags and environment

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{DashboardError, DashboardResult};
use crate::services::simulated_backend::DEFAULT_LATENCY;
use crate::types::DEFAULT_PAGE_SIZE;

/// Largest page size the table offers
pub const MAX_PAGE_SIZE: usize = 100;

/// Display and privacy preferences from the settings panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPreferences {
    /// Show salary figures in tables and detail views
    pub show_salary: bool,
    /// Show email addresses in tables and detail views
    pub show_email: bool,
    /// Allow CSV export of the table
    pub allow_export: bool,
    /// One line per employee instead of the full column set
    pub compact_view: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            show_salary: true,
            show_email: true,
            allow_export: true,
            compact_view: false,
        }
    }
}

/// Where the startup roster comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedChoice {
    Embedded,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub seed: SeedChoice,
    /// Simulated backend latency for add/edit/delete
    pub latency: Duration,
    pub default_page_size: usize,
    pub preferences: DisplayPreferences,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: SeedChoice::Embedded,
            latency: DEFAULT_LATENCY,
            default_page_size: DEFAULT_PAGE_SIZE,
            preferences: DisplayPreferences::default(),
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Reject values the dashboard cannot honor
    pub fn validate(&self) -> DashboardResult<()> {
        if self.default_page_size == 0 || self.default_page_size > MAX_PAGE_SIZE {
            return Err(DashboardError::ConfigError {
                field: "page_size".to_string(),
                value: self.default_page_size.to_string(),
            });
        }

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(DashboardError::ConfigError {
                field: "log_level".to_string(),
                value: self.log_level.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.latency, Duration::from_millis(500));
        assert!(config.preferences.allow_export);
        assert!(config.preferences.show_salary);
        assert!(config.preferences.show_email);
    }

    #[test]
    fn test_page_size_bounds() {
        let config = DashboardConfig {
            default_page_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(DashboardError::ConfigError { .. })));

        let config = DashboardConfig {
            default_page_size: MAX_PAGE_SIZE + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_log_level() {
        let config = DashboardConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
