//! Command line arguments
//!
//! Every global flag also reads an environment variable, so a `.env` file
//! can carry the same settings.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{DashboardConfig, DisplayPreferences, SeedChoice};
use crate::types::{DEFAULT_PAGE_SIZE, DepartmentFilter, SortDirection, SortField, ViewState};

#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Staff roster dashboard: table view, analytics and CSV export")]
pub struct Cli {
    /// Seed JSON file (defaults to the embedded sample data)
    #[arg(long, env = "DASHBOARD_SEED", global = true)]
    pub seed: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DASHBOARD_LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    /// Simulated backend latency for add/edit/delete, in milliseconds
    #[arg(long, env = "DASHBOARD_LATENCY_MS", default_value_t = 500, global = true)]
    pub latency_ms: u64,

    /// Rows per page when a command does not set --page-size
    #[arg(long, env = "DASHBOARD_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE, global = true)]
    pub default_page_size: usize,

    /// Mask salary figures in every view
    #[arg(long, env = "DASHBOARD_HIDE_SALARY", global = true)]
    pub hide_salary: bool,

    /// Mask email addresses in every view
    #[arg(long, env = "DASHBOARD_HIDE_EMAIL", global = true)]
    pub hide_email: bool,

    /// Refuse CSV export
    #[arg(long, env = "DASHBOARD_NO_EXPORT", global = true)]
    pub no_export: bool,

    /// One line per employee in table output
    #[arg(long, env = "DASHBOARD_COMPACT", global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one page of the employee table
    List {
        #[command(flatten)]
        view: ViewArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the summary cards and every analytics dataset
    Stats {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write the filtered and sorted table as CSV
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Interactive session with add/edit/delete against the in-memory roster
    Shell,
}

/// Filter, sort and pagination flags shared by `list` and `export`
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Case-insensitive search over name, email, department and position
    #[arg(long, default_value = "")]
    pub search: String,

    /// Exact department name, or "all"
    #[arg(long, default_value = "all")]
    pub department: DepartmentFilter,

    /// Sort field (id, name, lastName, email, department, position, location,
    /// hireDate, salary, age, performance, projects)
    #[arg(long, default_value = "id")]
    pub sort: SortField,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl ViewArgs {
    pub fn to_view_state(&self, default_page_size: usize) -> ViewState {
        let direction = if self.desc { SortDirection::Desc } else { SortDirection::Asc };
        ViewState::default()
            .with_search(self.search.clone())
            .with_department(self.department.clone())
            .with_sort(self.sort, direction)
            .with_page_size(self.page_size.unwrap_or(default_page_size))
            .with_page(self.page)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Resolve flags into a runtime configuration
    pub fn to_config(&self) -> DashboardConfig {
        DashboardConfig {
            seed: match &self.seed {
                Some(path) => SeedChoice::File(path.clone()),
                None => SeedChoice::Embedded,
            },
            latency: Duration::from_millis(self.latency_ms),
            default_page_size: self.default_page_size,
            preferences: DisplayPreferences {
                show_salary: !self.hide_salary,
                show_email: !self.hide_email,
                allow_export: !self.no_export,
                compact_view: self.compact,
            },
            log_level: self.log_level.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_flags_build_view_state() {
        let cli = Cli::try_parse_from([
            "dashboard",
            "list",
            "--search",
            "eng",
            "--department",
            "Marketing",
            "--sort",
            "salary",
            "--desc",
            "--page",
            "2",
            "--page-size",
            "5",
        ])
        .unwrap();

        match cli.command {
            Command::List { view, format } => {
                let state = view.to_view_state(10);
                assert_eq!(state.search, "eng");
                assert_eq!(state.department, DepartmentFilter::Only("Marketing".to_string()));
                assert_eq!(state.sort_field, SortField::Salary);
                assert_eq!(state.sort_direction, SortDirection::Desc);
                assert_eq!(state.page, 2);
                assert_eq!(state.page_size, 5);
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("Expected list command, got {other:?}"),
        }
    }

    #[test]
    fn test_default_page_size_applies() {
        let cli = Cli::try_parse_from(["dashboard", "--default-page-size", "25", "export"]).unwrap();
        match cli.command {
            Command::Export { view, output } => {
                assert_eq!(view.to_view_state(cli.default_page_size).page_size, 25);
                assert!(output.is_none());
            }
            other => panic!("Expected export command, got {other:?}"),
        }
    }

    #[test]
    fn test_privacy_flags_map_to_preferences() {
        let cli = Cli::try_parse_from(["dashboard", "stats", "--hide-salary", "--no-export"]).unwrap();
        let config = cli.to_config();
        assert!(!config.preferences.show_salary);
        assert!(config.preferences.show_email);
        assert!(!config.preferences.allow_export);
        assert_eq!(config.seed, SeedChoice::Embedded);
    }

    #[test]
    fn test_hide_email_flag() {
        let cli = Cli::try_parse_from(["dashboard", "--hide-email", "list"]).unwrap();
        assert!(!cli.to_config().preferences.show_email);
    }

    #[test]
    fn test_unknown_sort_field_rejected() {
        assert!(Cli::try_parse_from(["dashboard", "list", "--sort", "shoe-size"]).is_err());
    }
}
