//! Interactive dashboard session
//!
//! Each input line is one command. The session keeps its own view state and
//! reads the roster through store snapshots, so a mutation shows up on the
//! next command without any manual refresh.

use shared::{Component, EmployeeId, EmployeePatch, component_debug};
use std::path::PathBuf;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::DisplayPreferences;
use crate::core::validation::parse_skills;
use crate::core::{AnalyticsEngine, EXPORT_FILE_NAME, departments, export_view, validate_changes, validate_new, view};
use crate::error::{DashboardError, DashboardResult};
use crate::render::{render_employee, render_report, render_table};
use crate::services::RosterStore;
use crate::traits::RosterBackend;
use crate::types::{DepartmentFilter, SortDirection, SortField, ViewState};

pub const PROMPT: &str = "dashboard> ";

pub const HELP: &str = "\
Commands:
  list                       show the current page
  search <text>              filter by name, email, department or position (empty clears)
  dept <name|all>            filter by department
  depts                      list departments present in the roster
  sort <field> [asc|desc]    sort; repeating a field flips the direction
  page <n> | next | prev     move between pages
  size <n>                   rows per page
  clear                      reset search and department filter
  show <id>                  full record
  add <json>                 create an employee from a JSON object
  edit <id> <json>           update the given fields of an employee
  skills <id> <a, b, ...>    replace an employee's skills (empty clears)
  delete <id>                remove an employee
  stats                      summary cards and analytics
  export [path]              CSV of every matching row (default employees.csv)
  help                       this text
  quit                       leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    List,
    Search(String),
    Department(DepartmentFilter),
    Departments,
    Sort(SortField, Option<SortDirection>),
    Page(usize),
    Next,
    Prev,
    Size(usize),
    Clear,
    Show(EmployeeId),
    Add(EmployeePatch),
    Edit(EmployeeId, EmployeePatch),
    Skills(EmployeeId, Vec<String>),
    Delete(EmployeeId),
    Stats,
    Export(PathBuf),
    Help,
    Quit,
}

fn parse_id(input: &str) -> DashboardResult<EmployeeId> {
    EmployeeId::from_str(input.trim()).map_err(DashboardError::invalid_command)
}

fn parse_count(name: &str, input: &str) -> DashboardResult<usize> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| DashboardError::invalid_command(format!("{name} expects a positive number, got '{}'", input.trim())))
}

impl FromStr for ShellCommand {
    type Err = DashboardError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "list" | "ls" => ShellCommand::List,
            "search" => ShellCommand::Search(rest.to_string()),
            "dept" | "department" => {
                ShellCommand::Department(rest.parse().map_err(DashboardError::invalid_command)?)
            }
            "depts" | "departments" => ShellCommand::Departments,
            "sort" => {
                let mut parts = rest.split_whitespace();
                let field = parts
                    .next()
                    .ok_or_else(|| DashboardError::invalid_command("sort expects a field name"))?
                    .parse::<SortField>()
                    .map_err(DashboardError::invalid_command)?;
                let direction = match parts.next().map(str::to_lowercase).as_deref() {
                    None => None,
                    Some("asc") => Some(SortDirection::Asc),
                    Some("desc") => Some(SortDirection::Desc),
                    Some(other) => {
                        return Err(DashboardError::invalid_command(format!(
                            "sort direction must be asc or desc, got '{other}'"
                        )));
                    }
                };
                ShellCommand::Sort(field, direction)
            }
            "page" => ShellCommand::Page(parse_count("page", rest)?),
            "next" => ShellCommand::Next,
            "prev" => ShellCommand::Prev,
            "size" => ShellCommand::Size(parse_count("size", rest)?),
            "clear" => ShellCommand::Clear,
            "show" => ShellCommand::Show(parse_id(rest)?),
            "add" => ShellCommand::Add(EmployeePatch::from_json(rest)?),
            "edit" => {
                let (id, json) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| DashboardError::invalid_command("edit expects <id> <json>"))?;
                ShellCommand::Edit(parse_id(id)?, EmployeePatch::from_json(json.trim())?)
            }
            "skills" => {
                let (id, list) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                ShellCommand::Skills(parse_id(id)?, parse_skills(list))
            }
            "delete" | "rm" => ShellCommand::Delete(parse_id(rest)?),
            "stats" => ShellCommand::Stats,
            "export" if rest.is_empty() => ShellCommand::Export(PathBuf::from(EXPORT_FILE_NAME)),
            "export" => ShellCommand::Export(PathBuf::from(rest)),
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            "" => return Err(DashboardError::invalid_command("empty command")),
            other => return Err(DashboardError::invalid_command(format!("unknown command '{other}', try 'help'"))),
        };
        Ok(command)
    }
}

/// Result of one command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

pub struct ShellSession<'a, B: RosterBackend> {
    store: &'a RosterStore<B>,
    engine: AnalyticsEngine,
    preferences: DisplayPreferences,
    state: ViewState,
}

impl<'a, B: RosterBackend> ShellSession<'a, B> {
    pub fn new(store: &'a RosterStore<B>, preferences: DisplayPreferences, default_page_size: usize) -> Self {
        Self {
            store,
            engine: AnalyticsEngine::new(),
            preferences,
            state: ViewState::default().with_page_size(default_page_size),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    fn update_state(&mut self, change: impl FnOnce(ViewState) -> ViewState) {
        self.state = change(std::mem::take(&mut self.state));
    }

    fn current_page(&self) -> String {
        let snapshot = self.store.snapshot();
        render_table(&view(&snapshot, &self.state), &self.state, &self.preferences)
    }

    /// Apply one command and render its result
    pub async fn execute(&mut self, command: ShellCommand) -> DashboardResult<Outcome> {
        component_debug!(Component::Cli, "⌨️ Executing {:?}", command);

        let text = match command {
            ShellCommand::List => self.current_page(),
            ShellCommand::Search(text) => {
                self.update_state(|s| s.with_search(text));
                self.current_page()
            }
            ShellCommand::Department(filter) => {
                self.update_state(|s| s.with_department(filter));
                self.current_page()
            }
            ShellCommand::Departments => departments(&self.store.snapshot()).join("\n"),
            ShellCommand::Sort(field, direction) => {
                self.update_state(|s| match direction {
                    Some(direction) => s.with_sort(field, direction),
                    None => s.toggle_sort(field),
                });
                self.current_page()
            }
            ShellCommand::Page(page) => {
                self.update_state(|s| s.with_page(page.max(1)));
                self.current_page()
            }
            ShellCommand::Next => {
                let total_pages = view(&self.store.snapshot(), &self.state).total_pages;
                let next = (self.state.effective_page() + 1).min(total_pages);
                self.update_state(|s| s.with_page(next));
                self.current_page()
            }
            ShellCommand::Prev => {
                let prev = self.state.effective_page().saturating_sub(1).max(1);
                self.update_state(|s| s.with_page(prev));
                self.current_page()
            }
            ShellCommand::Size(size) => {
                self.update_state(|s| s.with_page_size(size.max(1)));
                self.current_page()
            }
            ShellCommand::Clear => {
                self.update_state(ViewState::clear_filters);
                self.current_page()
            }
            ShellCommand::Show(id) => {
                let snapshot = self.store.snapshot();
                let employee = snapshot.get(id).ok_or(DashboardError::NotFound { id })?;
                render_employee(employee, &self.preferences)
            }
            ShellCommand::Add(draft) => {
                validate_new(&draft)?;
                let added = self.store.add(draft).await?;
                format!("Added {} as #{}", added.full_name(), added.id)
            }
            ShellCommand::Edit(id, patch) => {
                validate_changes(&patch)?;
                let updated = self.store.update(id, &patch).await?;
                format!("Updated #{} ({})", updated.id, updated.full_name())
            }
            ShellCommand::Skills(id, skills) => {
                let patch = EmployeePatch {
                    skills: Some(skills),
                    ..Default::default()
                };
                let updated = self.store.update(id, &patch).await?;
                format!("Skills for #{}: {}", updated.id, updated.skills.join(", "))
            }
            ShellCommand::Delete(id) => {
                let removed = self.store.remove(id).await?;
                format!("Deleted #{} ({})", removed.id, removed.full_name())
            }
            ShellCommand::Stats => render_report(&self.engine.report(&self.store.snapshot()), &self.preferences),
            ShellCommand::Export(path) => {
                let export = export_view(&self.store.snapshot(), &self.state, self.preferences.allow_export)?;
                tokio::fs::write(&path, &export.content).await?;
                format!("Exported {} rows to {}", export.rows, path.display())
            }
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Continue(text))
    }

    /// Read commands until `quit` or end of input. Command errors are
    /// printed and the session continues; only I/O errors end it early.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> DashboardResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let result = match line.parse::<ShellCommand>() {
                Ok(command) => self.execute(command).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(Outcome::Continue(text)) => {
                    output.write_all(text.as_bytes()).await?;
                    if !text.ends_with('\n') {
                        output.write_all(b"\n").await?;
                    }
                }
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    output.write_all(format!("Error: {e}\n").as_bytes()).await?;
                }
            }
        }

        output.flush().await?;
        Ok(())
    }
}
