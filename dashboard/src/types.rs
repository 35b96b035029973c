//! Type definitions for the dashboard
//!
//! View-state parameters, engine outputs and chart datasets. Nothing in
//! here performs computation beyond small state transitions.

use serde::{Deserialize, Serialize};
use shared::Employee;
use std::fmt;

/// Page size used when the caller does not choose one
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Departments offered by the add/edit form
pub const KNOWN_DEPARTMENTS: [&str; 5] = ["Engineering", "Marketing", "Sales", "HR", "Finance"];

/// Sortable employee fields, each mapped to a typed accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Id,
    FirstName,
    LastName,
    Email,
    Department,
    Position,
    Location,
    HireDate,
    Salary,
    Age,
    PerformanceRating,
    ProjectsCompleted,
}

/// Value extracted from a record for comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Integer(u64),
    Number(f64),
}

impl SortField {
    pub const ALL: [SortField; 12] = [
        SortField::Id,
        SortField::FirstName,
        SortField::LastName,
        SortField::Email,
        SortField::Department,
        SortField::Position,
        SortField::Location,
        SortField::HireDate,
        SortField::Salary,
        SortField::Age,
        SortField::PerformanceRating,
        SortField::ProjectsCompleted,
    ];

    /// Read this field from a record
    pub fn key<'a>(&self, employee: &'a Employee) -> SortKey<'a> {
        match self {
            SortField::Id => SortKey::Integer(employee.id.0),
            SortField::FirstName => SortKey::Text(&employee.first_name),
            SortField::LastName => SortKey::Text(&employee.last_name),
            SortField::Email => SortKey::Text(&employee.email),
            SortField::Department => SortKey::Text(&employee.department),
            SortField::Position => SortKey::Text(&employee.position),
            SortField::Location => SortKey::Text(&employee.location),
            SortField::HireDate => SortKey::Text(&employee.hire_date),
            SortField::Salary => SortKey::Number(employee.salary),
            SortField::Age => SortKey::Integer(u64::from(employee.age)),
            SortField::PerformanceRating => SortKey::Number(employee.performance_rating),
            SortField::ProjectsCompleted => SortKey::Integer(u64::from(employee.projects_completed)),
        }
    }

    /// Short label used by the sort buttons
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::FirstName => "Name",
            SortField::LastName => "Last Name",
            SortField::Email => "Email",
            SortField::Department => "Department",
            SortField::Position => "Position",
            SortField::Location => "Location",
            SortField::HireDate => "Hire Date",
            SortField::Salary => "Salary",
            SortField::Age => "Age",
            SortField::PerformanceRating => "Performance",
            SortField::ProjectsCompleted => "Projects",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortField::Id => "id",
            SortField::FirstName => "firstName",
            SortField::LastName => "lastName",
            SortField::Email => "email",
            SortField::Department => "department",
            SortField::Position => "position",
            SortField::Location => "location",
            SortField::HireDate => "hireDate",
            SortField::Salary => "salary",
            SortField::Age => "age",
            SortField::PerformanceRating => "performanceRating",
            SortField::ProjectsCompleted => "projectsCompleted",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "id" => Ok(SortField::Id),
            "name" | "firstname" => Ok(SortField::FirstName),
            "lastname" => Ok(SortField::LastName),
            "email" => Ok(SortField::Email),
            "department" | "dept" => Ok(SortField::Department),
            "position" => Ok(SortField::Position),
            "location" => Ok(SortField::Location),
            "hiredate" => Ok(SortField::HireDate),
            "salary" => Ok(SortField::Salary),
            "age" => Ok(SortField::Age),
            "performance" | "performancerating" | "rating" => Ok(SortField::PerformanceRating),
            "projects" | "projectscompleted" => Ok(SortField::ProjectsCompleted),
            _ => Err(format!("Unknown sort field: {s}")),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Department selector: every department or one exact name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(String),
}

impl DepartmentFilter {
    pub fn matches(&self, department: &str) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(selected) => selected == department,
        }
    }
}

impl std::str::FromStr for DepartmentFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Department filter cannot be empty".to_string());
        }
        if trimmed.eq_ignore_ascii_case("all") {
            Ok(DepartmentFilter::All)
        } else {
            Ok(DepartmentFilter::Only(trimmed.to_string()))
        }
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartmentFilter::All => write!(f, "all"),
            DepartmentFilter::Only(name) => write!(f, "{name}"),
        }
    }
}

/// Transient filter/sort/pagination parameters chosen by the user.
///
/// The engine never corrects `page`; the transitions below reset it to 1
/// whenever the matched set or the slicing can change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub search: String,
    pub department: DepartmentFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            department: DepartmentFilter::All,
            sort_field: SortField::Id,
            sort_direction: SortDirection::Asc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewState {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self.page = 1;
        self
    }

    pub fn with_department(mut self, department: DepartmentFilter) -> Self {
        self.department = department;
        self.page = 1;
        self
    }

    pub fn with_sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self.page = 1;
        self
    }

    /// Sort-button behavior: same field flips direction, a new field starts ascending
    pub fn toggle_sort(mut self, field: SortField) -> Self {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
        self
    }

    pub fn clear_filters(mut self) -> Self {
        self.search.clear();
        self.department = DepartmentFilter::All;
        self.page = 1;
        self
    }

    /// Page size with 0 treated as 1
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Page with 0 treated as 1
    pub fn effective_page(&self) -> usize {
        self.page.max(1)
    }
}

/// Output of the table view engine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePage {
    pub rows: Vec<Employee>,
    pub total_matched: usize,
    pub total_pages: usize,
    pub page: usize,
}

/// Record count for one observed category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub category: String,
    pub count: usize,
}

/// Per-department average and total of a numeric field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAverage {
    pub department: String,
    pub average: f64,
    pub total: f64,
}

/// Fixed numeric range used for histogram grouping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub min: f64,
    pub max: f64,
    /// Whether `max` itself belongs to the bucket
    pub closed: bool,
}

impl Bucket {
    pub const fn half_open(min: f64, max: f64) -> Self {
        Self { min, max, closed: false }
    }

    pub const fn closed(min: f64, max: f64) -> Self {
        Self { min, max, closed: true }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && (value < self.max || (self.closed && value == self.max))
    }

    /// Chart label such as `3.5-4.0`
    pub fn label(&self) -> String {
        format!("{}-{:.1}", format_bound(self.min), self.max)
    }
}

fn format_bound(value: f64) -> String {
    if value == 0.0 { "0".to_string() } else { format!("{value:.1}") }
}

/// Count of records falling into one bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketCount {
    pub name: String,
    pub bucket: Bucket,
    pub count: usize,
}

/// Headline numbers shown on the summary cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_employees: usize,
    pub active_employees: usize,
    pub avg_salary: f64,
    pub avg_performance_rating: f64,
    pub total_departments: usize,
}

/// Every dataset behind the analytics view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub summary: SummaryStats,
    pub department_distribution: Vec<GroupCount>,
    pub location_distribution: Vec<GroupCount>,
    pub salary_by_department: Vec<GroupAverage>,
    pub projects_by_department: Vec<GroupAverage>,
    pub rating_by_department: Vec<GroupAverage>,
    pub performance_distribution: Vec<BucketCount>,
}

/// One failed form rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// `field message; field message`
    pub fn summarize(violations: &[FieldViolation]) -> String {
        violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}
