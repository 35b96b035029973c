//! Employee record and its partial form used for add/edit merges

use serde::{Deserialize, Deserializer, Serialize};

use super::EmployeeId;
use crate::errors::{SharedError, SharedResult};

/// A single roster entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub hire_date: String,
    pub age: u32,
    pub location: String,
    pub performance_rating: f64,
    pub projects_completed: u32,
    pub is_active: bool,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub manager: Option<String>,
}

impl Employee {
    /// Required text fields that are blank
    pub fn blank_required_fields(&self) -> Vec<&'static str> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("department", &self.department),
            ("position", &self.position),
            ("hireDate", &self.hire_date),
            ("location", &self.location),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Partial employee record produced by the add/edit forms.
///
/// Absent fields are left untouched when merged over an existing record.
/// `manager` distinguishes "not supplied" (`None`) from "cleared"
/// (`Some(None)`, a JSON `null`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_completed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub manager: Option<Option<String>>,
}

/// Wraps any present value (including `null`) in `Some`
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl EmployeePatch {
    /// Parse a patch from JSON text
    pub fn from_json(input: &str) -> SharedResult<Self> {
        serde_json::from_str(input).map_err(|e| SharedError::DeserializationError {
            message: e.to_string(),
        })
    }

    /// Merge this patch over an existing record. The id never changes.
    pub fn apply_to(&self, base: &Employee) -> Employee {
        Employee {
            id: base.id,
            first_name: self.first_name.clone().unwrap_or_else(|| base.first_name.clone()),
            last_name: self.last_name.clone().unwrap_or_else(|| base.last_name.clone()),
            email: self.email.clone().unwrap_or_else(|| base.email.clone()),
            department: self.department.clone().unwrap_or_else(|| base.department.clone()),
            position: self.position.clone().unwrap_or_else(|| base.position.clone()),
            salary: self.salary.unwrap_or(base.salary),
            hire_date: self.hire_date.clone().unwrap_or_else(|| base.hire_date.clone()),
            age: self.age.unwrap_or(base.age),
            location: self.location.clone().unwrap_or_else(|| base.location.clone()),
            performance_rating: self.performance_rating.unwrap_or(base.performance_rating),
            projects_completed: self.projects_completed.unwrap_or(base.projects_completed),
            is_active: self.is_active.unwrap_or(base.is_active),
            skills: self.skills.clone().unwrap_or_else(|| base.skills.clone()),
            manager: self.manager.clone().unwrap_or_else(|| base.manager.clone()),
        }
    }

    /// Build a complete record under `id`.
    ///
    /// Fails with the names of every required field that is absent or blank.
    pub fn into_employee(self, id: EmployeeId) -> SharedResult<Employee> {
        let mut missing = Vec::new();

        fn take<T>(value: Option<T>, name: &'static str, missing: &mut Vec<&'static str>) -> Option<T> {
            if value.is_none() {
                missing.push(name);
            }
            value
        }

        let first_name = take(self.first_name, "firstName", &mut missing);
        let last_name = take(self.last_name, "lastName", &mut missing);
        let email = take(self.email, "email", &mut missing);
        let department = take(self.department, "department", &mut missing);
        let position = take(self.position, "position", &mut missing);
        let salary = take(self.salary, "salary", &mut missing);
        let hire_date = take(self.hire_date, "hireDate", &mut missing);
        let age = take(self.age, "age", &mut missing);
        let location = take(self.location, "location", &mut missing);
        let performance_rating = take(self.performance_rating, "performanceRating", &mut missing);
        let projects_completed = take(self.projects_completed, "projectsCompleted", &mut missing);
        let is_active = take(self.is_active, "isActive", &mut missing);

        match (
            first_name,
            last_name,
            email,
            department,
            position,
            salary,
            hire_date,
            age,
            location,
            performance_rating,
            projects_completed,
            is_active,
        ) {
            (
                Some(first_name),
                Some(last_name),
                Some(email),
                Some(department),
                Some(position),
                Some(salary),
                Some(hire_date),
                Some(age),
                Some(location),
                Some(performance_rating),
                Some(projects_completed),
                Some(is_active),
            ) => {
                let employee = Employee {
                    id,
                    first_name,
                    last_name,
                    email,
                    department,
                    position,
                    salary,
                    hire_date,
                    age,
                    location,
                    performance_rating,
                    projects_completed,
                    is_active,
                    skills: self.skills.unwrap_or_default(),
                    manager: self.manager.flatten(),
                };
                let blank = employee.blank_required_fields();
                if blank.is_empty() {
                    Ok(employee)
                } else {
                    Err(SharedError::MissingFields { fields: blank })
                }
            }
            _ => Err(SharedError::MissingFields { fields: missing }),
        }
    }
}

impl From<&Employee> for EmployeePatch {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: Some(employee.first_name.clone()),
            last_name: Some(employee.last_name.clone()),
            email: Some(employee.email.clone()),
            department: Some(employee.department.clone()),
            position: Some(employee.position.clone()),
            salary: Some(employee.salary),
            hire_date: Some(employee.hire_date.clone()),
            age: Some(employee.age),
            location: Some(employee.location.clone()),
            performance_rating: Some(employee.performance_rating),
            projects_completed: Some(employee.projects_completed),
            is_active: Some(employee.is_active),
            skills: Some(employee.skills.clone()),
            manager: Some(employee.manager.clone()),
        }
    }
}
