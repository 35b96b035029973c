//! Aggregation engine for the summary cards and analytics charts
//!
//! Pure business logic: every dataset is recomputed from the full roster on
//! each call. Categories come only from the data, in first-seen order.

use shared::{Component, Employee, component_debug};
use std::collections::HashMap;

use crate::core::roster::Roster;
use crate::types::{AnalyticsReport, Bucket, BucketCount, GroupAverage, GroupCount, SummaryStats};

/// Categorical field used for group counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Department,
    Location,
}

impl GroupField {
    fn value<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            GroupField::Department => &employee.department,
            GroupField::Location => &employee.location,
        }
    }
}

/// Numeric field averaged per department
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Salary,
    ProjectsCompleted,
    PerformanceRating,
}

impl Metric {
    fn value(&self, employee: &Employee) -> f64 {
        match self {
            Metric::Salary => employee.salary,
            Metric::ProjectsCompleted => employee.projects_completed as f64,
            Metric::PerformanceRating => employee.performance_rating,
        }
    }

    /// Currency and counts round to whole numbers, ratings to one decimal
    pub fn round(&self, value: f64) -> f64 {
        match self {
            Metric::Salary | Metric::ProjectsCompleted => value.round(),
            Metric::PerformanceRating => round_one_decimal(value),
        }
    }
}

/// Analytics engine over roster snapshots
pub struct AnalyticsEngine {
    /// Named histogram buckets for performance ratings
    rating_buckets: Vec<(String, Bucket)>,
}

impl AnalyticsEngine {
    /// Create engine with the standard rating breakpoints
    pub fn new() -> Self {
        Self::with_buckets(vec![
            Bucket::half_open(0.0, 2.5),
            Bucket::half_open(2.5, 3.5),
            Bucket::half_open(3.5, 4.0),
            Bucket::half_open(4.0, 4.5),
            Bucket::closed(4.5, 5.0),
        ])
    }

    /// Create with custom rating buckets, labelled by their bounds
    pub fn with_buckets(buckets: Vec<Bucket>) -> Self {
        Self {
            rating_buckets: buckets.into_iter().map(|b| (b.label(), b)).collect(),
        }
    }

    /// Count records per distinct value of `field`, in first-seen order
    pub fn group_count(&self, roster: &Roster, field: GroupField) -> Vec<GroupCount> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<GroupCount> = Vec::new();

        for employee in roster.employees() {
            let category = field.value(employee);
            match index.get(category) {
                Some(&slot) => groups[slot].count += 1,
                None => {
                    index.insert(category, groups.len());
                    groups.push(GroupCount {
                        category: category.to_string(),
                        count: 1,
                    });
                }
            }
        }

        groups
    }

    /// Per-department average and total of `metric`, in first-seen order
    pub fn average_by_department(&self, roster: &Roster, metric: Metric) -> Vec<GroupAverage> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut sums: Vec<(&str, f64, usize)> = Vec::new();

        for employee in roster.employees() {
            let department = employee.department.as_str();
            let value = metric.value(employee);
            match index.get(department) {
                Some(&slot) => {
                    sums[slot].1 += value;
                    sums[slot].2 += 1;
                }
                None => {
                    index.insert(department, sums.len());
                    sums.push((department, value, 1));
                }
            }
        }

        sums.into_iter()
            .map(|(department, total, count)| GroupAverage {
                department: department.to_string(),
                average: metric.round(mean(total, count)),
                total,
            })
            .collect()
    }

    /// Count ratings per bucket; values outside every bucket are skipped
    pub fn rating_histogram(&self, roster: &Roster) -> Vec<BucketCount> {
        self.rating_buckets
            .iter()
            .map(|(name, bucket)| BucketCount {
                name: name.clone(),
                bucket: *bucket,
                count: roster
                    .employees()
                    .iter()
                    .filter(|e| bucket.contains(e.performance_rating))
                    .count(),
            })
            .collect()
    }

    /// Headline numbers for the summary cards
    pub fn summary(&self, roster: &Roster) -> SummaryStats {
        let employees = roster.employees();
        let total = employees.len();
        let salary_sum: f64 = employees.iter().map(|e| e.salary).sum();
        let rating_sum: f64 = employees.iter().map(|e| e.performance_rating).sum();

        SummaryStats {
            total_employees: total,
            active_employees: employees.iter().filter(|e| e.is_active).count(),
            avg_salary: Metric::Salary.round(mean(salary_sum, total)),
            avg_performance_rating: Metric::PerformanceRating.round(mean(rating_sum, total)),
            total_departments: self.group_count(roster, GroupField::Department).len(),
        }
    }

    /// Every dataset behind the analytics view
    pub fn report(&self, roster: &Roster) -> AnalyticsReport {
        component_debug!(Component::Analytics, "📊 Aggregating {} employees", roster.len());

        AnalyticsReport {
            summary: self.summary(roster),
            department_distribution: self.group_count(roster, GroupField::Department),
            location_distribution: self.group_count(roster, GroupField::Location),
            salary_by_department: self.average_by_department(roster, Metric::Salary),
            projects_by_department: self.average_by_department(roster, Metric::ProjectsCompleted),
            rating_by_department: self.average_by_department(roster, Metric::PerformanceRating),
            performance_distribution: self.rating_histogram(roster),
        }
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean that is 0 for an empty set
fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
