//! Aggregation engine tests


use dashboard::core::GroupField;
use dashboard::{AnalyticsEngine, Roster};
use fixtures::*;

#[test]
fn test_histogram_scenario() {
    let roster = create_test_roster(&[
        ("Sales", 1.0, 2.0),
        ("Sales", 1.0, 3.6),
        ("Sales", 1.0, 4.2),
        ("Sales", 1.0, 4.8),
    ]);

    let counts: Vec<usize> = AnalyticsEngine::new()
        .rating_histogram(&roster)
        .iter()
        .map(|b| b.count)
        .collect();
    assert_eq!(counts, vec![1, 0, 1, 1, 1]);
}

#[test]
fn test_bucket_edges() {
    // 2.5 opens the second bucket; 5.0 closes the last one
    let roster = create_test_roster(&[("HR", 1.0, 2.5), ("HR", 1.0, 5.0), ("HR", 1.0, 4.0)]);
    let counts: Vec<usize> = AnalyticsEngine::new()
        .rating_histogram(&roster)
        .iter()
        .map(|b| b.count)
        .collect();
    assert_eq!(counts, vec![0, 1, 0, 1, 1]);
}

#[test]
fn test_sample_histogram_accounts_for_everyone() {
    let roster = sample_roster();
    let histogram = AnalyticsEngine::new().rating_histogram(&roster);

    let counts: Vec<usize> = histogram.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![1, 2, 4, 4, 4]);
    assert_eq!(counts.iter().sum::<usize>(), roster.len());
}

#[test]
fn test_department_counts_sum_to_total() {
    let engine = AnalyticsEngine::new();
    let rosters = vec![
        Roster::empty(),
        sample_roster(),
        create_test_roster(&[("A", 1.0, 3.0), ("B", 1.0, 3.0), ("A", 1.0, 3.0)]),
    ];

    for roster in rosters {
        for field in [GroupField::Department, GroupField::Location] {
            let total: usize = engine.group_count(&roster, field).iter().map(|g| g.count).sum();
            assert_eq!(total, roster.len());
        }
    }
}

#[test]
fn test_department_distribution_in_first_seen_order() {
    let distribution = AnalyticsEngine::new().group_count(&sample_roster(), GroupField::Department);
    let pairs: Vec<(&str, usize)> = distribution.iter().map(|g| (g.category.as_str(), g.count)).collect();
    assert_eq!(
        pairs,
        vec![("Engineering", 4), ("Marketing", 3), ("Sales", 3), ("HR", 2), ("Finance", 3)]
    );
}

#[test]
fn test_summary_for_sample_roster() {
    let summary = AnalyticsEngine::new().summary(&sample_roster());

    assert_eq!(summary.total_employees, 15);
    assert_eq!(summary.active_employees, 13);
    assert_eq!(summary.total_departments, 5);
    // 1_504_000 / 15
    assert_eq!(summary.avg_salary, 100267.0);
}

#[test]
fn test_empty_roster_report_has_no_nan() {
    let report = AnalyticsEngine::new().report(&Roster::empty());

    assert_eq!(report.summary.total_employees, 0);
    assert_eq!(report.summary.avg_salary, 0.0);
    assert_eq!(report.summary.avg_performance_rating, 0.0);
    assert!(report.department_distribution.is_empty());
    assert!(report.salary_by_department.is_empty());
    assert_eq!(report.performance_distribution.len(), 5);
    assert!(report.performance_distribution.iter().all(|b| b.count == 0));
}

#[test]
fn test_report_serializes_with_camel_case_keys() {
    let report = AnalyticsEngine::new().report(&sample_roster());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["summary"]["totalEmployees"], 15);
    assert!(json["salaryByDepartment"].is_array());
    assert!(json["performanceDistribution"].is_array());
}
