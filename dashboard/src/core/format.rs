//! Display formatting for table cells, cards and exports

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

/// Whole-dollar currency with thousands separators, e.g. `$85,000`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 { format!("-${grouped}") } else { format!("${grouped}") }
}

/// Parse a hire date given as `YYYY-MM-DD` or RFC 3339
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
}

/// `Mar 15, 2021`; blank or unparseable input gives `N/A`
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

pub fn status_label(is_active: bool) -> &'static str {
    if is_active { "Active" } else { "Inactive" }
}

/// Rating band used to color performance bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceTier {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl PerformanceTier {
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.5 {
            PerformanceTier::Excellent
        } else if rating >= 4.0 {
            PerformanceTier::Good
        } else if rating >= 3.5 {
            PerformanceTier::Average
        } else {
            PerformanceTier::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Excellent",
            PerformanceTier::Good => "Good",
            PerformanceTier::Average => "Average",
            PerformanceTier::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(85000.0), "$85,000");
        assert_eq!(format_currency(1234567.4), "$1,234,567");
        assert_eq!(format_currency(999.5), "$1,000");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-2500.0), "-$2,500");
        assert_eq!(format_currency(f64::NAN), "N/A");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2021-03-15"), "Mar 15, 2021");
        assert_eq!(format_date("2019-11-02T09:30:00Z"), "Nov 2, 2019");
        assert_eq!(format_date(""), "N/A");
        assert_eq!(format_date("someday"), "N/A");
    }

    #[test]
    fn test_status_and_name() {
        assert_eq!(status_label(true), "Active");
        assert_eq!(status_label(false), "Inactive");
        assert_eq!(full_name("Ada", "Lovelace"), "Ada Lovelace");
    }

    #[test]
    fn test_performance_tiers() {
        assert_eq!(PerformanceTier::from_rating(4.5), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_rating(4.2), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_rating(3.5), PerformanceTier::Average);
        assert_eq!(PerformanceTier::from_rating(1.0), PerformanceTier::NeedsImprovement);
    }
}
