//! Table view engine
//!
//! Search, department filter, stable sort and pagination over a borrowed
//! roster. Pure: the same roster and view state always give the same page.

use shared::{Component, Employee, component_debug};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::core::roster::Roster;
use crate::types::{SortDirection, SortKey, TablePage, ViewState};

/// Produce the visible page for `state`
pub fn view(roster: &Roster, state: &ViewState) -> TablePage {
    let matched = filter_and_sort(roster, state);
    let page_size = state.effective_page_size();
    let page = state.effective_page();

    let total_matched = matched.len();
    let total_pages = total_matched.div_ceil(page_size).max(1);

    let start = (page - 1).saturating_mul(page_size).min(total_matched);
    let end = page.saturating_mul(page_size).min(total_matched);
    let rows: Vec<Employee> = matched[start..end].iter().map(|e| (*e).clone()).collect();

    component_debug!(
        Component::TableView,
        "📋 Page {}/{}: {} of {} matched rows (search={:?}, department={}, sort={} {:?})",
        page,
        total_pages,
        rows.len(),
        total_matched,
        state.search,
        state.department,
        state.sort_field,
        state.sort_direction
    );

    TablePage {
        rows,
        total_matched,
        total_pages,
        page: state.page,
    }
}

/// Every record matching the filters, in display order
pub fn filter_and_sort<'a>(roster: &'a Roster, state: &ViewState) -> Vec<&'a Employee> {
    let needle = state.search.to_lowercase();

    let mut matched: Vec<&Employee> = roster
        .employees()
        .iter()
        .filter(|e| matches_search(e, &needle))
        .filter(|e| state.department.matches(&e.department))
        .collect();

    // sort_by is stable; equal keys keep roster order in both directions
    matched.sort_by(|a, b| {
        let ordering = compare_keys(state.sort_field.key(a), state.sort_field.key(b));
        match state.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    matched
}

/// Case-insensitive substring test over the searchable text fields.
///
/// `needle` must already be lowercase; an empty needle matches everything.
pub fn matches_search(employee: &Employee, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        &employee.first_name,
        &employee.last_name,
        &employee.email,
        &employee.department,
        &employee.position,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Distinct departments present in the roster, alphabetically
pub fn departments(roster: &Roster) -> Vec<String> {
    roster
        .employees()
        .iter()
        .map(|e| e.department.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn compare_keys(a: SortKey<'_>, b: SortKey<'_>) -> Ordering {
    match (a, b) {
        (SortKey::Text(a), SortKey::Text(b)) => compare_text(a, b),
        (SortKey::Integer(a), SortKey::Integer(b)) => a.cmp(&b),
        (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(&b),
        // a field always yields the same key kind
        _ => Ordering::Equal,
    }
}

/// Collation-style text ordering: case-insensitive first, lowercase before
/// uppercase when the letters agree.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            })
            .unwrap_or(Ordering::Equal)
    })
}
