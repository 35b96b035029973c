//! Test helper utilities for dashboard integration tests

use dashboard::{Roster, RosterStore, SimulatedBackend, TablePage, ViewState, view};
use shared::EmployeeId;
use std::time::Duration;

/// Store whose backend answers immediately
pub fn create_instant_store(roster: Roster) -> RosterStore<SimulatedBackend> {
    RosterStore::new(roster, SimulatedBackend::with_latency(Duration::ZERO))
}

pub fn page_ids(page: &TablePage) -> Vec<u64> {
    page.rows.iter().map(|e| e.id.0).collect()
}

/// Walk pages 1..=total_pages and concatenate their ids
pub fn collect_all_pages(roster: &Roster, state: &ViewState) -> Vec<EmployeeId> {
    let total_pages = view(roster, state).total_pages;
    (1..=total_pages)
        .flat_map(|page| view(roster, &state.clone().with_page(page)).rows)
        .map(|e| e.id)
        .collect()
}
