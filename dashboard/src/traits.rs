//! Service trait definitions for dependency injection
//!
//! The roster store reaches its backend and its seed data only through these
//! traits, so a real storage service can replace the simulated one.

use async_trait::async_trait;
use shared::{Employee, EmployeeId};

use crate::core::Roster;
use crate::error::DashboardResult;

/// Persistence boundary behind the roster store's mutations.
///
/// Each call completes before the store publishes the new snapshot; an error
/// leaves the published snapshot untouched.
#[mockall::automock]
#[async_trait]
pub trait RosterBackend: Send + Sync {
    /// Persist a newly created record
    async fn create(&self, employee: &Employee) -> DashboardResult<()>;

    /// Persist the merged state of an edited record
    async fn update(&self, employee: &Employee) -> DashboardResult<()>;

    /// Delete a record
    async fn delete(&self, id: EmployeeId) -> DashboardResult<()>;
}

/// Source of the roster loaded once at startup
#[mockall::automock]
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Load and validate the seed roster
    async fn load(&self) -> DashboardResult<Roster>;

    /// Human readable origin, used in logs
    fn describe(&self) -> String;
}
