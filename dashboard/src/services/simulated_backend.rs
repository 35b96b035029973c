//! Fixed-latency backend standing in for a real storage service
//!
//! Every call waits out the configured delay and then succeeds.

use async_trait::async_trait;
use shared::{Component, Employee, EmployeeId, component_debug};
use std::time::Duration;

use crate::error::DashboardResult;
use crate::traits::RosterBackend;

/// Latency applied when none is configured
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Backend that only simulates network latency
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn round_trip(&self, operation: &str, id: EmployeeId) {
        component_debug!(
            Component::Store,
            "⏳ Simulating {} for employee {} ({}ms)",
            operation,
            id,
            self.latency.as_millis()
        );
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RosterBackend for SimulatedBackend {
    async fn create(&self, employee: &Employee) -> DashboardResult<()> {
        self.round_trip("create", employee.id).await;
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> DashboardResult<()> {
        self.round_trip("update", employee.id).await;
        Ok(())
    }

    async fn delete(&self, id: EmployeeId) -> DashboardResult<()> {
        self.round_trip("delete", id).await;
        Ok(())
    }
}
