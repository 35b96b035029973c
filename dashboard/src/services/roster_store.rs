//! Roster store: the single owner of the current roster snapshot
//!
//! Readers take `Arc<Roster>` snapshots or subscribe to the watch channel.
//! Writers are serialized; each mutation computes the next snapshot, waits
//! for the backend, then publishes. A failed step publishes nothing.

use shared::{Component, Employee, EmployeeId, EmployeePatch, component_error, component_info, component_warn};
use std::sync::Arc;
use tokio::sync::{Mutex, watch};

use crate::core::Roster;
use crate::error::{DashboardError, DashboardResult};
use crate::traits::RosterBackend;

pub struct RosterStore<B: RosterBackend> {
    backend: B,
    snapshot: watch::Sender<Arc<Roster>>,
    /// Held across a whole mutation so concurrent writers cannot lose updates
    write_lock: Mutex<()>,
}

impl<B: RosterBackend> RosterStore<B> {
    pub fn new(initial: Roster, backend: B) -> Self {
        let (snapshot, _) = watch::channel(Arc::new(initial));
        Self {
            backend,
            snapshot,
            write_lock: Mutex::new(()),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<Roster> {
        self.snapshot.borrow().clone()
    }

    /// Receiver notified after every successful mutation
    pub fn subscribe(&self) -> watch::Receiver<Arc<Roster>> {
        self.snapshot.subscribe()
    }

    /// Create a record from `draft`; the id is assigned here
    pub async fn add(&self, draft: EmployeePatch) -> DashboardResult<Employee> {
        let _guard = self.write_lock.lock().await;
        let current = self.snapshot();

        let (next, added) = current.with_added(draft).inspect_err(|e| {
            component_warn!(Component::Store, "⚠️ Add rejected: {}", e);
        })?;
        self.backend.create(&added).await.inspect_err(|e| log_backend_failure("create", e))?;

        self.publish(next);
        component_info!(Component::Store, "➕ Added employee {} ({})", added.id, added.full_name());
        Ok(added)
    }

    /// Merge `patch` over the record with `id`
    pub async fn update(&self, id: EmployeeId, patch: &EmployeePatch) -> DashboardResult<Employee> {
        let _guard = self.write_lock.lock().await;
        let current = self.snapshot();

        let (next, updated) = current.with_updated(id, patch).inspect_err(|e| {
            component_warn!(Component::Store, "⚠️ Update of employee {} rejected: {}", id, e);
        })?;
        self.backend.update(&updated).await.inspect_err(|e| log_backend_failure("update", e))?;

        self.publish(next);
        component_info!(Component::Store, "✏️ Updated employee {}", id);
        Ok(updated)
    }

    /// Remove the record with `id`
    pub async fn remove(&self, id: EmployeeId) -> DashboardResult<Employee> {
        let _guard = self.write_lock.lock().await;
        let current = self.snapshot();

        let (next, removed) = current.without(id).inspect_err(|e| {
            component_warn!(Component::Store, "⚠️ Removal of employee {} rejected: {}", id, e);
        })?;
        self.backend.delete(id).await.inspect_err(|e| log_backend_failure("delete", e))?;

        self.publish(next);
        component_info!(Component::Store, "🗑️ Removed employee {} ({})", id, removed.full_name());
        Ok(removed)
    }

    fn publish(&self, next: Roster) {
        // send_replace succeeds even with no live receivers
        self.snapshot.send_replace(Arc::new(next));
    }
}

fn log_backend_failure(operation: &str, error: &DashboardError) {
    component_error!(Component::Store, "❌ Backend {} failed, snapshot kept: {}", operation, error);
}
