//! Admission gate — a process-wide cap on concurrent web-search calls.
//!
//! One gate is created at startup and shared by every request, so the cap
//! holds across concurrent analyses. Waiters are admitted in FIFO order
//! (`tokio::sync::Semaphore` is fair). A slot is held by a [`GatePermit`] and
//! given back when the permit is dropped, whatever path the holder exits by.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

#[derive(Debug, Error)]
#[error("admission gate is closed")]
pub struct GateClosed;

#[derive(Debug, Clone)]
pub struct AdmissionGate {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

/// Holds one slot of an [`AdmissionGate`] until dropped.
#[derive(Debug)]
pub struct GatePermit {
    _permit: OwnedSemaphorePermit,
}

impl AdmissionGate {
    /// A capacity of zero would block forever, so it is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Waits for a free slot.
    pub async fn acquire(&self) -> Result<GatePermit, GateClosed> {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| GateClosed)?;
        Ok(GatePermit { _permit: permit })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}
