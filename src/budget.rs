//! Limits for the exponential exact search.
//!
//! Nothing inside the search bounds its runtime, so the caller hands in a `SearchBudget` that
//! the search consults before it starts and then cooperatively between subset evaluations.

use crate::cust_error::{AbortReason, ProcessingError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct SearchBudget {
    deadline: Option<Instant>,
    max_vertices: Option<usize>,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchBudget {

    /// A budget that never aborts.
    pub fn unlimited() -> Self {
        SearchBudget::default()
    }

    /// Aborts once `timeout` has passed, counted from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Refuses to start a search on more than `limit` vertices.
    pub fn with_max_vertices(mut self, limit: usize) -> Self {
        self.max_vertices = Some(limit);
        self
    }

    /// Aborts as soon as `flag` is set, e.g. from another thread or a UI callback.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Checks if a search over `vertices` vertices may start.
    pub fn check_size(&self, vertices: usize) -> Result<(), ProcessingError> {
        match self.max_vertices {
            Some(limit) if vertices > limit => {
                Err(AbortReason::TooManyVertices { vertices, limit }.into())
            },
            _ => Ok(()),
        }
    }

    /// Checks if a running search may continue.
    pub fn check(&self) -> Result<(), ProcessingError> {
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(AbortReason::Cancelled.into())
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(AbortReason::DeadlineExceeded.into())
            }
        }
        Ok(())
    }

}
