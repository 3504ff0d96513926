//! # Observable Resource State
//!
//! `ResourceState<T>` is what consumers read: the loaded collection, the last item
//! fetched by id, and the loading / error / success flags. The actor is the only
//! writer; every change is published on a `tokio::sync::watch` channel.

use crate::entity::Operation;

/// Where a resource's state machine currently sits.
///
/// `Idle → Loading → {Success | Error} → Idle`: the outcome persists until the
/// next operation begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Snapshot of one resource's client-side state.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub selected: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            loading: false,
            error: None,
            success: None,
        }
    }
}

impl<T> ResourceState<T> {
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.success.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    pub(crate) fn begin(&mut self, op: Operation) {
        self.loading = true;
        self.error = None;
        if op.is_mutation() {
            self.success = None;
        }
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.error = Some(message);
    }

    pub(crate) fn settle(&mut self) {
        self.loading = false;
    }
}
