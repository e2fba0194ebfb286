//! Ephemeral dispatch models: send instructions and per-cycle outcomes.
//!
//! Everything here is created inside one dispatch cycle and discarded
//! afterwards; nothing is persisted by this subsystem.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::declaration::NotificationKind;

/// One fully-resolved notification, ready to hand to the sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendInstruction {
    pub recipient_id: String,
    pub message: String,
    pub title: String,
    pub kind: NotificationKind,
}

/// Outcome of a single send attempt
#[derive(Debug, Clone, Serialize)]
pub struct SendOutcome {
    pub recipient_id: String,
    pub kind: NotificationKind,
    /// Failure reason; `None` means delivered
    pub error: Option<String>,
}

impl SendOutcome {
    pub fn delivered(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate result of one dispatch cycle
///
/// Suitable for logging or metrics emission; `outcomes` preserves the
/// planner's issue order.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchSummary {
    /// Correlation id shared by all log lines of this cycle
    pub cycle_id: Uuid,
    pub attempted: usize,
    pub succeeded: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub outcomes: Vec<SendOutcome>,
}

impl DispatchSummary {
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }
}
