//! Operation interception point.
//!
//! After a business operation completes successfully, the surrounding
//! code hands its result here. Planning and delivery then run on a
//! background task: the operation's own response never waits for, and
//! never fails because of, notification dispatch.

use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinHandle;

use crate::config::DispatchConfig;
use crate::models::DispatchSummary;
use crate::registry::DeclarationRegistry;
use crate::services::dispatch::fan_out;
use crate::services::planner::plan;
use crate::services::sink::NotificationSink;

/// Post-operation dispatch trigger
pub struct NotificationHook {
    registry: Arc<DeclarationRegistry>,
    sink: Arc<dyn NotificationSink>,
    config: DispatchConfig,
}

impl NotificationHook {
    pub fn new(
        registry: Arc<DeclarationRegistry>,
        sink: Arc<dyn NotificationSink>,
        config: DispatchConfig,
    ) -> Self {
        Self {
            registry,
            sink,
            config,
        }
    }

    /// Starts a dispatch cycle for a completed operation.
    ///
    /// Returns `None` when the operation has no declaration (nothing
    /// happens), otherwise `Some` handle to the spawned cycle. Callers do
    /// not await the handle on their critical path; it exists so shutdown
    /// code and tests can observe outstanding cycles deterministically. A
    /// started cycle runs to completion even if the handle is dropped.
    /// Failures inside the cycle end in log lines, never in the caller.
    pub fn operation_completed(
        &self,
        operation: &str,
        result: Value,
        actor_id: Option<String>,
    ) -> Option<JoinHandle<DispatchSummary>> {
        let declaration = match self.registry.get(operation) {
            Some(declaration) => declaration,
            None => {
                log::debug!("No notification declaration for operation '{}'", operation);
                return None;
            }
        };

        let sink = Arc::clone(&self.sink);
        let config = self.config.clone();
        let operation = operation.to_string();

        Some(tokio::spawn(async move {
            let instructions = plan(&result, &declaration, actor_id.as_deref(), &config);
            log::debug!(
                "Operation '{}' planned {} notification(s)",
                operation,
                instructions.len()
            );

            let summary = fan_out(sink, instructions).await;
            if summary.failed() > 0 {
                log::warn!(
                    "Operation '{}': {} of {} notification(s) failed",
                    operation,
                    summary.failed(),
                    summary.attempted
                );
            }
            summary
        }))
    }
}
