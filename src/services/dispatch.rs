//! Concurrent fan-out of send instructions against the notification sink.

use std::sync::Arc;

use chrono::Utc;
use futures_util::future::join_all;
use uuid::Uuid;

use crate::models::{DispatchSummary, SendInstruction, SendOutcome};
use crate::services::sink::NotificationSink;

/// Executes all instructions concurrently and joins every outcome.
///
/// One sink call is spawned per instruction, in planner order; completion
/// order is up to the sink. An individual failure (or panic) is recorded
/// in its own outcome and never cancels or taints sibling sends. Returns
/// only after every call has resolved, so a dispatch cycle has a
/// well-defined end for observability.
pub async fn fan_out(
    sink: Arc<dyn NotificationSink>,
    instructions: Vec<SendInstruction>,
) -> DispatchSummary {
    let cycle_id = Uuid::new_v4();
    let started_at = Utc::now();
    let attempted = instructions.len();

    let mut recipients = Vec::with_capacity(attempted);
    let mut handles = Vec::with_capacity(attempted);
    for instruction in instructions {
        recipients.push((instruction.recipient_id.clone(), instruction.kind));
        let sink = Arc::clone(&sink);
        handles.push(tokio::spawn(async move {
            sink.send(
                &instruction.recipient_id,
                &instruction.message,
                instruction.kind,
                &instruction.title,
            )
            .await
        }));
    }

    let results = join_all(handles).await;

    let outcomes: Vec<SendOutcome> = recipients
        .into_iter()
        .zip(results)
        .map(|((recipient_id, kind), result)| {
            let error = match result {
                Ok(Ok(())) => None,
                Ok(Err(e)) => {
                    log::warn!(
                        "Dispatch {}: send to '{}' failed: {}",
                        cycle_id,
                        recipient_id,
                        e
                    );
                    Some(e.to_string())
                }
                Err(join_error) => {
                    log::error!(
                        "Dispatch {}: send task for '{}' panicked: {}",
                        cycle_id,
                        recipient_id,
                        join_error
                    );
                    Some(format!("Send task panicked: {}", join_error))
                }
            };
            SendOutcome {
                recipient_id,
                kind,
                error,
            }
        })
        .collect();

    let succeeded = outcomes.iter().filter(|o| o.delivered()).count();

    let summary = DispatchSummary {
        cycle_id,
        attempted,
        succeeded,
        started_at,
        completed_at: Utc::now(),
        outcomes,
    };

    log::info!(
        "Dispatch {} completed: {}/{} sends delivered",
        cycle_id,
        summary.succeeded,
        summary.attempted
    );

    summary
}
