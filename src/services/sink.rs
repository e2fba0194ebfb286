//! The notification sink boundary.
//!
//! Delivery transport (push, email, persisted inbox) lives outside this
//! subsystem; the dispatcher only sees this trait.

use async_trait::async_trait;

use crate::error::DispatchResult;
use crate::models::NotificationKind;

/// External delivery capability consumed by the fan-out dispatcher.
///
/// One call per send instruction, best effort, never retried here. A
/// rejected delivery is reported as `DispatchError::Delivery`.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send(
        &self,
        recipient_id: &str,
        message: &str,
        kind: NotificationKind,
        title: &str,
    ) -> DispatchResult<()>;
}
