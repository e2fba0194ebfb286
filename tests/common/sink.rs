//! Notification sink test doubles

use std::sync::Mutex;

use async_trait::async_trait;

use notifan::error::{DispatchError, DispatchResult};
use notifan::models::NotificationKind;
use notifan::services::NotificationSink;

/// One send as observed by a test sink
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSend {
    pub recipient_id: String,
    pub message: String,
    pub title: String,
    pub kind: NotificationKind,
}

/// Records every send; optionally rejects configured recipients
pub struct RecordingSink {
    sent: Mutex<Vec<RecordedSend>>,
    fail_recipients: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_recipients: Vec::new(),
        }
    }

    /// A sink that rejects deliveries to the given recipients
    pub fn failing_for(recipients: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_recipients: recipients.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn recorded(&self) -> Vec<RecordedSend> {
        self.sent.lock().expect("sink lock poisoned").clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn send(
        &self,
        recipient_id: &str,
        message: &str,
        kind: NotificationKind,
        title: &str,
    ) -> DispatchResult<()> {
        self.sent.lock().expect("sink lock poisoned").push(RecordedSend {
            recipient_id: recipient_id.to_string(),
            message: message.to_string(),
            title: title.to_string(),
            kind,
        });

        if self.fail_recipients.iter().any(|r| r == recipient_id) {
            return Err(DispatchError::Delivery(format!(
                "recipient '{}' rejected",
                recipient_id
            )));
        }

        Ok(())
    }
}

/// Panics when asked to deliver to the given recipient
pub struct PanickingSink {
    panic_recipient: String,
}

impl PanickingSink {
    pub fn for_recipient(recipient: &str) -> Self {
        Self {
            panic_recipient: recipient.to_string(),
        }
    }
}

#[async_trait]
impl NotificationSink for PanickingSink {
    async fn send(
        &self,
        recipient_id: &str,
        _message: &str,
        _kind: NotificationKind,
        _title: &str,
    ) -> DispatchResult<()> {
        if recipient_id == self.panic_recipient {
            panic!("sink blew up for '{}'", recipient_id);
        }
        Ok(())
    }
}
