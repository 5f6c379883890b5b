use std::sync::Mutex;

use async_trait::async_trait;
use fee_forwarder::servicebus::{QueueError, QueueMessage, QueueTransport};

/// In-memory stand-in for the transaction queue. Records every send
/// attempt; optionally fails each one with a broker status.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<(String, QueueMessage)>>,
    reject_with_status: Option<u16>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send fails as if the broker answered with `status`.
    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_with_status: Some(status),
            ..Self::default()
        }
    }

    /// Attempts in order, as `(queue, message)`.
    pub fn sent(&self) -> Vec<(String, QueueMessage)> {
        self.sent.lock().expect("transport lock poisoned").clone()
    }
}

#[async_trait]
impl QueueTransport for RecordingTransport {
    async fn send(&self, queue: &str, message: &QueueMessage) -> Result<(), QueueError> {
        self.sent
            .lock()
            .expect("transport lock poisoned")
            .push((queue.to_string(), message.clone()));

        match self.reject_with_status {
            Some(status) => Err(QueueError::Rejected {
                status,
                body: "SharedAccessKey=should-never-leak".to_string(),
            }),
            None => Ok(()),
        }
    }
}
