//! Transaction queue transport.
//!
//! The forwarder only sees [`QueueTransport`]; production wires in
//! [`ServiceBusClient`], which speaks the Service Bus REST protocol.

pub mod client;
pub mod connection;
pub mod sas;

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;

pub use client::{ServiceBusClient, ServiceBusSender};
pub use connection::{ConnectionStringError, Credential, ServiceBusConnection};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// One outbound queue message: the serialized body and the id the broker
/// uses for duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueMessage {
    pub body: String,
    pub message_id: String,
}

impl QueueMessage {
    pub fn new(body: String, message_id: String) -> Self {
        Self { body, message_id }
    }

    /// Value of the `BrokerProperties` header carrying the message id.
    pub fn broker_properties(&self) -> String {
        json!({ "MessageId": self.message_id }).to_string()
    }
}

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("broker rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for QueueError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            QueueError::InvalidRequest(e.to_string())
        } else {
            QueueError::Transport(e.to_string())
        }
    }
}

/// Sends one message to a named queue. No retries: a failure is reported
/// to the caller as-is.
#[async_trait]
pub trait QueueTransport: Send + Sync {
    async fn send(&self, queue: &str, message: &QueueMessage) -> Result<(), QueueError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broker_properties_carries_message_id() {
        let message = QueueMessage::new("{}".into(), "123543234/new-round-fee".into());
        let props: serde_json::Value = serde_json::from_str(&message.broker_properties()).unwrap();
        assert_eq!(props["MessageId"], "123543234/new-round-fee");
    }
}
