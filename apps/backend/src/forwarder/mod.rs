//! The new-round-fee gate: decide whether a submission is chargeable and,
//! if so, put exactly one keyed message on the transaction queue.
//!
//! Nothing is kept between calls. Duplicate submissions are collapsed by
//! the queue using the message id, not here.

pub mod eligibility;
pub mod message;

pub use eligibility::{
    check_eligibility, EligibleRound, RejectReason, Rejection, MOBILE_APP_SOURCE,
    ORGANIZATION_ENTITY_ID,
};
pub use message::{build_queue_message, dedup_key, OutboundMessage, DEDUP_SUFFIX, TASK_TYPE};

use crate::config::ForwarderConfig;
use crate::domain::InboundPayload;
use crate::error::AppError;
use crate::logging::events;
use crate::servicebus::QueueTransport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// Accepted by the queue; carries the round's internal id.
    Forwarded { round_id: i64 },
    /// Turned away by the gate. Nothing was sent.
    Rejected(Rejection),
}

/// Gate `payload` and, when eligible, send its fee message to the
/// configured queue. Transport failures are returned as errors and are
/// not retried.
pub async fn forward(
    payload: &InboundPayload,
    config: &ForwarderConfig,
    transport: &dyn QueueTransport,
) -> Result<ForwardOutcome, AppError> {
    let eligible = match check_eligibility(payload) {
        Ok(eligible) => eligible,
        Err(rejection) => {
            events::round_rejected(&rejection);
            return Ok(ForwardOutcome::Rejected(rejection));
        }
    };

    if eligible.scorecard_id.trim().is_empty() {
        events::scorecard_missing(eligible.round.id);
    }

    let message = build_queue_message(payload.token_cost, &eligible)?;

    if let Err(err) = transport.send(&config.queue_name, &message).await {
        events::queue_send_failed(&config.queue_name, &message.message_id, &err);
        return Err(err.into());
    }

    let round = eligible.round;
    events::round_forwarded(round.id, &message.message_id, round.golfer_email.as_deref());

    Ok(ForwardOutcome::Forwarded { round_id: round.id })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::Round;
    use crate::servicebus::{Credential, QueueError, QueueMessage, ServiceBusConnection};

    #[derive(Default)]
    struct StubTransport {
        sent: Mutex<Vec<(String, QueueMessage)>>,
        fail: bool,
    }

    #[async_trait]
    impl QueueTransport for StubTransport {
        async fn send(&self, queue: &str, message: &QueueMessage) -> Result<(), QueueError> {
            if self.fail {
                return Err(QueueError::Transport("connection refused".to_string()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((queue.to_string(), message.clone()));
            Ok(())
        }
    }

    fn config() -> ForwarderConfig {
        ForwarderConfig::new(
            ServiceBusConnection {
                host: "sogo.servicebus.windows.net".to_string(),
                credential: Credential::Signature("token".to_string()),
            },
            "transactions",
        )
    }

    fn payload() -> InboundPayload {
        InboundPayload {
            is_new_round_fee: true,
            token_cost: 5,
            source: Some(MOBILE_APP_SOURCE.to_string()),
            round: Some(Round {
                id: 77,
                entity_id: Some(ORGANIZATION_ENTITY_ID.to_string()),
                third_party_scorecard_id: Some("123543234".to_string()),
                ..Round::default()
            }),
        }
    }

    #[tokio::test]
    async fn test_forwards_eligible_round() {
        let transport = StubTransport::default();
        let outcome = forward(&payload(), &config(), &transport).await.unwrap();

        assert_eq!(outcome, ForwardOutcome::Forwarded { round_id: 77 });
        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "transactions");
        assert_eq!(sent[0].1.message_id, "123543234/new-round-fee");
    }

    #[tokio::test]
    async fn test_rejection_sends_nothing() {
        let transport = StubTransport::default();
        let mut payload = payload();
        payload.is_new_round_fee = false;

        let outcome = forward(&payload, &config(), &transport).await.unwrap();
        assert!(matches!(outcome, ForwardOutcome::Rejected(_)));
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_scorecard_forwarded_with_bare_key() {
        let transport = StubTransport::default();
        let mut payload = payload();
        payload.round.as_mut().unwrap().third_party_scorecard_id = None;

        let outcome = forward(&payload, &config(), &transport).await.unwrap();
        assert_eq!(outcome, ForwardOutcome::Forwarded { round_id: 77 });
        assert_eq!(
            transport.sent.lock().unwrap()[0].1.message_id,
            "/new-round-fee"
        );
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let transport = StubTransport {
            fail: true,
            ..StubTransport::default()
        };
        let err = forward(&payload(), &config(), &transport).await.unwrap_err();
        assert!(matches!(err, AppError::Queue { .. }));
    }
}
