use tracing::{debug, error, info, warn};

use crate::forwarder::Rejection;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A round was accepted by the transaction queue.
pub fn round_forwarded(round_id: i64, message_id: &str, golfer_email: Option<&str>) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "ROUND_FEE_FORWARDED",
        %trace_id,
        round_id,
        message_id,
        golfer_email = %Redacted(golfer_email.unwrap_or("")),
        "Placing << MSL >> round in transaction queue to charge a new round fee"
    );
}

/// The eligibility gate turned the round away. Expected traffic, not an error.
pub fn round_rejected(rejection: &Rejection) {
    let trace_id = trace_ctx::trace_id();

    debug!(
        event = "ROUND_FEE_REJECTED",
        %trace_id,
        round_id = ?rejection.round_id(),
        reason = rejection.reason().as_str(),
        "Round not eligible for new round fee"
    );
}

/// An eligible round arrived without a scorecard id. It is still forwarded,
/// but every such round shares the bare `/new-round-fee` message id.
pub fn scorecard_missing(round_id: i64) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "ROUND_SCORECARD_MISSING",
        %trace_id,
        round_id,
        "Round has no third-party scorecard id; duplicate detection key is not unique"
    );
}

/// The queue could not take the message; the caller will see a 500.
pub fn queue_send_failed(queue: &str, message_id: &str, err: &dyn std::fmt::Display) {
    let trace_id = trace_ctx::trace_id();
    let err = err.to_string();

    error!(
        event = "QUEUE_SEND_FAILED",
        %trace_id,
        queue,
        message_id,
        error = %Redacted(&err),
        "Failed to send message to transaction queue"
    );
}
