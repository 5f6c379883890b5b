use serde::Serialize;

use super::eligibility::EligibleRound;
use crate::domain::Round;
use crate::error::AppError;
use crate::servicebus::QueueMessage;

pub const TASK_TYPE: &str = "calc_round_fee";
pub const DEDUP_SUFFIX: &str = "new-round-fee";

/// Body placed on the transaction queue for the fee calculator.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutboundMessage<'a> {
    pub token_cost: i32,
    pub task_type: &'static str,
    /// Filled in downstream once a transaction exists.
    pub transaction_id: &'static str,
    pub entity_id: Option<&'a str>,
    pub golfer_id: Option<&'a str>,
    pub golfer_email: Option<&'a str>,
    pub golfer_first_name: Option<&'a str>,
    pub golfer_last_name: Option<&'a str>,
    pub round: &'a Round,
}

impl<'a> OutboundMessage<'a> {
    pub fn for_round(token_cost: i32, round: &'a Round) -> Self {
        Self {
            token_cost,
            task_type: TASK_TYPE,
            transaction_id: "",
            entity_id: round.entity_id.as_deref(),
            golfer_id: round.golfer_id.as_deref(),
            golfer_email: round.golfer_email.as_deref(),
            golfer_first_name: round.golfer_first_name.as_deref(),
            golfer_last_name: round.golfer_last_name.as_deref(),
            round,
        }
    }
}

/// Duplicate-detection id for a round's new round fee. The queue drops any
/// message whose id it has already seen, so this must depend on the
/// scorecard id alone.
pub fn dedup_key(scorecard_id: &str) -> String {
    format!("{scorecard_id}/{DEDUP_SUFFIX}")
}

/// Serialize the outbound body and pair it with its dedup key.
pub fn build_queue_message(
    token_cost: i32,
    eligible: &EligibleRound<'_>,
) -> Result<QueueMessage, AppError> {
    let body = serde_json::to_string(&OutboundMessage::for_round(token_cost, eligible.round))?;
    Ok(QueueMessage::new(body, dedup_key(eligible.scorecard_id)))
}
