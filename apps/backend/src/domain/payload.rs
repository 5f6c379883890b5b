use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a `SendToTransactionQueue` request.
///
/// Keys are PascalCase and matched case-sensitively. Absent flags and
/// costs decode to their zero values, matching what the mobile app sends
/// for rounds that carry no fee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundPayload {
    #[serde(default)]
    pub is_new_round_fee: bool,
    #[serde(default)]
    pub token_cost: i32,
    #[serde(default)]
    pub round: Option<Round>,
    #[serde(default)]
    pub source: Option<String>,
}

/// A golf round from a third-party scoring system.
///
/// Only the entity, scorecard and id fields drive any logic; the rest is
/// carried through to the transaction queue untouched. Fields this service
/// does not model are kept in `extra` so the round re-serialises with
/// everything the caller sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Round {
    #[serde(default)]
    pub id: i64,
    pub entity_id: Option<String>,
    pub third_party_scorecard_id: Option<String>,
    pub golfer_id: Option<String>,
    pub golfer_email: Option<String>,
    pub golfer_first_name: Option<String>,
    pub golfer_last_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Round {
    /// Scorecard id exactly as sent, empty when absent.
    pub fn scorecard_id(&self) -> &str {
        self.third_party_scorecard_id.as_deref().unwrap_or("")
    }
}
