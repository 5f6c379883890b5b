//! Request bodies for the `SendToTransactionQueue` endpoint.

use serde_json::{json, Value};

/// The one organization whose rounds are charged.
pub const ORG_ENTITY_ID: &str = "adceb3ea-52b8-4fa9-8279-633beca45417";

/// A round record as the mobile app sends it.
pub fn round_json(scorecard_id: &str) -> Value {
    json!({
        "Id": 77,
        "EntityId": ORG_ENTITY_ID,
        "ThirdPartyScorecardId": scorecard_id,
        "GolferId": "g1",
        "GolferEmail": "a@b.com",
        "GolferFirstName": "A",
        "GolferLastName": "B"
    })
}

/// A payload that passes every eligibility clause.
pub fn eligible_payload() -> Value {
    json!({
        "IsNewRoundFee": true,
        "TokenCost": 5,
        "Source": "mobile_app",
        "Round": round_json("123543234")
    })
}

/// `eligible_payload()` with `pointer` (JSON Pointer) replaced by `value`.
///
/// Panics if the pointer does not exist; fixtures are test-only.
pub fn eligible_payload_with(pointer: &str, value: Value) -> Value {
    let mut payload = eligible_payload();
    *payload
        .pointer_mut(pointer)
        .unwrap_or_else(|| panic!("fixture has no field at {pointer}")) = value;
    payload
}
