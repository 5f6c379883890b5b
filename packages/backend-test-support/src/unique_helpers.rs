//! Unique test data so repeated runs never share dedup keys.

use ulid::Ulid;

/// A fresh scorecard id, e.g. `sc-01HF...`.
///
/// ```
/// use fee_forwarder_test_support::unique_helpers::unique_scorecard_id;
///
/// assert_ne!(unique_scorecard_id(), unique_scorecard_id());
/// assert!(unique_scorecard_id().starts_with("sc-"));
/// ```
pub fn unique_scorecard_id() -> String {
    format!("sc-{}", Ulid::new())
}
