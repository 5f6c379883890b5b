//! Property tests for the eligibility gate and message construction.

mod common;

use fee_forwarder::domain::{InboundPayload, Round};
use fee_forwarder::forwarder::{
    build_queue_message, check_eligibility, RejectReason, MOBILE_APP_SOURCE,
    ORGANIZATION_ENTITY_ID,
};
use proptest::prelude::*;
use serde_json::Value;

fn opt_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[ -~]{0,24}")
}

fn round_strategy() -> impl Strategy<Value = Round> {
    (
        any::<i64>(),
        prop_oneof![
            Just(Some(ORGANIZATION_ENTITY_ID.to_string())),
            opt_text(),
        ],
        "[0-9]{1,12}",
        opt_text(),
        opt_text(),
        opt_text(),
        opt_text(),
    )
        .prop_map(
            |(id, entity_id, scorecard, golfer_id, email, first, last)| Round {
                id,
                entity_id,
                third_party_scorecard_id: Some(scorecard),
                golfer_id,
                golfer_email: email,
                golfer_first_name: first,
                golfer_last_name: last,
                ..Round::default()
            },
        )
}

fn payload_strategy() -> impl Strategy<Value = InboundPayload> {
    (
        any::<bool>(),
        any::<i32>(),
        proptest::option::of(round_strategy()),
        prop_oneof![Just(Some(MOBILE_APP_SOURCE.to_string())), opt_text()],
    )
        .prop_map(|(is_new_round_fee, token_cost, round, source)| InboundPayload {
            is_new_round_fee,
            token_cost,
            round,
            source,
        })
}

/// Force every eligibility clause to hold.
fn make_eligible(mut payload: InboundPayload, round: Round) -> InboundPayload {
    payload.is_new_round_fee = true;
    payload.source = Some(MOBILE_APP_SOURCE.to_string());
    let mut round = round;
    round.entity_id = Some(ORGANIZATION_ENTITY_ID.to_string());
    payload.round = Some(round);
    payload
}

proptest! {
    #![proptest_config(common::proptest_prelude::proptest_prelude_config())]

    #[test]
    fn prop_not_new_round_fee_always_rejected(mut payload in payload_strategy()) {
        payload.is_new_round_fee = false;
        let rejection = check_eligibility(&payload).unwrap_err();
        prop_assert_eq!(rejection.reason(), RejectReason::NotNewRoundFee);
    }

    #[test]
    fn prop_foreign_entity_always_rejected(
        payload in payload_strategy(),
        round in round_strategy(),
        entity in "[a-z0-9-]{1,36}",
    ) {
        prop_assume!(entity != ORGANIZATION_ENTITY_ID);
        let mut payload = make_eligible(payload, round);
        payload.round.as_mut().unwrap().entity_id = Some(entity);
        let rejection = check_eligibility(&payload).unwrap_err();
        prop_assert_eq!(rejection.reason(), RejectReason::ForeignEntity);
    }

    #[test]
    fn prop_non_mobile_source_always_rejected(
        payload in payload_strategy(),
        round in round_strategy(),
        source in opt_text(),
    ) {
        prop_assume!(source.as_deref() != Some(MOBILE_APP_SOURCE));
        let mut payload = make_eligible(payload, round);
        payload.source = source;
        let rejection = check_eligibility(&payload).unwrap_err();
        prop_assert_eq!(rejection.reason(), RejectReason::UnsupportedSource);
    }

    #[test]
    fn prop_key_depends_only_on_scorecard(
        a in payload_strategy(),
        b in payload_strategy(),
        round_a in round_strategy(),
        round_b in round_strategy(),
        scorecard in "[ -~]{0,12}",
    ) {
        let mut a = make_eligible(a, round_a);
        let mut b = make_eligible(b, round_b);
        a.round.as_mut().unwrap().third_party_scorecard_id = Some(scorecard.clone());
        b.round.as_mut().unwrap().third_party_scorecard_id = Some(scorecard.clone());

        let msg_a = build_queue_message(a.token_cost, &check_eligibility(&a).unwrap()).unwrap();
        let msg_b = build_queue_message(b.token_cost, &check_eligibility(&b).unwrap()).unwrap();

        prop_assert_eq!(&msg_a.message_id, &format!("{scorecard}/new-round-fee"));
        prop_assert_eq!(msg_a.message_id, msg_b.message_id);
    }

    #[test]
    fn prop_body_copies_round_fields(payload in payload_strategy(), round in round_strategy()) {
        let payload = make_eligible(payload, round);
        let round = payload.round.clone().unwrap();
        let message =
            build_queue_message(payload.token_cost, &check_eligibility(&payload).unwrap()).unwrap();
        let body: Value = serde_json::from_str(&message.body).unwrap();

        prop_assert_eq!(&body["TaskType"], "calc_round_fee");
        prop_assert_eq!(&body["TransactionId"], "");
        prop_assert_eq!(&body["TokenCost"], &Value::from(payload.token_cost));
        prop_assert_eq!(&body["EntityId"], &Value::from(round.entity_id.clone()));
        prop_assert_eq!(&body["GolferId"], &Value::from(round.golfer_id.clone()));
        prop_assert_eq!(&body["GolferEmail"], &Value::from(round.golfer_email.clone()));
        prop_assert_eq!(&body["GolferFirstName"], &Value::from(round.golfer_first_name.clone()));
        prop_assert_eq!(&body["GolferLastName"], &Value::from(round.golfer_last_name.clone()));

        let echoed: Round = serde_json::from_value(body["Round"].clone()).unwrap();
        prop_assert_eq!(echoed, round);
    }
}
