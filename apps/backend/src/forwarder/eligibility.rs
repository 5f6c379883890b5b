use std::fmt;

use crate::domain::{InboundPayload, Round};

/// Tenant whose rounds are charged a new round fee. Every other entity is
/// turned away regardless of the rest of the payload.
pub const ORGANIZATION_ENTITY_ID: &str = "adceb3ea-52b8-4fa9-8279-633beca45417";

/// Only rounds submitted from the mobile app are charged.
pub const MOBILE_APP_SOURCE: &str = "mobile_app";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotNewRoundFee,
    MissingRound,
    ForeignEntity,
    UnsupportedSource,
}

impl RejectReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotNewRoundFee => "not_new_round_fee",
            Self::MissingRound => "missing_round",
            Self::ForeignEntity => "foreign_entity",
            Self::UnsupportedSource => "unsupported_source",
        }
    }
}

/// Why a payload was not forwarded, plus the round id when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    reason: RejectReason,
    round_id: Option<i64>,
}

impl Rejection {
    fn new(reason: RejectReason, round: Option<&Round>) -> Self {
        Self {
            reason,
            round_id: round.map(|r| r.id),
        }
    }

    pub fn reason(&self) -> RejectReason {
        self.reason
    }

    pub fn round_id(&self) -> Option<i64> {
        self.round_id
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.round_id {
            Some(id) => write!(f, "Unable to send round {id}")?,
            None => write!(f, "Unable to send unknown round")?,
        }
        write!(f, " to transaction queue for processing new round fee")
    }
}

/// A round that passed the gate, with the scorecard id it will be keyed on.
#[derive(Debug, Clone, Copy)]
pub struct EligibleRound<'a> {
    pub round: &'a Round,
    pub scorecard_id: &'a str,
}

/// Evaluate the gate in order, stopping at the first failed clause:
/// new-round-fee flag, round present, organization tenant, then mobile
/// source. The scorecard id is not part of the gate.
pub fn check_eligibility(payload: &InboundPayload) -> Result<EligibleRound<'_>, Rejection> {
    let round = payload.round.as_ref();

    if !payload.is_new_round_fee {
        return Err(Rejection::new(RejectReason::NotNewRoundFee, round));
    }

    let Some(round) = round else {
        return Err(Rejection::new(RejectReason::MissingRound, None));
    };

    if round.entity_id.as_deref() != Some(ORGANIZATION_ENTITY_ID) {
        return Err(Rejection::new(RejectReason::ForeignEntity, Some(round)));
    }

    if payload.source.as_deref() != Some(MOBILE_APP_SOURCE) {
        return Err(Rejection::new(RejectReason::UnsupportedSource, Some(round)));
    }

    Ok(EligibleRound {
        round,
        scorecard_id: round.scorecard_id(),
    })
}
