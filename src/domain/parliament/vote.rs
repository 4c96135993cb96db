//! Recorded vote rows as the analytics engine consumes them.
//!
//! The store hands out two projections of the `votes` table: an MP's own
//! history joined with bill titles, and per-member rows tagged with the
//! member's party for party-level aggregation.

use serde::{Deserialize, Serialize};

use super::VoteValue;
use crate::domain::foundation::{BillId, MpId, PartyId, Timestamp};

/// A single MP's vote on a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub bill_id: BillId,
    pub mp_id: MpId,
    pub vote_value: VoteValue,
    pub voted_at: Timestamp,
}

/// A vote from an MP's history, joined with the bill title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MpVoteRecord {
    pub bill_id: BillId,
    pub bill_title: String,
    pub vote_value: VoteValue,
    pub voted_at: Timestamp,
}

/// A member's vote tagged with the party they sit with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyMemberVote {
    pub bill_id: BillId,
    pub party_id: PartyId,
    pub mp_id: MpId,
    pub vote_value: VoteValue,
    pub voted_at: Timestamp,
}
