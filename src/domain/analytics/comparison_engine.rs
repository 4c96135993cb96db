//! Comparison Engine - head-to-head voting comparison of two MPs.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BillId, MpId, Percentage, Timestamp};
use crate::domain::parliament::{MpVoteRecord, VoteValue};

/// A bill on which both MPs voted, but differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disagreement {
    pub bill_id: BillId,
    pub bill_title: String,
    pub mp1_vote: VoteValue,
    pub mp2_vote: VoteValue,
    pub voted_at: Timestamp,
}

/// Outcome of comparing two MPs' voting records.
///
/// `agreement_score` is `None` exactly when the MPs share no cast votes,
/// which is a valid "no overlap" result and not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub mp1: MpId,
    pub mp2: MpId,
    pub common_votes: u32,
    pub has_overlap: bool,
    pub agreement_score: Option<Percentage>,
    pub disagreements: Vec<Disagreement>,
}

/// Engine comparing two MPs' vote histories.
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Compares the cast votes of two MPs on the bills they both voted on.
    ///
    /// Absences never count towards the common votes. Disagreements are
    /// ordered most recent first, ties broken by bill id ascending; the
    /// timestamp reported is the later of the two votes.
    pub fn compare(
        mp1: MpId,
        mp1_votes: &[MpVoteRecord],
        mp2: MpId,
        mp2_votes: &[MpVoteRecord],
    ) -> ComparisonResult {
        let first = Self::cast_by_bill(mp1_votes);
        let second = Self::cast_by_bill(mp2_votes);

        let mut common_votes = 0u32;
        let mut agreed = 0u32;
        let mut disagreements = Vec::new();

        for (bill_id, left) in &first {
            let Some(right) = second.get(bill_id) else {
                continue;
            };
            common_votes += 1;
            if left.vote_value == right.vote_value {
                agreed += 1;
            } else {
                disagreements.push(Disagreement {
                    bill_id: *bill_id,
                    bill_title: left.bill_title.clone(),
                    mp1_vote: left.vote_value,
                    mp2_vote: right.vote_value,
                    voted_at: left.voted_at.max(right.voted_at),
                });
            }
        }

        disagreements.sort_by(Self::most_recent_first);

        let agreement_score = Percentage::from_ratio(u64::from(agreed), u64::from(common_votes));

        ComparisonResult {
            mp1,
            mp2,
            common_votes,
            has_overlap: common_votes > 0,
            agreement_score,
            disagreements,
        }
    }

    /// Latest cast vote per bill.
    fn cast_by_bill(votes: &[MpVoteRecord]) -> BTreeMap<BillId, &MpVoteRecord> {
        let mut by_bill: BTreeMap<BillId, &MpVoteRecord> = BTreeMap::new();
        for vote in votes.iter().filter(|v| v.vote_value.is_cast()) {
            by_bill
                .entry(vote.bill_id)
                .and_modify(|existing| {
                    if vote.voted_at > existing.voted_at {
                        *existing = vote;
                    }
                })
                .or_insert(vote);
        }
        by_bill
    }

    fn most_recent_first(a: &Disagreement, b: &Disagreement) -> Ordering {
        b.voted_at
            .cmp(&a.voted_at)
            .then_with(|| a.bill_id.cmp(&b.bill_id))
    }
}
