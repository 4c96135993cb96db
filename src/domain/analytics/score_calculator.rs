//! Score Calculator - per-MP accountability statistics.
//!
//! Derives attendance, party loyalty, sponsorship counts and the blended
//! accountability score from an MP's vote history.
//!
//! # Formula
//!
//! ```text
//! votingAttendance    = cast votes / recorded votes × 100
//! partyLoyalty        = votes matching party majority / cast votes × 100
//! accountabilityScore = 0.6 × votingAttendance + 0.4 × partyLoyalty
//! ```
//!
//! An MP with no cast votes scores zero on all three percentages.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::majority::VoteTally;
use crate::domain::foundation::{BillId, MpId, Percentage, Timestamp};
use crate::domain::parliament::{MpVoteRecord, PartyMemberVote, Sponsorship};

/// Weight of attendance in the accountability score, in percent.
pub const ATTENDANCE_WEIGHT: u16 = 60;

/// Weight of party loyalty in the accountability score, in percent.
pub const LOYALTY_WEIGHT: u16 = 40;

/// Derived statistics for one MP. One row per MP, replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MpStats {
    pub mp_id: MpId,
    pub voting_attendance: Percentage,
    pub party_loyalty: Percentage,
    pub bills_proposed: u32,
    pub bills_passed: u32,
    pub accountability_score: Percentage,
    pub last_calculated: Timestamp,
}

impl MpStats {
    /// Compares every figure except `last_calculated`.
    pub fn same_figures(&self, other: &MpStats) -> bool {
        self.mp_id == other.mp_id
            && self.voting_attendance == other.voting_attendance
            && self.party_loyalty == other.party_loyalty
            && self.bills_proposed == other.bills_proposed
            && self.bills_passed == other.bills_passed
            && self.accountability_score == other.accountability_score
    }
}

/// Everything the calculator needs about one MP.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    /// The MP's full recorded history, absences included.
    pub votes: &'a [MpVoteRecord],
    /// Votes of the MP's party colleagues (the MP included) on those bills.
    /// Empty for independents.
    pub party_votes: &'a [PartyMemberVote],
    pub sponsorships: &'a [Sponsorship],
}

/// Calculator for per-MP accountability statistics.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Computes the full statistics row for an MP.
    pub fn compute(mp_id: MpId, inputs: ScoreInputs<'_>, calculated_at: Timestamp) -> MpStats {
        let recorded = inputs.votes.len() as u64;
        let cast: Vec<&MpVoteRecord> = inputs
            .votes
            .iter()
            .filter(|v| v.vote_value.is_cast())
            .collect();

        let voting_attendance = Percentage::from_ratio_or_zero(cast.len() as u64, recorded);
        let party_loyalty = Self::party_loyalty(&cast, inputs.party_votes);
        let accountability_score = Self::accountability_score(voting_attendance, party_loyalty);
        let (bills_proposed, bills_passed) = Self::sponsorship_counts(inputs.sponsorships);

        MpStats {
            mp_id,
            voting_attendance,
            party_loyalty,
            bills_proposed,
            bills_passed,
            accountability_score,
            last_calculated: calculated_at,
        }
    }

    /// Blends attendance and loyalty with the fixed 60/40 weighting.
    pub fn accountability_score(attendance: Percentage, loyalty: Percentage) -> Percentage {
        Percentage::blend(attendance, ATTENDANCE_WEIGHT, loyalty, LOYALTY_WEIGHT)
    }

    /// Share of cast votes that matched the party majority on that bill.
    ///
    /// A bill with no party majority (independents, or no colleague data)
    /// counts as a non-matching vote.
    fn party_loyalty(cast: &[&MpVoteRecord], party_votes: &[PartyMemberVote]) -> Percentage {
        let mut tallies: BTreeMap<BillId, VoteTally> = BTreeMap::new();
        for vote in party_votes {
            tallies.entry(vote.bill_id).or_default().record(vote.vote_value);
        }

        let matching = cast
            .iter()
            .filter(|vote| {
                tallies
                    .get(&vote.bill_id)
                    .and_then(VoteTally::majority)
                    .map_or(false, |majority| majority == vote.vote_value)
            })
            .count();

        Percentage::from_ratio_or_zero(matching as u64, cast.len() as u64)
    }

    /// Counts distinct sponsored bills and how many of them passed.
    fn sponsorship_counts(sponsorships: &[Sponsorship]) -> (u32, u32) {
        let mut proposed = BTreeSet::new();
        let mut passed = BTreeSet::new();
        for sponsorship in sponsorships {
            proposed.insert(sponsorship.bill_id);
            if sponsorship.bill_status.is_passed() {
                passed.insert(sponsorship.bill_id);
            }
        }
        (proposed.len() as u32, passed.len() as u32)
    }
}

#[cfg(test)]
#[path = "score_calculator_test.rs"]
mod score_calculator_test;
