//! Coalition Aggregator - pairwise party voting agreement.
//!
//! For every bill in the window, each party's position is the majority of
//! its members' cast votes. Two parties "share" a bill when both have a
//! position on it, and "agree" when those positions match.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::majority::VoteTally;
use crate::domain::foundation::{BillId, PartyId, Percentage, Timestamp};
use crate::domain::parliament::{Party, PartyMemberVote, VoteValue};

/// Agreement between two parties over a time window.
///
/// Pairs are normalised so that `party_a < party_b`; the relation is
/// symmetric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoalitionPair {
    pub party_a: PartyId,
    pub party_b: PartyId,
    pub shared_bills: u32,
    pub agreement_pct: Percentage,
}

/// Parameters of a voting-together query, already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoalitionWindow {
    pub since: Timestamp,
    pub min_shared_bills: u32,
    pub limit: usize,
}

/// Aggregator for party-level voting agreement.
pub struct CoalitionAggregator;

impl CoalitionAggregator {
    /// Computes agreement pairs from member votes.
    ///
    /// Votes before `window.since` are ignored. Pairs sharing fewer than
    /// `min_shared_bills` bills are dropped. The result is sorted by
    /// agreement descending, then shared bills descending, then party ids,
    /// and capped at `window.limit`.
    pub fn aggregate(votes: &[PartyMemberVote], window: CoalitionWindow) -> Vec<CoalitionPair> {
        let positions = Self::party_positions(votes, window.since);

        let mut counters: BTreeMap<(PartyId, PartyId), (u32, u32)> = BTreeMap::new();
        for parties in positions.values() {
            let parties: Vec<(&PartyId, &VoteValue)> = parties.iter().collect();
            for (i, (party_a, value_a)) in parties.iter().enumerate() {
                for (party_b, value_b) in &parties[i + 1..] {
                    let counter = counters.entry((**party_a, **party_b)).or_default();
                    counter.0 += 1;
                    if value_a == value_b {
                        counter.1 += 1;
                    }
                }
            }
        }

        let mut pairs: Vec<CoalitionPair> = counters
            .into_iter()
            .filter(|(_, (shared, _))| *shared >= window.min_shared_bills)
            .filter_map(|((party_a, party_b), (shared, agreed))| {
                Percentage::from_ratio(u64::from(agreed), u64::from(shared)).map(|pct| {
                    CoalitionPair {
                        party_a,
                        party_b,
                        shared_bills: shared,
                        agreement_pct: pct,
                    }
                })
            })
            .collect();

        pairs.sort_by(|a, b| {
            b.agreement_pct
                .cmp(&a.agreement_pct)
                .then_with(|| b.shared_bills.cmp(&a.shared_bills))
                .then_with(|| (a.party_a, a.party_b).cmp(&(b.party_a, b.party_b)))
        });
        pairs.truncate(window.limit);
        pairs
    }

    /// Majority position of every party on every bill in the window.
    ///
    /// The inner map is ordered by party id, which keeps pair keys
    /// normalised (`party_a < party_b`).
    fn party_positions(
        votes: &[PartyMemberVote],
        since: Timestamp,
    ) -> BTreeMap<BillId, BTreeMap<PartyId, VoteValue>> {
        let mut tallies: BTreeMap<(BillId, PartyId), VoteTally> = BTreeMap::new();
        for vote in votes.iter().filter(|v| v.voted_at >= since) {
            tallies
                .entry((vote.bill_id, vote.party_id))
                .or_default()
                .record(vote.vote_value);
        }

        let mut positions: BTreeMap<BillId, BTreeMap<PartyId, VoteValue>> = BTreeMap::new();
        for ((bill_id, party_id), tally) in tallies {
            if let Some(majority) = tally.majority() {
                positions.entry(bill_id).or_default().insert(party_id, majority);
            }
        }
        positions
    }
}

/// Symmetric agreement matrix over the parties of a coalition query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoalitionMatrix {
    pub parties: Vec<Party>,
    /// `cells[i][j]` is the agreement of `parties[i]` with `parties[j]`;
    /// `None` where the pair was not part of the result.
    pub cells: Vec<Vec<Option<Percentage>>>,
}

impl CoalitionMatrix {
    /// Builds the matrix for every party appearing in `pairs`.
    ///
    /// Parties are ordered by id. Diagonal cells are 100; `(A, B)` and
    /// `(B, A)` always hold the same value.
    pub fn from_pairs(parties: &[Party], pairs: &[CoalitionPair]) -> Self {
        let mut members: Vec<Party> = parties
            .iter()
            .filter(|party| {
                pairs
                    .iter()
                    .any(|pair| pair.party_a == party.id || pair.party_b == party.id)
            })
            .cloned()
            .collect();
        members.sort_by_key(|party| party.id);
        members.dedup_by_key(|party| party.id);

        let index: BTreeMap<PartyId, usize> = members
            .iter()
            .enumerate()
            .map(|(i, party)| (party.id, i))
            .collect();

        let size = members.len();
        let mut cells = vec![vec![None; size]; size];
        for (i, row) in cells.iter_mut().enumerate() {
            row[i] = Some(Percentage::HUNDRED);
        }
        for pair in pairs {
            if let (Some(&a), Some(&b)) = (index.get(&pair.party_a), index.get(&pair.party_b)) {
                cells[a][b] = Some(pair.agreement_pct);
                cells[b][a] = Some(pair.agreement_pct);
            }
        }

        Self {
            parties: members,
            cells,
        }
    }

    /// Looks up the agreement between two parties.
    pub fn get(&self, first: PartyId, second: PartyId) -> Option<Percentage> {
        let a = self.parties.iter().position(|p| p.id == first)?;
        let b = self.parties.iter().position(|p| p.id == second)?;
        self.cells[a][b]
    }
}

#[cfg(test)]
#[path = "coalition_aggregator_test.rs"]
mod coalition_aggregator_test;
