use chrono::{TimeZone, Utc};

use super::*;
use crate::domain::foundation::MpId;

fn party(id: i64) -> PartyId {
    PartyId::new(id).unwrap()
}

fn month(m: u32) -> Timestamp {
    Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, m, 1, 9, 0, 0).unwrap())
}

fn vote(bill: i64, party_id: i64, mp: i64, value: VoteValue, at: Timestamp) -> PartyMemberVote {
    PartyMemberVote {
        bill_id: BillId::new(bill).unwrap(),
        party_id: party(party_id),
        mp_id: MpId::new(mp).unwrap(),
        vote_value: value,
        voted_at: at,
    }
}

fn window(min_shared_bills: u32, limit: usize) -> CoalitionWindow {
    CoalitionWindow {
        since: month(1),
        min_shared_bills,
        limit,
    }
}

fn named(id: i64, name: &str) -> Party {
    Party {
        id: party(id),
        name: name.to_string(),
        short_name: name[..1].to_string(),
    }
}

#[test]
fn single_shared_bill_with_matching_majorities_is_full_agreement() {
    // Party X: majority "for" on bill 10.
    // Party Y: majority "for" on bill 10, majority "against" on bill 11.
    let votes = vec![
        vote(10, 1, 1, VoteValue::For, month(3)),
        vote(10, 1, 2, VoteValue::For, month(3)),
        vote(10, 2, 3, VoteValue::For, month(3)),
        vote(10, 2, 4, VoteValue::Against, month(3)),
        vote(10, 2, 5, VoteValue::For, month(3)),
        vote(11, 2, 3, VoteValue::Against, month(4)),
        vote(11, 2, 4, VoteValue::Against, month(4)),
    ];

    let pairs = CoalitionAggregator::aggregate(&votes, window(1, 10));

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].party_a, party(1));
    assert_eq!(pairs[0].party_b, party(2));
    assert_eq!(pairs[0].shared_bills, 1);
    assert_eq!(pairs[0].agreement_pct, Percentage::HUNDRED);
}

#[test]
fn min_shared_bills_filters_small_overlaps() {
    let mut votes = Vec::new();
    for bill in 1..=3 {
        votes.push(vote(bill, 1, 1, VoteValue::For, month(2)));
        votes.push(vote(bill, 2, 2, VoteValue::For, month(2)));
    }

    assert!(CoalitionAggregator::aggregate(&votes, window(5, 10)).is_empty());
    assert_eq!(CoalitionAggregator::aggregate(&votes, window(3, 10)).len(), 1);
}

#[test]
fn votes_before_window_are_ignored() {
    let votes = vec![
        vote(1, 1, 1, VoteValue::For, month(1)),
        vote(1, 2, 2, VoteValue::Against, month(1)),
        vote(2, 1, 1, VoteValue::For, month(6)),
        vote(2, 2, 2, VoteValue::For, month(6)),
    ];
    let recent = CoalitionWindow {
        since: month(3),
        min_shared_bills: 1,
        limit: 10,
    };

    let pairs = CoalitionAggregator::aggregate(&votes, recent);

    assert_eq!(pairs[0].shared_bills, 1);
    assert_eq!(pairs[0].agreement_pct, Percentage::HUNDRED);
}

#[test]
fn absent_only_party_does_not_share_the_bill() {
    let votes = vec![
        vote(1, 1, 1, VoteValue::For, month(2)),
        vote(1, 2, 2, VoteValue::Absent, month(2)),
    ];
    assert!(CoalitionAggregator::aggregate(&votes, window(1, 10)).is_empty());
}

#[test]
fn tied_party_vote_resolves_to_for() {
    let votes = vec![
        vote(1, 1, 1, VoteValue::For, month(2)),
        vote(1, 1, 2, VoteValue::Against, month(2)),
        vote(1, 2, 3, VoteValue::For, month(2)),
    ];
    let pairs = CoalitionAggregator::aggregate(&votes, window(1, 10));
    assert_eq!(pairs[0].agreement_pct, Percentage::HUNDRED);
}

#[test]
fn pairs_sorted_by_agreement_and_capped() {
    let mut votes = Vec::new();
    // Parties 1 and 2 agree on both bills, party 3 agrees with them on one.
    for bill in 1..=2 {
        votes.push(vote(bill, 1, 1, VoteValue::For, month(2)));
        votes.push(vote(bill, 2, 2, VoteValue::For, month(2)));
    }
    votes.push(vote(1, 3, 3, VoteValue::For, month(2)));
    votes.push(vote(2, 3, 3, VoteValue::Against, month(2)));

    let pairs = CoalitionAggregator::aggregate(&votes, window(1, 10));
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0].agreement_pct, Percentage::HUNDRED);
    assert_eq!((pairs[0].party_a, pairs[0].party_b), (party(1), party(2)));
    assert_eq!(pairs[1].agreement_pct.value(), 50.0);
    assert_eq!((pairs[1].party_a, pairs[1].party_b), (party(1), party(3)));
    assert_eq!((pairs[2].party_a, pairs[2].party_b), (party(2), party(3)));

    let capped = CoalitionAggregator::aggregate(&votes, window(1, 1));
    assert_eq!(capped.len(), 1);
}

#[test]
fn matrix_is_symmetric_with_full_diagonal() {
    let pairs = vec![
        CoalitionPair {
            party_a: party(1),
            party_b: party(2),
            shared_bills: 4,
            agreement_pct: Percentage::from_f64(75.0),
        },
        CoalitionPair {
            party_a: party(2),
            party_b: party(3),
            shared_bills: 4,
            agreement_pct: Percentage::from_f64(25.0),
        },
    ];
    let parties = vec![named(3, "Greens"), named(1, "Labour"), named(2, "Liberals"), named(4, "Other")];

    let matrix = CoalitionMatrix::from_pairs(&parties, &pairs);

    assert_eq!(matrix.parties.len(), 3);
    assert_eq!(matrix.parties[0].id, party(1));
    assert_eq!(matrix.get(party(1), party(2)), matrix.get(party(2), party(1)));
    assert_eq!(matrix.get(party(3), party(2)).unwrap().value(), 25.0);
    assert_eq!(matrix.get(party(1), party(1)), Some(Percentage::HUNDRED));
    assert_eq!(matrix.get(party(1), party(3)), None);
    assert_eq!(matrix.get(party(4), party(1)), None);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn value_strategy() -> impl Strategy<Value = VoteValue> {
        prop_oneof![
            Just(VoteValue::For),
            Just(VoteValue::Against),
            Just(VoteValue::Abstain),
            Just(VoteValue::Absent),
        ]
    }

    proptest! {
        #[test]
        fn agreement_in_range_and_matrix_symmetric(
            raw in proptest::collection::vec((1i64..8, 1i64..5, 1i64..20, value_strategy()), 0..120),
        ) {
            let votes: Vec<_> = raw
                .iter()
                .map(|(b, p, m, v)| vote(*b, *p, *m, *v, month(6)))
                .collect();
            let pairs = CoalitionAggregator::aggregate(&votes, window(1, 100));

            for pair in &pairs {
                prop_assert!(pair.party_a < pair.party_b);
                prop_assert!(pair.shared_bills >= 1);
                prop_assert!(pair.agreement_pct <= Percentage::HUNDRED);
            }

            let parties: Vec<_> = (1..5).map(|id| named(id, "Party")).collect();
            let matrix = CoalitionMatrix::from_pairs(&parties, &pairs);
            for a in &matrix.parties {
                for b in &matrix.parties {
                    prop_assert_eq!(matrix.get(a.id, b.id), matrix.get(b.id, a.id));
                }
            }
        }
    }
}
