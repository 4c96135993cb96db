//! Shared seed data for handler tests.
//!
//! Parties 1 (Red) and 2 (Blue); MPs 1 and 2 sit with Red, MP 3 with Blue,
//! MP 4 is independent. MP 1 is primary sponsor of bill 1 (passed) and
//! co-sponsor of bill 2.

use std::sync::Arc;

use chrono::Duration;

use crate::adapters::memory::InMemoryParliamentStore;
use crate::domain::foundation::{BillId, MpId, PartyId, Timestamp};
use crate::domain::parliament::{Bill, BillStatus, Mp, Party, SponsorRole, Vote, VoteValue};

pub fn mp(id: i64) -> MpId {
    MpId::new(id).unwrap()
}

pub fn party(id: i64) -> PartyId {
    PartyId::new(id).unwrap()
}

pub fn bill(id: i64) -> BillId {
    BillId::new(id).unwrap()
}

pub fn days_ago(days: i64) -> Timestamp {
    Timestamp::from_datetime(*Timestamp::now().as_datetime() - Duration::days(days))
}

pub fn parliament() -> Arc<InMemoryParliamentStore> {
    let store = InMemoryParliamentStore::new();

    for (id, name, short) in [(1, "Red Party", "RED"), (2, "Blue Party", "BLU")] {
        store
            .add_party(Party {
                id: party(id),
                name: name.to_string(),
                short_name: short.to_string(),
            })
            .unwrap();
    }

    for (id, name, party_id) in [
        (1, "Alice Red", Some(1)),
        (2, "Bob Red", Some(1)),
        (3, "Carol Blue", Some(2)),
        (4, "Dan Independent", None),
    ] {
        store
            .add_mp(Mp {
                id: mp(id),
                name: name.to_string(),
                party_id: party_id.map(party),
            })
            .unwrap();
    }

    for (id, title, status, introduced) in [
        (1, "Clean Air Act", BillStatus::Passed, 40),
        (2, "Budget Act", BillStatus::InCommittee, 35),
        (3, "Housing Act", BillStatus::Introduced, 30),
    ] {
        store
            .add_bill(Bill {
                id: bill(id),
                title: title.to_string(),
                status,
                introduced_at: days_ago(introduced),
            })
            .unwrap();
    }

    store.add_sponsor(bill(1), mp(1), SponsorRole::Primary).unwrap();
    store.add_sponsor(bill(2), mp(1), SponsorRole::CoSponsor).unwrap();
    store.add_sponsor(bill(2), mp(3), SponsorRole::Primary).unwrap();

    Arc::new(store)
}

pub fn vote(
    store: &InMemoryParliamentStore,
    mp_id: i64,
    bill_id: i64,
    value: VoteValue,
    age_days: i64,
) -> i64 {
    store
        .record_vote(Vote {
            bill_id: bill(bill_id),
            mp_id: mp(mp_id),
            vote_value: value,
            voted_at: days_ago(age_days),
        })
        .unwrap()
}
