//! In-memory parliamentary store.
//!
//! Implements every store port over plain collections. Used by the test
//! suites and for running the API locally without PostgreSQL.
//!
//! # Example
//!
//! ```ignore
//! let store = Arc::new(InMemoryParliamentStore::new());
//! store.add_party(party)?;
//! store.add_mp(mp)?;
//! store.record_vote(vote)?;
//!
//! let votes = store.votes_for_mp(mp_id).await?;
//! ```

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::activity::{sort_newest_first, ActivityItem, ActivityKind, ActivityQuery};
use crate::domain::analytics::MpStats;
use crate::domain::foundation::{BillId, MpId, PartyId, Timestamp};
use crate::domain::parliament::{
    Bill, Mp, MpVoteRecord, Party, PartyMemberVote, SponsorRole, Sponsorship, Vote,
};
use crate::ports::{ActivityReader, AnalyticsError, StatsRepository, VoteReader};

#[derive(Default)]
struct StoreData {
    parties: BTreeMap<PartyId, Party>,
    mps: BTreeMap<MpId, Mp>,
    bills: BTreeMap<BillId, Bill>,
    sponsors: Vec<(BillId, MpId, SponsorRole)>,
    /// Votes keyed by their row id, assigned in insertion order.
    votes: BTreeMap<i64, Vote>,
    stats: BTreeMap<MpId, MpStats>,
}

impl StoreData {
    fn party_of(&self, mp_id: MpId) -> Option<PartyId> {
        self.mps.get(&mp_id).and_then(|mp| mp.party_id)
    }

    fn primary_sponsor(&self, bill_id: BillId) -> Option<MpId> {
        self.sponsors
            .iter()
            .find(|(bill, _, role)| *bill == bill_id && *role == SponsorRole::Primary)
            .map(|(_, mp, _)| *mp)
    }

    fn mp_name(&self, mp_id: Option<MpId>) -> Option<String> {
        mp_id.and_then(|id| self.mps.get(&id)).map(|mp| mp.name.clone())
    }

    fn party_member_vote(&self, vote: &Vote) -> Option<PartyMemberVote> {
        self.party_of(vote.mp_id).map(|party_id| PartyMemberVote {
            bill_id: vote.bill_id,
            party_id,
            mp_id: vote.mp_id,
            vote_value: vote.vote_value,
            voted_at: vote.voted_at,
        })
    }

    fn activity(&self) -> Vec<ActivityItem> {
        let votes = self.votes.iter().filter_map(|(id, vote)| {
            let bill = self.bills.get(&vote.bill_id)?;
            Some(ActivityItem {
                kind: ActivityKind::Vote,
                id: *id,
                occurred_at: vote.voted_at,
                mp_id: Some(vote.mp_id),
                mp_name: self.mp_name(Some(vote.mp_id)),
                bill_id: bill.id,
                bill_title: bill.title.clone(),
                vote_value: Some(vote.vote_value),
            })
        });
        let introductions = self.bills.values().map(|bill| {
            let sponsor = self.primary_sponsor(bill.id);
            ActivityItem {
                kind: ActivityKind::BillIntroduced,
                id: bill.id.value(),
                occurred_at: bill.introduced_at,
                mp_id: sponsor,
                mp_name: self.mp_name(sponsor),
                bill_id: bill.id,
                bill_title: bill.title.clone(),
                vote_value: None,
            }
        });
        votes.chain(introductions).collect()
    }
}

/// In-memory implementation of the store ports.
#[derive(Default)]
pub struct InMemoryParliamentStore {
    data: RwLock<StoreData>,
    unavailable: AtomicBool,
}

impl InMemoryParliamentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // === Seeding ===

    /// Adds or replaces a party.
    pub fn add_party(&self, party: Party) -> Result<(), AnalyticsError> {
        self.data_mut()?.parties.insert(party.id, party);
        Ok(())
    }

    /// Adds or replaces an MP.
    pub fn add_mp(&self, mp: Mp) -> Result<(), AnalyticsError> {
        self.data_mut()?.mps.insert(mp.id, mp);
        Ok(())
    }

    /// Adds or replaces a bill.
    pub fn add_bill(&self, bill: Bill) -> Result<(), AnalyticsError> {
        self.data_mut()?.bills.insert(bill.id, bill);
        Ok(())
    }

    /// Registers an MP as sponsor of a bill.
    ///
    /// A bill keeps at most one primary sponsor; a second primary replaces
    /// the first.
    pub fn add_sponsor(
        &self,
        bill_id: BillId,
        mp_id: MpId,
        role: SponsorRole,
    ) -> Result<(), AnalyticsError> {
        let mut data = self.data_mut()?;
        data.sponsors.retain(|(bill, mp, existing)| {
            *bill != bill_id
                || (*mp != mp_id
                    && !(role == SponsorRole::Primary && *existing == SponsorRole::Primary))
        });
        data.sponsors.push((bill_id, mp_id, role));
        Ok(())
    }

    /// Records a vote, replacing an earlier vote of the same MP on the same
    /// bill. Returns the vote's row id.
    pub fn record_vote(&self, vote: Vote) -> Result<i64, AnalyticsError> {
        let mut data = self.data_mut()?;
        let existing = data
            .votes
            .iter()
            .find(|(_, v)| v.bill_id == vote.bill_id && v.mp_id == vote.mp_id)
            .map(|(id, _)| *id);
        let id = existing.unwrap_or_else(|| data.votes.keys().next_back().map_or(1, |last| last + 1));
        data.votes.insert(id, vote);
        Ok(id)
    }

    /// Makes every port call fail with `StoreUnavailable` until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored statistics rows.
    pub fn stats_count(&self) -> usize {
        self.data.read().map(|data| data.stats.len()).unwrap_or(0)
    }

    // === Lock helpers ===

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreData>, AnalyticsError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AnalyticsError::StoreUnavailable(
                "in-memory store marked unavailable".to_string(),
            ));
        }
        self.data
            .read()
            .map_err(|_| AnalyticsError::StoreUnavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreData>, AnalyticsError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AnalyticsError::StoreUnavailable(
                "in-memory store marked unavailable".to_string(),
            ));
        }
        self.data_mut()
    }

    /// Write access for seeding, which ignores the outage switch.
    fn data_mut(&self) -> Result<RwLockWriteGuard<'_, StoreData>, AnalyticsError> {
        self.data
            .write()
            .map_err(|_| AnalyticsError::StoreUnavailable("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl VoteReader for InMemoryParliamentStore {
    async fn find_mp(&self, mp_id: MpId) -> Result<Option<Mp>, AnalyticsError> {
        Ok(self.read()?.mps.get(&mp_id).cloned())
    }

    async fn list_mp_ids(&self) -> Result<Vec<MpId>, AnalyticsError> {
        Ok(self.read()?.mps.keys().copied().collect())
    }

    async fn list_parties(&self) -> Result<Vec<Party>, AnalyticsError> {
        Ok(self.read()?.parties.values().cloned().collect())
    }

    async fn votes_for_mp(&self, mp_id: MpId) -> Result<Vec<MpVoteRecord>, AnalyticsError> {
        let data = self.read()?;
        let mut records: Vec<MpVoteRecord> = data
            .votes
            .values()
            .filter(|vote| vote.mp_id == mp_id)
            .filter_map(|vote| {
                data.bills.get(&vote.bill_id).map(|bill| MpVoteRecord {
                    bill_id: vote.bill_id,
                    bill_title: bill.title.clone(),
                    vote_value: vote.vote_value,
                    voted_at: vote.voted_at,
                })
            })
            .collect();
        records.sort_by(|a, b| b.voted_at.cmp(&a.voted_at).then(a.bill_id.cmp(&b.bill_id)));
        Ok(records)
    }

    async fn party_votes_on_bills(
        &self,
        party_id: PartyId,
        bill_ids: &[BillId],
    ) -> Result<Vec<PartyMemberVote>, AnalyticsError> {
        let data = self.read()?;
        Ok(data
            .votes
            .values()
            .filter(|vote| bill_ids.contains(&vote.bill_id))
            .filter_map(|vote| data.party_member_vote(vote))
            .filter(|vote| vote.party_id == party_id)
            .collect())
    }

    async fn party_votes_since(
        &self,
        since: Timestamp,
    ) -> Result<Vec<PartyMemberVote>, AnalyticsError> {
        let data = self.read()?;
        Ok(data
            .votes
            .values()
            .filter(|vote| vote.voted_at >= since)
            .filter_map(|vote| data.party_member_vote(vote))
            .collect())
    }

    async fn sponsorships_for_mp(&self, mp_id: MpId) -> Result<Vec<Sponsorship>, AnalyticsError> {
        let data = self.read()?;
        Ok(data
            .sponsors
            .iter()
            .filter(|(_, mp, _)| *mp == mp_id)
            .filter_map(|(bill_id, mp, role)| {
                data.bills.get(bill_id).map(|bill| Sponsorship {
                    bill_id: *bill_id,
                    mp_id: *mp,
                    role: *role,
                    bill_status: bill.status,
                })
            })
            .collect())
    }
}

#[async_trait]
impl StatsRepository for InMemoryParliamentStore {
    async fn upsert(&self, stats: &MpStats) -> Result<(), AnalyticsError> {
        self.write()?.stats.insert(stats.mp_id, stats.clone());
        Ok(())
    }

    async fn find(&self, mp_id: MpId) -> Result<Option<MpStats>, AnalyticsError> {
        Ok(self.read()?.stats.get(&mp_id).cloned())
    }
}

#[async_trait]
impl ActivityReader for InMemoryParliamentStore {
    async fn recent_activity(
        &self,
        query: &ActivityQuery,
    ) -> Result<Vec<ActivityItem>, AnalyticsError> {
        let mut items: Vec<ActivityItem> = self
            .read()?
            .activity()
            .into_iter()
            .filter(|item| query.admits(item))
            .collect();
        sort_newest_first(&mut items);
        items.truncate(query.limit);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parliament::{BillStatus, VoteValue};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn at(day: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 4, day, 14, 0, 0).unwrap())
    }

    fn seeded() -> InMemoryParliamentStore {
        let store = InMemoryParliamentStore::new();
        store
            .add_party(Party {
                id: PartyId::new(1).unwrap(),
                name: "Centre Party".to_string(),
                short_name: "CP".to_string(),
            })
            .unwrap();
        store
            .add_mp(Mp {
                id: MpId::new(1).unwrap(),
                name: "Ada Member".to_string(),
                party_id: Some(PartyId::new(1).unwrap()),
            })
            .unwrap();
        store
            .add_mp(Mp {
                id: MpId::new(2).unwrap(),
                name: "Ivan Independent".to_string(),
                party_id: None,
            })
            .unwrap();
        store
            .add_bill(Bill {
                id: BillId::new(10).unwrap(),
                title: "Clean Air Act".to_string(),
                status: BillStatus::Passed,
                introduced_at: at(1),
            })
            .unwrap();
        store
            .add_sponsor(BillId::new(10).unwrap(), MpId::new(1).unwrap(), SponsorRole::Primary)
            .unwrap();
        store
    }

    fn vote(mp: i64, value: VoteValue, day: u32) -> Vote {
        Vote {
            bill_id: BillId::new(10).unwrap(),
            mp_id: MpId::new(mp).unwrap(),
            vote_value: value,
            voted_at: at(day),
        }
    }

    #[tokio::test]
    async fn record_vote_replaces_same_mp_and_bill() {
        let store = seeded();
        let first = store.record_vote(vote(1, VoteValue::For, 2)).unwrap();
        let second = store.record_vote(vote(1, VoteValue::Against, 3)).unwrap();

        assert_eq!(first, second);
        let votes = store.votes_for_mp(MpId::new(1).unwrap()).await.unwrap();
        assert_eq!(votes.len(), 1);
        assert_eq!(votes[0].vote_value, VoteValue::Against);
        assert_eq!(votes[0].bill_title, "Clean Air Act");
    }

    #[test]
    fn seeding_through_a_poisoned_lock_is_an_error() {
        let store = Arc::new(seeded());
        let holder = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.data.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        let vote_result = store.record_vote(vote(1, VoteValue::For, 2));
        let bill_result = store.add_sponsor(
            BillId::new(10).unwrap(),
            MpId::new(2).unwrap(),
            SponsorRole::CoSponsor,
        );

        assert!(matches!(vote_result, Err(AnalyticsError::StoreUnavailable(_))));
        assert!(matches!(bill_result, Err(AnalyticsError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn second_primary_sponsor_replaces_the_first() {
        let store = seeded();
        store
            .add_sponsor(BillId::new(10).unwrap(), MpId::new(2).unwrap(), SponsorRole::Primary)
            .unwrap();

        let query = ActivityQuery {
            mp_id: None,
            after: None,
            limit: 10,
        };
        let items = store.recent_activity(&query).await.unwrap();
        let first = store.sponsorships_for_mp(MpId::new(1).unwrap()).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].mp_id, Some(MpId::new(2).unwrap()));
        assert!(first.is_empty());
    }

    #[tokio::test]
    async fn party_votes_exclude_independents() {
        let store = seeded();
        store.record_vote(vote(1, VoteValue::For, 2)).unwrap();
        store.record_vote(vote(2, VoteValue::For, 2)).unwrap();

        let votes = store.party_votes_since(at(1)).await.unwrap();

        assert_eq!(votes.len(), 1);
        assert_eq!(votes[0].mp_id, MpId::new(1).unwrap());
    }

    #[tokio::test]
    async fn sponsorships_carry_bill_status() {
        let store = seeded();
        let sponsorships = store.sponsorships_for_mp(MpId::new(1).unwrap()).await.unwrap();
        assert_eq!(sponsorships.len(), 1);
        assert_eq!(sponsorships[0].bill_status, BillStatus::Passed);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = seeded();
        store.set_unavailable(true);

        let result = store.find_mp(MpId::new(1).unwrap()).await;

        assert!(matches!(result, Err(AnalyticsError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn activity_merges_votes_and_introductions() {
        let store = seeded();
        store.record_vote(vote(1, VoteValue::For, 2)).unwrap();

        let query = ActivityQuery {
            mp_id: None,
            after: None,
            limit: 10,
        };
        let items = store.recent_activity(&query).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, ActivityKind::Vote);
        assert_eq!(items[1].kind, ActivityKind::BillIntroduced);
        assert_eq!(items[1].mp_name.as_deref(), Some("Ada Member"));
    }
}
