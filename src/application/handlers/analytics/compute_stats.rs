//! ComputeStatsHandler - Command handler recomputing one MP's statistics.
//!
//! Loads the MP's vote history, the party colleagues' votes on the same
//! bills and the MP's sponsorships, runs the score calculator and upserts
//! the resulting row.

use std::sync::Arc;

use crate::domain::analytics::{MpStats, ScoreCalculator, ScoreInputs};
use crate::domain::foundation::{BillId, MpId, Timestamp};
use crate::domain::parliament::Mp;
use crate::ports::{AnalyticsError, StatsRepository, VoteReader};

/// Command to recompute the statistics of one MP.
#[derive(Debug, Clone)]
pub struct ComputeStatsCommand {
    pub mp_id: MpId,
}

/// Result of a successful recomputation.
pub type ComputeStatsResult = MpStats;

/// Handler for recomputing and storing an MP's statistics.
#[derive(Clone)]
pub struct ComputeStatsHandler {
    votes: Arc<dyn VoteReader>,
    stats: Arc<dyn StatsRepository>,
}

impl ComputeStatsHandler {
    pub fn new(votes: Arc<dyn VoteReader>, stats: Arc<dyn StatsRepository>) -> Self {
        Self { votes, stats }
    }

    pub async fn handle(
        &self,
        cmd: ComputeStatsCommand,
    ) -> Result<ComputeStatsResult, AnalyticsError> {
        let mp = self
            .votes
            .find_mp(cmd.mp_id)
            .await?
            .ok_or(AnalyticsError::MpNotFound(cmd.mp_id))?;

        self.compute_for(&mp).await
    }

    /// Computes and stores the statistics of an MP already known to exist.
    pub(crate) async fn compute_for(&self, mp: &Mp) -> Result<MpStats, AnalyticsError> {
        let votes = self.votes.votes_for_mp(mp.id).await?;

        let party_votes = match mp.party_id {
            Some(party_id) => {
                let bill_ids: Vec<BillId> = votes
                    .iter()
                    .filter(|v| v.vote_value.is_cast())
                    .map(|v| v.bill_id)
                    .collect();
                self.votes.party_votes_on_bills(party_id, &bill_ids).await?
            }
            None => Vec::new(),
        };

        let sponsorships = self.votes.sponsorships_for_mp(mp.id).await?;

        let stats = ScoreCalculator::compute(
            mp.id,
            ScoreInputs {
                votes: &votes,
                party_votes: &party_votes,
                sponsorships: &sponsorships,
            },
            Timestamp::now(),
        );

        self.stats.upsert(&stats).await?;

        tracing::debug!(
            mp_id = %mp.id,
            attendance = %stats.voting_attendance,
            loyalty = %stats.party_loyalty,
            score = %stats.accountability_score,
            "Recomputed MP statistics"
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryParliamentStore;
    use crate::application::handlers::fixtures::{self, mp};
    use crate::domain::foundation::Percentage;
    use crate::domain::parliament::VoteValue;

    fn handler(store: &Arc<InMemoryParliamentStore>) -> ComputeStatsHandler {
        ComputeStatsHandler::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn computes_and_stores_party_member_stats() {
        let store = fixtures::parliament();
        // MP 1 votes on bills 1, 2 and is absent on 3; colleague MP 2 votes
        // for on everything so the party majority on a 1-1 split is `for`.
        fixtures::vote(&store, 1, 1, VoteValue::For, 3);
        fixtures::vote(&store, 1, 2, VoteValue::Against, 2);
        fixtures::vote(&store, 1, 3, VoteValue::Absent, 1);
        fixtures::vote(&store, 2, 1, VoteValue::For, 3);
        fixtures::vote(&store, 2, 2, VoteValue::For, 2);

        let stats = handler(&store)
            .handle(ComputeStatsCommand { mp_id: mp(1) })
            .await
            .unwrap();

        assert_eq!(stats.voting_attendance.tenths(), 667);
        assert_eq!(stats.party_loyalty, Percentage::from_f64(50.0));
        assert_eq!(stats.bills_proposed, 2);
        assert_eq!(stats.bills_passed, 1);
        assert_eq!(store.stats_count(), 1);
        assert_eq!(store.find(mp(1)).await.unwrap(), Some(stats));
    }

    #[tokio::test]
    async fn mp_without_votes_scores_zero() {
        let store = fixtures::parliament();

        let stats = handler(&store)
            .handle(ComputeStatsCommand { mp_id: mp(3) })
            .await
            .unwrap();

        assert_eq!(stats.voting_attendance, Percentage::ZERO);
        assert_eq!(stats.party_loyalty, Percentage::ZERO);
        assert_eq!(stats.accountability_score, Percentage::ZERO);
    }

    #[tokio::test]
    async fn independent_has_zero_loyalty() {
        let store = fixtures::parliament();
        fixtures::vote(&store, 4, 1, VoteValue::For, 1);

        let stats = handler(&store)
            .handle(ComputeStatsCommand { mp_id: mp(4) })
            .await
            .unwrap();

        assert_eq!(stats.voting_attendance, Percentage::HUNDRED);
        assert_eq!(stats.party_loyalty, Percentage::ZERO);
        assert_eq!(stats.accountability_score, Percentage::from_f64(60.0));
    }

    #[tokio::test]
    async fn recomputing_twice_keeps_one_row_with_same_figures() {
        let store = fixtures::parliament();
        fixtures::vote(&store, 1, 1, VoteValue::For, 1);
        let handler = handler(&store);

        let first = handler.handle(ComputeStatsCommand { mp_id: mp(1) }).await.unwrap();
        let second = handler.handle(ComputeStatsCommand { mp_id: mp(1) }).await.unwrap();

        assert!(first.same_figures(&second));
        assert_eq!(store.stats_count(), 1);
    }

    #[tokio::test]
    async fn unknown_mp_is_not_found() {
        let store = fixtures::parliament();

        let result = handler(&store)
            .handle(ComputeStatsCommand { mp_id: mp(99) })
            .await;

        assert!(matches!(result, Err(AnalyticsError::MpNotFound(id)) if id == mp(99)));
        assert_eq!(store.stats_count(), 0);
    }

    #[tokio::test]
    async fn unavailable_store_is_reported() {
        let store = fixtures::parliament();
        store.set_unavailable(true);

        let result = handler(&store)
            .handle(ComputeStatsCommand { mp_id: mp(1) })
            .await;

        assert!(matches!(result, Err(AnalyticsError::StoreUnavailable(_))));
    }
}
