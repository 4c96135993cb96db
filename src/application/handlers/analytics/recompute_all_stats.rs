//! RecomputeAllStatsHandler - Batch recomputation of every MP's statistics.

use std::sync::Arc;

use super::ComputeStatsHandler;
use crate::ports::{AnalyticsError, StatsRepository, VoteReader};

/// Command to recompute the statistics of every MP.
#[derive(Debug, Clone, Default)]
pub struct RecomputeAllStatsCommand;

/// Number of statistics rows written.
pub type RecomputeAllStatsResult = usize;

/// Handler recomputing all MPs one after another.
///
/// Stops at the first store failure; rows already written stay written.
pub struct RecomputeAllStatsHandler {
    votes: Arc<dyn VoteReader>,
    compute: ComputeStatsHandler,
}

impl RecomputeAllStatsHandler {
    pub fn new(votes: Arc<dyn VoteReader>, stats: Arc<dyn StatsRepository>) -> Self {
        let compute = ComputeStatsHandler::new(votes.clone(), stats);
        Self { votes, compute }
    }

    pub async fn handle(
        &self,
        _cmd: RecomputeAllStatsCommand,
    ) -> Result<RecomputeAllStatsResult, AnalyticsError> {
        let mp_ids = self.votes.list_mp_ids().await?;
        let mut written = 0;

        for mp_id in mp_ids {
            // Deleted between listing and loading.
            let Some(mp) = self.votes.find_mp(mp_id).await? else {
                continue;
            };
            self.compute.compute_for(&mp).await?;
            written += 1;
        }

        tracing::info!(written, "Recomputed statistics for all MPs");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::fixtures;
    use crate::domain::parliament::VoteValue;

    #[tokio::test]
    async fn writes_one_row_per_mp() {
        let store = fixtures::parliament();
        fixtures::vote(&store, 1, 1, VoteValue::For, 1);
        let handler = RecomputeAllStatsHandler::new(store.clone(), store.clone());

        let written = handler.handle(RecomputeAllStatsCommand).await.unwrap();

        assert_eq!(written, 4);
        assert_eq!(store.stats_count(), 4);
    }

    #[tokio::test]
    async fn running_twice_is_idempotent() {
        let store = fixtures::parliament();
        let handler = RecomputeAllStatsHandler::new(store.clone(), store.clone());

        handler.handle(RecomputeAllStatsCommand).await.unwrap();
        handler.handle(RecomputeAllStatsCommand).await.unwrap();

        assert_eq!(store.stats_count(), 4);
    }

    #[tokio::test]
    async fn store_failure_aborts_the_batch() {
        let store = fixtures::parliament();
        store.set_unavailable(true);
        let handler = RecomputeAllStatsHandler::new(store.clone(), store.clone());

        let result = handler.handle(RecomputeAllStatsCommand).await;

        assert!(matches!(result, Err(AnalyticsError::StoreUnavailable(_))));
    }
}
