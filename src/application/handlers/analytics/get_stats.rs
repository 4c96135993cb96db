//! GetStatsHandler - Query handler for an MP's stored statistics.
//!
//! Serves the stored row; an MP whose statistics were never computed gets
//! them computed and stored on first request.

use std::sync::Arc;

use super::ComputeStatsHandler;
use crate::domain::analytics::MpStats;
use crate::domain::foundation::MpId;
use crate::ports::{AnalyticsError, StatsRepository, VoteReader};

/// Query for one MP's statistics.
#[derive(Debug, Clone)]
pub struct GetStatsQuery {
    pub mp_id: MpId,
}

/// Result of a successful statistics query.
pub type GetStatsResult = MpStats;

/// Handler for reading an MP's statistics.
pub struct GetStatsHandler {
    votes: Arc<dyn VoteReader>,
    stats: Arc<dyn StatsRepository>,
    compute: ComputeStatsHandler,
}

impl GetStatsHandler {
    pub fn new(votes: Arc<dyn VoteReader>, stats: Arc<dyn StatsRepository>) -> Self {
        let compute = ComputeStatsHandler::new(votes.clone(), stats.clone());
        Self {
            votes,
            stats,
            compute,
        }
    }

    pub async fn handle(&self, query: GetStatsQuery) -> Result<GetStatsResult, AnalyticsError> {
        let mp = self
            .votes
            .find_mp(query.mp_id)
            .await?
            .ok_or(AnalyticsError::MpNotFound(query.mp_id))?;

        if let Some(stored) = self.stats.find(mp.id).await? {
            return Ok(stored);
        }

        tracing::debug!(mp_id = %mp.id, "No stored statistics, computing");
        self.compute.compute_for(&mp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryParliamentStore;
    use crate::application::handlers::fixtures::{self, mp};
    use crate::domain::parliament::VoteValue;

    fn handler(store: &Arc<InMemoryParliamentStore>) -> GetStatsHandler {
        GetStatsHandler::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn missing_row_is_computed_and_stored() {
        let store = fixtures::parliament();
        fixtures::vote(&store, 1, 1, VoteValue::For, 1);

        let stats = handler(&store)
            .handle(GetStatsQuery { mp_id: mp(1) })
            .await
            .unwrap();

        assert_eq!(stats.mp_id, mp(1));
        assert_eq!(store.stats_count(), 1);
    }

    #[tokio::test]
    async fn stored_row_is_returned_without_recomputing() {
        let store = fixtures::parliament();
        fixtures::vote(&store, 1, 1, VoteValue::For, 2);
        let handler = handler(&store);
        let first = handler.handle(GetStatsQuery { mp_id: mp(1) }).await.unwrap();

        // A later vote does not change the stored row until recomputed.
        fixtures::vote(&store, 1, 2, VoteValue::Absent, 1);
        let second = handler.handle(GetStatsQuery { mp_id: mp(1) }).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_mp_is_not_found_even_with_no_data() {
        let store = fixtures::parliament();

        let result = handler(&store).handle(GetStatsQuery { mp_id: mp(42) }).await;

        assert!(matches!(result, Err(AnalyticsError::MpNotFound(_))));
    }
}
