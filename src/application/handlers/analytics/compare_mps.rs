//! CompareMpsHandler - Query handler for head-to-head MP comparison.
//!
//! Both MPs must exist. Two MPs that never voted on the same bill give a
//! valid result with a null agreement score.

use std::sync::Arc;

use crate::domain::analytics::{ComparisonEngine, ComparisonResult};
use crate::domain::foundation::MpId;
use crate::ports::{AnalyticsError, VoteReader};

/// Query to compare two MPs.
#[derive(Debug, Clone)]
pub struct CompareMpsQuery {
    pub mp1: MpId,
    pub mp2: MpId,
}

/// Result of a successful comparison.
pub type CompareMpsResult = ComparisonResult;

/// Handler for comparing the voting records of two MPs.
pub struct CompareMpsHandler {
    reader: Arc<dyn VoteReader>,
}

impl CompareMpsHandler {
    pub fn new(reader: Arc<dyn VoteReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: CompareMpsQuery) -> Result<CompareMpsResult, AnalyticsError> {
        if query.mp1 == query.mp2 {
            return Err(AnalyticsError::InvalidInput(
                "mp1 and mp2 must be different MPs".to_string(),
            ));
        }

        for mp_id in [query.mp1, query.mp2] {
            if self.reader.find_mp(mp_id).await?.is_none() {
                return Err(AnalyticsError::MpNotFound(mp_id));
            }
        }

        let first = self.reader.votes_for_mp(query.mp1).await?;
        let second = self.reader.votes_for_mp(query.mp2).await?;
        let result = ComparisonEngine::compare(query.mp1, &first, query.mp2, &second);

        tracing::debug!(
            mp1 = %query.mp1,
            mp2 = %query.mp2,
            common_votes = result.common_votes,
            "Compared MPs"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::fixtures::{self, mp};
    use crate::domain::parliament::VoteValue;

    #[tokio::test]
    async fn two_of_three_agreement() {
        let store = fixtures::parliament();
        for (bill, second) in [(1, VoteValue::For), (2, VoteValue::For), (3, VoteValue::Against)] {
            fixtures::vote(&store, 1, bill, VoteValue::For, 4 - bill);
            fixtures::vote(&store, 3, bill, second, 4 - bill);
        }
        let handler = CompareMpsHandler::new(store.clone());

        let result = handler
            .handle(CompareMpsQuery { mp1: mp(1), mp2: mp(3) })
            .await
            .unwrap();

        assert_eq!(result.common_votes, 3);
        assert_eq!(result.agreement_score.map(|s| s.tenths()), Some(667));
        assert_eq!(result.disagreements.len(), 1);
        assert_eq!(result.disagreements[0].bill_title, "Housing Act");
        assert_eq!(result.disagreements[0].mp1_vote, VoteValue::For);
        assert_eq!(result.disagreements[0].mp2_vote, VoteValue::Against);
    }

    #[tokio::test]
    async fn no_shared_bills_is_a_valid_result() {
        let store = fixtures::parliament();
        fixtures::vote(&store, 1, 1, VoteValue::For, 1);
        fixtures::vote(&store, 3, 2, VoteValue::For, 1);
        let handler = CompareMpsHandler::new(store.clone());

        let result = handler
            .handle(CompareMpsQuery { mp1: mp(1), mp2: mp(3) })
            .await
            .unwrap();

        assert!(!result.has_overlap);
        assert_eq!(result.agreement_score, None);
        assert!(result.disagreements.is_empty());
    }

    #[tokio::test]
    async fn same_mp_twice_is_invalid() {
        let store = fixtures::parliament();
        let handler = CompareMpsHandler::new(store.clone());

        let result = handler
            .handle(CompareMpsQuery { mp1: mp(1), mp2: mp(1) })
            .await;

        assert!(matches!(result, Err(AnalyticsError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn missing_second_mp_is_not_found() {
        let store = fixtures::parliament();
        let handler = CompareMpsHandler::new(store.clone());

        let result = handler
            .handle(CompareMpsQuery { mp1: mp(1), mp2: mp(77) })
            .await;

        assert!(matches!(result, Err(AnalyticsError::MpNotFound(id)) if id == mp(77)));
    }
}
