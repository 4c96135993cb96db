//! CoalitionMatrixHandler - Query handler for the party agreement matrix.

use std::sync::Arc;

use super::{VotingTogetherHandler, VotingTogetherQuery};
use crate::domain::analytics::CoalitionMatrix;
use crate::ports::{AnalyticsError, VoteReader};

/// Result of a successful matrix query.
pub type CoalitionMatrixResult = CoalitionMatrix;

/// Handler building a symmetric matrix from the ranked coalition pairs.
///
/// Takes the same parameters as [`VotingTogetherHandler`]; cells for pairs
/// that did not make the ranked list are empty.
pub struct CoalitionMatrixHandler {
    reader: Arc<dyn VoteReader>,
    pairs: VotingTogetherHandler,
}

impl CoalitionMatrixHandler {
    pub fn new(reader: Arc<dyn VoteReader>, max_limit: usize) -> Self {
        let pairs = VotingTogetherHandler::new(reader.clone(), max_limit);
        Self { reader, pairs }
    }

    pub async fn handle(
        &self,
        query: VotingTogetherQuery,
    ) -> Result<CoalitionMatrixResult, AnalyticsError> {
        let pairs = self.pairs.handle(query).await?;
        let parties = self.reader.list_parties().await?;
        Ok(CoalitionMatrix::from_pairs(&parties, &pairs))
    }
}
