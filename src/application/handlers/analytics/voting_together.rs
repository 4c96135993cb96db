//! VotingTogetherHandler - Query handler for party coalition pairs.
//!
//! Validates the window parameters, loads party-tagged votes since the
//! window start and aggregates them into ranked party pairs.

use std::sync::Arc;

use crate::domain::analytics::{CoalitionAggregator, CoalitionPair, CoalitionWindow};
use crate::domain::foundation::Timestamp;
use crate::ports::{AnalyticsError, VoteReader};

/// Query for the parties that vote together most often.
///
/// Values arrive unvalidated from the caller; defaults are applied before
/// this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VotingTogetherQuery {
    pub months_back: i64,
    pub min_shared_bills: i64,
    pub limit: i64,
}

/// Result of a successful coalition query.
pub type VotingTogetherResult = Vec<CoalitionPair>;

/// Handler for ranking party pairs by agreement.
#[derive(Clone)]
pub struct VotingTogetherHandler {
    reader: Arc<dyn VoteReader>,
    max_limit: usize,
}

impl VotingTogetherHandler {
    pub fn new(reader: Arc<dyn VoteReader>, max_limit: usize) -> Self {
        Self { reader, max_limit }
    }

    pub async fn handle(
        &self,
        query: VotingTogetherQuery,
    ) -> Result<VotingTogetherResult, AnalyticsError> {
        let window = self.window(query, Timestamp::now())?;
        let votes = self.reader.party_votes_since(window.since).await?;
        let pairs = CoalitionAggregator::aggregate(&votes, window);

        tracing::debug!(
            months_back = query.months_back,
            votes = votes.len(),
            pairs = pairs.len(),
            "Aggregated coalition pairs"
        );

        Ok(pairs)
    }

    /// Turns raw parameters into a window ending at `now`.
    pub(crate) fn window(
        &self,
        query: VotingTogetherQuery,
        now: Timestamp,
    ) -> Result<CoalitionWindow, AnalyticsError> {
        let months_back = u32::try_from(query.months_back).map_err(|_| {
            AnalyticsError::InvalidInput(format!(
                "monthsBack must be a non-negative number of months, got {}",
                query.months_back
            ))
        })?;

        let min_shared_bills = u32::try_from(query.min_shared_bills).map_err(|_| {
            AnalyticsError::InvalidInput(format!(
                "minSharedBills must not be negative, got {}",
                query.min_shared_bills
            ))
        })?;

        let limit = usize::try_from(query.limit)
            .ok()
            .filter(|limit| (1..=self.max_limit).contains(limit))
            .ok_or_else(|| {
                AnalyticsError::InvalidInput(format!(
                    "limit must be between 1 and {}, got {}",
                    self.max_limit, query.limit
                ))
            })?;

        Ok(CoalitionWindow {
            since: now.minus_months(months_back),
            min_shared_bills,
            limit,
        })
    }
}
