//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod activity;
pub mod analytics;

#[cfg(test)]
pub(crate) mod fixtures;

pub use activity::{GetActivityFeedHandler, GetActivityFeedQuery, GetActivityFeedResult};
pub use analytics::{
    CoalitionMatrixHandler, CoalitionMatrixResult, CompareMpsHandler, CompareMpsQuery,
    CompareMpsResult, ComputeStatsCommand, ComputeStatsHandler, ComputeStatsResult,
    GetStatsHandler, GetStatsQuery, GetStatsResult, RecomputeAllStatsCommand,
    RecomputeAllStatsHandler, RecomputeAllStatsResult, VotingTogetherHandler,
    VotingTogetherQuery, VotingTogetherResult,
};
