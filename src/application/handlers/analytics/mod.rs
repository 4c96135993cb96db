//! Analytics handlers.
//!
//! Statistics commands and the read-only coalition and comparison queries.

mod coalition_matrix;
mod compare_mps;
mod compute_stats;
mod get_stats;
mod recompute_all_stats;
mod voting_together;

pub use coalition_matrix::{CoalitionMatrixHandler, CoalitionMatrixResult};
pub use compare_mps::{CompareMpsHandler, CompareMpsQuery, CompareMpsResult};
pub use compute_stats::{ComputeStatsCommand, ComputeStatsHandler, ComputeStatsResult};
pub use get_stats::{GetStatsHandler, GetStatsQuery, GetStatsResult};
pub use recompute_all_stats::{
    RecomputeAllStatsCommand, RecomputeAllStatsHandler, RecomputeAllStatsResult,
};
pub use voting_together::{VotingTogetherHandler, VotingTogetherQuery, VotingTogetherResult};
