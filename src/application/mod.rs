//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers recompute and store statistics; query handlers read.

pub mod handlers;

pub use handlers::{
    // Statistics
    ComputeStatsCommand, ComputeStatsHandler, GetStatsHandler, GetStatsQuery,
    RecomputeAllStatsCommand, RecomputeAllStatsHandler,
    // Coalitions and comparison
    CoalitionMatrixHandler, CompareMpsHandler, CompareMpsQuery, VotingTogetherHandler,
    VotingTogetherQuery,
    // Activity
    GetActivityFeedHandler, GetActivityFeedQuery,
};
