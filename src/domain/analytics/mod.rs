//! Analytics Module - Pure computations over recorded votes.
//!
//! # Components
//!
//! - `ScoreCalculator` - Per-MP attendance, loyalty and accountability score
//! - `CoalitionAggregator` - Pairwise party agreement over a time window
//! - `ComparisonEngine` - Head-to-head comparison of two MPs
//! - `VoteTally` - Party majority with a fixed tie-break order
//!
//! All functions are pure and stateless. Loading votes and persisting
//! `MpStats` is the job of the application layer and its ports.

mod coalition_aggregator;
mod comparison_engine;
mod majority;
mod score_calculator;

pub use coalition_aggregator::{
    CoalitionAggregator, CoalitionMatrix, CoalitionPair, CoalitionWindow,
};
pub use comparison_engine::{ComparisonEngine, ComparisonResult, Disagreement};
pub use majority::{majority_vote, VoteTally};
pub use score_calculator::{
    MpStats, ScoreCalculator, ScoreInputs, ATTENDANCE_WEIGHT, LOYALTY_WEIGHT,
};
