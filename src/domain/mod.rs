//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, percentages, timestamps, errors)
//! - `parliament` - Members, parties, bills, sponsorships and recorded votes
//! - `analytics` - Pure computations (accountability scores, coalitions, comparisons)
//! - `activity` - Activity feed items and cursor pagination

pub mod activity;
pub mod analytics;
pub mod foundation;
pub mod parliament;
