//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the parliamentary store. Adapters implement these ports.
//!
//! - `VoteReader` - Votes, MPs, parties and sponsorships (read-only)
//! - `StatsRepository` - Upserted per-MP statistics
//! - `ActivityReader` - Cursor-paginated activity feed
//! - `AnalyticsError` - Not-found / invalid-input / store-unavailable taxonomy

mod activity_reader;
mod analytics_error;
mod stats_repository;
mod vote_reader;

pub use activity_reader::ActivityReader;
pub use analytics_error::AnalyticsError;
pub use stats_repository::StatsRepository;
pub use vote_reader::VoteReader;
