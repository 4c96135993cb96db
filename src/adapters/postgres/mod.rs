//! PostgreSQL adapters - Database implementations for the store ports.
//!
//! - `PostgresVoteReader` - MPs, parties, votes and sponsorships
//! - `PostgresStatsRepository` - Upserted `mp_stats` rows
//! - `PostgresActivityReader` - Keyset-paginated activity feed

mod activity_reader;
mod stats_repository;
mod vote_reader;

pub use activity_reader::PostgresActivityReader;
pub use stats_repository::PostgresStatsRepository;
pub use vote_reader::PostgresVoteReader;
