//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL-backed store
//! - `memory` - In-memory store for tests and local runs
//! - `http` - Axum routes exposing the analytics API

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryParliamentStore;
pub use postgres::{PostgresActivityReader, PostgresStatsRepository, PostgresVoteReader};
