//! Parliament Watch - Parliamentary transparency backend
//!
//! Computes per-MP accountability statistics, party voting coalitions and
//! head-to-head MP comparisons from recorded votes, and serves them with a
//! paginated activity feed over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
