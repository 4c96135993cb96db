//! Analytics HTTP adapter module.
//!
//! Provides REST API endpoints for MP statistics, coalitions, comparisons
//! and the activity feed.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HealthResponse, RecomputeAllResponse};
pub use handlers::{AnalyticsApiError, AnalyticsAppState};
pub use routes::analytics_routes;
