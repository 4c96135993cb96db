//! HTTP routes for analytics endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    activity_feed, coalition_matrix, compare_mps, get_mp_stats, recompute_all_stats,
    recompute_mp_stats, voting_together, AnalyticsAppState,
};

/// Creates the analytics router with all routes.
pub fn analytics_routes(state: AnalyticsAppState) -> Router {
    Router::new()
        .route("/api/mps/:mp_id/stats", get(get_mp_stats))
        .route("/api/mps/:mp_id/stats/recompute", post(recompute_mp_stats))
        .route("/api/stats/recompute", post(recompute_all_stats))
        .route("/api/coalitions", get(voting_together))
        .route("/api/coalitions/matrix", get(coalition_matrix))
        .route("/api/compare", get(compare_mps))
        .route("/api/activity", get(activity_feed))
        .with_state(state)
}
