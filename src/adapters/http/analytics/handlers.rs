//! HTTP handlers for analytics endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::handlers::{
    CoalitionMatrixHandler, CompareMpsHandler, CompareMpsQuery, ComputeStatsCommand,
    ComputeStatsHandler, GetActivityFeedHandler, GetActivityFeedQuery, GetStatsHandler,
    GetStatsQuery, RecomputeAllStatsCommand, RecomputeAllStatsHandler, VotingTogetherHandler,
    VotingTogetherQuery,
};
use crate::config::AnalyticsConfig;
use crate::domain::activity::ActivityPage;
use crate::domain::analytics::{CoalitionMatrix, CoalitionPair, ComparisonResult, MpStats};
use crate::domain::foundation::{ErrorCode, MpId};
use crate::ports::{ActivityReader, AnalyticsError, StatsRepository, VoteReader};

use super::dto::{ErrorResponse, RecomputeAllResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analytics API error that implements IntoResponse.
#[derive(Debug)]
pub enum AnalyticsApiError {
    BadRequest(String),
    NotFound(MpId),
    Unavailable(String),
}

impl IntoResponse for AnalyticsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AnalyticsApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(ErrorCode::InvalidInput, msg),
            ),
            AnalyticsApiError::NotFound(mp_id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(ErrorCode::MpNotFound, format!("MP {} not found", mp_id))
                    .with_details(serde_json::json!({ "mpId": mp_id })),
            ),
            AnalyticsApiError::Unavailable(msg) => {
                tracing::warn!(error = %msg, "Store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new(
                        ErrorCode::StoreUnavailable,
                        "The data store is temporarily unavailable",
                    ),
                )
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<QueryRejection> for AnalyticsApiError {
    fn from(rejection: QueryRejection) -> Self {
        AnalyticsApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AnalyticsApiError {
    fn from(rejection: PathRejection) -> Self {
        AnalyticsApiError::BadRequest(rejection.body_text())
    }
}

impl From<AnalyticsError> for AnalyticsApiError {
    fn from(error: AnalyticsError) -> Self {
        match error {
            AnalyticsError::MpNotFound(id) => AnalyticsApiError::NotFound(id),
            AnalyticsError::InvalidInput(msg) => AnalyticsApiError::BadRequest(msg),
            AnalyticsError::StoreUnavailable(msg) => AnalyticsApiError::Unavailable(msg),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing analytics dependencies.
#[derive(Clone)]
pub struct AnalyticsAppState {
    pub vote_reader: Arc<dyn VoteReader>,
    pub stats_repository: Arc<dyn StatsRepository>,
    pub activity_reader: Arc<dyn ActivityReader>,
    pub settings: AnalyticsConfig,
}

impl AnalyticsAppState {
    pub fn get_stats_handler(&self) -> GetStatsHandler {
        GetStatsHandler::new(self.vote_reader.clone(), self.stats_repository.clone())
    }

    pub fn compute_stats_handler(&self) -> ComputeStatsHandler {
        ComputeStatsHandler::new(self.vote_reader.clone(), self.stats_repository.clone())
    }

    pub fn recompute_all_handler(&self) -> RecomputeAllStatsHandler {
        RecomputeAllStatsHandler::new(self.vote_reader.clone(), self.stats_repository.clone())
    }

    pub fn voting_together_handler(&self) -> VotingTogetherHandler {
        VotingTogetherHandler::new(self.vote_reader.clone(), self.settings.max_coalition_limit)
    }

    pub fn coalition_matrix_handler(&self) -> CoalitionMatrixHandler {
        CoalitionMatrixHandler::new(self.vote_reader.clone(), self.settings.max_coalition_limit)
    }

    pub fn compare_mps_handler(&self) -> CompareMpsHandler {
        CompareMpsHandler::new(self.vote_reader.clone())
    }

    pub fn activity_feed_handler(&self) -> GetActivityFeedHandler {
        GetActivityFeedHandler::new(
            self.activity_reader.clone(),
            self.vote_reader.clone(),
            self.settings.max_page_size,
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Parameters
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for the coalition endpoints.
///
/// Kept as text so malformed numbers produce the JSON error body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoalitionParams {
    pub limit: Option<String>,
    pub min_shared_bills: Option<String>,
    pub months_back: Option<String>,
}

/// Query parameters for MP comparison.
#[derive(Debug, Default, Deserialize)]
pub struct CompareParams {
    pub mp1: Option<String>,
    pub mp2: Option<String>,
}

/// Query parameters for the activity feed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityParams {
    pub mp_id: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<String>,
}

fn parse_number(name: &str, value: Option<&str>, default: i64) -> Result<i64, AnalyticsApiError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| {
            AnalyticsApiError::BadRequest(format!("{} must be an integer, got '{}'", name, text))
        }),
    }
}

fn parse_mp_id(name: &str, value: &str) -> Result<MpId, AnalyticsApiError> {
    MpId::from_str(value.trim()).map_err(|_| {
        AnalyticsApiError::BadRequest(format!("{} must be a positive integer MP id", name))
    })
}

fn required_mp_id(name: &str, value: Option<&str>) -> Result<MpId, AnalyticsApiError> {
    let value =
        value.ok_or_else(|| AnalyticsApiError::BadRequest(format!("{} is required", name)))?;
    parse_mp_id(name, value)
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl CoalitionParams {
    fn into_query(self, settings: &AnalyticsConfig) -> Result<VotingTogetherQuery, AnalyticsApiError> {
        Ok(VotingTogetherQuery {
            months_back: parse_number(
                "monthsBack",
                self.months_back.as_deref(),
                i64::from(settings.default_months_back),
            )?,
            min_shared_bills: parse_number(
                "minSharedBills",
                self.min_shared_bills.as_deref(),
                i64::from(settings.default_min_shared_bills),
            )?,
            limit: parse_number(
                "limit",
                self.limit.as_deref(),
                to_i64(settings.default_coalition_limit),
            )?,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/mps/:mp_id/stats
///
/// Returns the stored statistics of an MP, computing them on first request.
pub async fn get_mp_stats(
    State(state): State<AnalyticsAppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MpStats>, AnalyticsApiError> {
    let Path(mp_id_str) = path?;
    let mp_id = parse_mp_id("mpId", &mp_id_str)?;

    let handler = state.get_stats_handler();
    let stats = handler.handle(GetStatsQuery { mp_id }).await?;

    Ok(Json(stats))
}

/// POST /api/mps/:mp_id/stats/recompute
///
/// Recomputes and stores the statistics of one MP.
pub async fn recompute_mp_stats(
    State(state): State<AnalyticsAppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MpStats>, AnalyticsApiError> {
    let Path(mp_id_str) = path?;
    let mp_id = parse_mp_id("mpId", &mp_id_str)?;

    let handler = state.compute_stats_handler();
    let stats = handler.handle(ComputeStatsCommand { mp_id }).await?;

    Ok(Json(stats))
}

/// POST /api/stats/recompute
///
/// Recomputes the statistics of every MP.
pub async fn recompute_all_stats(
    State(state): State<AnalyticsAppState>,
) -> Result<Json<RecomputeAllResponse>, AnalyticsApiError> {
    let handler = state.recompute_all_handler();
    let recomputed = handler.handle(RecomputeAllStatsCommand).await?;

    Ok(Json(RecomputeAllResponse { recomputed }))
}

/// GET /api/coalitions?limit=&minSharedBills=&monthsBack=
///
/// Returns party pairs ranked by how often they vote together.
pub async fn voting_together(
    State(state): State<AnalyticsAppState>,
    params: Result<Query<CoalitionParams>, QueryRejection>,
) -> Result<Json<Vec<CoalitionPair>>, AnalyticsApiError> {
    let Query(params) = params?;
    let query = params.into_query(&state.settings)?;

    let handler = state.voting_together_handler();
    let pairs = handler.handle(query).await?;

    Ok(Json(pairs))
}

/// GET /api/coalitions/matrix?limit=&minSharedBills=&monthsBack=
///
/// Returns the same pairs as a symmetric party matrix.
pub async fn coalition_matrix(
    State(state): State<AnalyticsAppState>,
    params: Result<Query<CoalitionParams>, QueryRejection>,
) -> Result<Json<CoalitionMatrix>, AnalyticsApiError> {
    let Query(params) = params?;
    let query = params.into_query(&state.settings)?;

    let handler = state.coalition_matrix_handler();
    let matrix = handler.handle(query).await?;

    Ok(Json(matrix))
}

/// GET /api/compare?mp1=&mp2=
///
/// Returns the head-to-head comparison of two MPs.
pub async fn compare_mps(
    State(state): State<AnalyticsAppState>,
    params: Result<Query<CompareParams>, QueryRejection>,
) -> Result<Json<ComparisonResult>, AnalyticsApiError> {
    let Query(params) = params?;
    let mp1 = required_mp_id("mp1", params.mp1.as_deref())?;
    let mp2 = required_mp_id("mp2", params.mp2.as_deref())?;

    let handler = state.compare_mps_handler();
    let result = handler.handle(CompareMpsQuery { mp1, mp2 }).await?;

    Ok(Json(result))
}

/// GET /api/activity?mpId=&cursor=&limit=
///
/// Returns one page of recent votes and bill introductions.
pub async fn activity_feed(
    State(state): State<AnalyticsAppState>,
    params: Result<Query<ActivityParams>, QueryRejection>,
) -> Result<Json<ActivityPage>, AnalyticsApiError> {
    let Query(params) = params?;
    let mp_id = params
        .mp_id
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(|v| parse_mp_id("mpId", v))
        .transpose()?;
    let limit = parse_number(
        "limit",
        params.limit.as_deref(),
        to_i64(state.settings.default_page_size),
    )?;

    let query = GetActivityFeedQuery {
        mp_id,
        cursor: params.cursor,
        limit,
    };

    let handler = state.activity_feed_handler();
    let page = handler.handle(query).await?;

    Ok(Json(page))
}
