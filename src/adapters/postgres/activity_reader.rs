//! PostgreSQL implementation of ActivityReader.
//!
//! Votes and bill introductions are merged with `UNION ALL` and paged by
//! row comparison on `(occurred_at, kind, id)`, so pages never overlap or
//! skip rows while the data is unchanged.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::vote_reader::parse_vote_value;
use crate::domain::activity::{ActivityItem, ActivityKind, ActivityQuery};
use crate::domain::foundation::{BillId, MpId, Timestamp};
use crate::ports::{ActivityReader, AnalyticsError};

/// PostgreSQL implementation of the ActivityReader port.
#[derive(Clone)]
pub struct PostgresActivityReader {
    pool: PgPool,
}

impl PostgresActivityReader {
    /// Creates a new PostgresActivityReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ActivityRow {
    kind: String,
    id: i64,
    occurred_at: DateTime<Utc>,
    mp_id: Option<i64>,
    mp_name: Option<String>,
    bill_id: i64,
    bill_title: String,
    vote_value: Option<String>,
}

impl TryFrom<ActivityRow> for ActivityItem {
    type Error = AnalyticsError;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        let kind: ActivityKind = row
            .kind
            .parse()
            .map_err(|e| AnalyticsError::StoreUnavailable(format!("Corrupt activity row: {}", e)))?;
        let vote_value = row.vote_value.as_deref().map(parse_vote_value).transpose()?;

        Ok(ActivityItem {
            kind,
            id: row.id,
            occurred_at: Timestamp::from_datetime(row.occurred_at),
            mp_id: row.mp_id.map(MpId::from_db),
            mp_name: row.mp_name,
            bill_id: BillId::from_db(row.bill_id),
            bill_title: row.bill_title,
            vote_value,
        })
    }
}

/// Votes and bill introductions merged into one keyset-ordered stream.
///
/// Each bill yields exactly one `bill_introduced` row, so `(occurred_at,
/// kind, id)` stays unique across the feed.
const ACTIVITY_PAGE_SQL: &str = r#"
        SELECT kind, id, occurred_at, mp_id, mp_name, bill_id, bill_title, vote_value
        FROM (
            SELECT 'vote'::text AS kind, v.id, v.voted_at AS occurred_at,
                   v.mp_id, m.name AS mp_name, b.id AS bill_id,
                   b.title AS bill_title, v.vote_value
            FROM votes v
            JOIN bills b ON b.id = v.bill_id
            JOIN mps m ON m.id = v.mp_id
            UNION ALL
            SELECT 'bill_introduced'::text AS kind, b.id, b.introduced_at AS occurred_at,
                   s.mp_id, m.name AS mp_name, b.id AS bill_id,
                   b.title AS bill_title, NULL::text AS vote_value
            FROM bills b
            LEFT JOIN LATERAL (
                SELECT bs.mp_id
                FROM bill_sponsors bs
                WHERE bs.bill_id = b.id AND bs.is_primary
                ORDER BY bs.mp_id
                LIMIT 1
            ) s ON TRUE
            LEFT JOIN mps m ON m.id = s.mp_id
        ) feed
        WHERE ($1::bigint IS NULL OR mp_id = $1)
          AND ($2::timestamptz IS NULL OR (occurred_at, kind, id) < ($2, $3::text, $4::bigint))
        ORDER BY occurred_at DESC, kind DESC, id DESC
        LIMIT $5
        "#;

#[async_trait]
impl ActivityReader for PostgresActivityReader {
    async fn recent_activity(
        &self,
        query: &ActivityQuery,
    ) -> Result<Vec<ActivityItem>, AnalyticsError> {
        let limit = i64::try_from(query.limit).unwrap_or(i64::MAX);
        let cursor_at = query.after.map(|c| *c.occurred_at.as_datetime());
        let cursor_kind = query.after.map(|c| c.kind.as_str());
        let cursor_id = query.after.map(|c| c.id);

        let rows: Vec<ActivityRow> = sqlx::query_as(ACTIVITY_PAGE_SQL)
            .bind(query.mp_id.map(|id| id.value()))
            .bind(cursor_at)
            .bind(cursor_kind)
            .bind(cursor_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(rows = rows.len(), "Loaded activity page");

        rows.into_iter().map(ActivityItem::try_from).collect()
    }
}
