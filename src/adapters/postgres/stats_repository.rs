//! PostgreSQL implementation of StatsRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::analytics::MpStats;
use crate::domain::foundation::{MpId, Percentage, Timestamp};
use crate::ports::{AnalyticsError, StatsRepository};

/// PostgreSQL implementation of the StatsRepository port.
///
/// Percentages are stored as `DOUBLE PRECISION` with one decimal.
#[derive(Clone)]
pub struct PostgresStatsRepository {
    pool: PgPool,
}

impl PostgresStatsRepository {
    /// Creates a new PostgresStatsRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MpStatsRow {
    mp_id: i64,
    voting_attendance: f64,
    party_loyalty: f64,
    bills_proposed: i32,
    bills_passed: i32,
    accountability_score: f64,
    last_calculated: DateTime<Utc>,
}

impl TryFrom<MpStatsRow> for MpStats {
    type Error = AnalyticsError;

    fn try_from(row: MpStatsRow) -> Result<Self, Self::Error> {
        let count = |field: &str, value: i32| {
            u32::try_from(value).map_err(|_| {
                AnalyticsError::StoreUnavailable(format!("Corrupt mp_stats.{}: {}", field, value))
            })
        };

        Ok(MpStats {
            mp_id: MpId::from_db(row.mp_id),
            voting_attendance: Percentage::from_f64(row.voting_attendance),
            party_loyalty: Percentage::from_f64(row.party_loyalty),
            bills_proposed: count("bills_proposed", row.bills_proposed)?,
            bills_passed: count("bills_passed", row.bills_passed)?,
            accountability_score: Percentage::from_f64(row.accountability_score),
            last_calculated: Timestamp::from_datetime(row.last_calculated),
        })
    }
}

fn to_db_count(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[async_trait]
impl StatsRepository for PostgresStatsRepository {
    async fn upsert(&self, stats: &MpStats) -> Result<(), AnalyticsError> {
        sqlx::query(
            r#"
            INSERT INTO mp_stats (
                mp_id, voting_attendance, party_loyalty, bills_proposed,
                bills_passed, accountability_score, last_calculated
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (mp_id) DO UPDATE SET
                voting_attendance = EXCLUDED.voting_attendance,
                party_loyalty = EXCLUDED.party_loyalty,
                bills_proposed = EXCLUDED.bills_proposed,
                bills_passed = EXCLUDED.bills_passed,
                accountability_score = EXCLUDED.accountability_score,
                last_calculated = EXCLUDED.last_calculated
            "#,
        )
        .bind(stats.mp_id.value())
        .bind(stats.voting_attendance.value())
        .bind(stats.party_loyalty.value())
        .bind(to_db_count(stats.bills_proposed))
        .bind(to_db_count(stats.bills_passed))
        .bind(stats.accountability_score.value())
        .bind(stats.last_calculated.as_datetime())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, mp_id: MpId) -> Result<Option<MpStats>, AnalyticsError> {
        let row: Option<MpStatsRow> = sqlx::query_as(
            r#"
            SELECT mp_id, voting_attendance, party_loyalty, bills_proposed,
                   bills_passed, accountability_score, last_calculated
            FROM mp_stats
            WHERE mp_id = $1
            "#,
        )
        .bind(mp_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(MpStats::try_from).transpose()
    }
}
