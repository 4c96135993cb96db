//! PostgreSQL implementation of VoteReader.
//!
//! Each query is bounded by one MP, one party, or a time window, and is
//! served by the indexes created in the schema migration.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{BillId, MpId, PartyId, Timestamp};
use crate::domain::parliament::{
    BillStatus, Mp, MpVoteRecord, Party, PartyMemberVote, SponsorRole, Sponsorship, VoteValue,
};
use crate::ports::{AnalyticsError, VoteReader};

/// PostgreSQL implementation of the VoteReader port.
#[derive(Clone)]
pub struct PostgresVoteReader {
    pool: PgPool,
}

impl PostgresVoteReader {
    /// Creates a new PostgresVoteReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MpRow {
    id: i64,
    name: String,
    party_id: Option<i64>,
}

#[derive(Debug, sqlx::FromRow)]
struct PartyRow {
    id: i64,
    name: String,
    short_name: String,
}

#[derive(Debug, sqlx::FromRow)]
struct MpVoteRow {
    bill_id: i64,
    bill_title: String,
    vote_value: String,
    voted_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct PartyVoteRow {
    bill_id: i64,
    party_id: i64,
    mp_id: i64,
    vote_value: String,
    voted_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct SponsorshipRow {
    bill_id: i64,
    mp_id: i64,
    is_primary: bool,
    status: String,
}

/// Parses stored enum text, reporting corrupt rows as a store failure.
pub(super) fn parse_vote_value(text: &str) -> Result<VoteValue, AnalyticsError> {
    text.parse()
        .map_err(|e| AnalyticsError::StoreUnavailable(format!("Corrupt vote row: {}", e)))
}

fn parse_bill_status(text: &str) -> Result<BillStatus, AnalyticsError> {
    text.parse()
        .map_err(|e| AnalyticsError::StoreUnavailable(format!("Corrupt bill row: {}", e)))
}

impl TryFrom<MpVoteRow> for MpVoteRecord {
    type Error = AnalyticsError;

    fn try_from(row: MpVoteRow) -> Result<Self, Self::Error> {
        Ok(MpVoteRecord {
            bill_id: BillId::from_db(row.bill_id),
            bill_title: row.bill_title,
            vote_value: parse_vote_value(&row.vote_value)?,
            voted_at: Timestamp::from_datetime(row.voted_at),
        })
    }
}

impl TryFrom<PartyVoteRow> for PartyMemberVote {
    type Error = AnalyticsError;

    fn try_from(row: PartyVoteRow) -> Result<Self, Self::Error> {
        Ok(PartyMemberVote {
            bill_id: BillId::from_db(row.bill_id),
            party_id: PartyId::from_db(row.party_id),
            mp_id: MpId::from_db(row.mp_id),
            vote_value: parse_vote_value(&row.vote_value)?,
            voted_at: Timestamp::from_datetime(row.voted_at),
        })
    }
}

impl TryFrom<SponsorshipRow> for Sponsorship {
    type Error = AnalyticsError;

    fn try_from(row: SponsorshipRow) -> Result<Self, Self::Error> {
        Ok(Sponsorship {
            bill_id: BillId::from_db(row.bill_id),
            mp_id: MpId::from_db(row.mp_id),
            role: if row.is_primary {
                SponsorRole::Primary
            } else {
                SponsorRole::CoSponsor
            },
            bill_status: parse_bill_status(&row.status)?,
        })
    }
}

#[async_trait]
impl VoteReader for PostgresVoteReader {
    async fn find_mp(&self, mp_id: MpId) -> Result<Option<Mp>, AnalyticsError> {
        let row: Option<MpRow> = sqlx::query_as(
            r#"
            SELECT id, name, party_id FROM mps WHERE id = $1
            "#,
        )
        .bind(mp_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| Mp {
            id: MpId::from_db(r.id),
            name: r.name,
            party_id: r.party_id.map(PartyId::from_db),
        }))
    }

    async fn list_mp_ids(&self) -> Result<Vec<MpId>, AnalyticsError> {
        let ids: Vec<(i64,)> = sqlx::query_as("SELECT id FROM mps ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(ids.into_iter().map(|(id,)| MpId::from_db(id)).collect())
    }

    async fn list_parties(&self) -> Result<Vec<Party>, AnalyticsError> {
        let rows: Vec<PartyRow> =
            sqlx::query_as("SELECT id, name, short_name FROM parties ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows
            .into_iter()
            .map(|r| Party {
                id: PartyId::from_db(r.id),
                name: r.name,
                short_name: r.short_name,
            })
            .collect())
    }

    async fn votes_for_mp(&self, mp_id: MpId) -> Result<Vec<MpVoteRecord>, AnalyticsError> {
        let rows: Vec<MpVoteRow> = sqlx::query_as(
            r#"
            SELECT v.bill_id, b.title AS bill_title, v.vote_value, v.voted_at
            FROM votes v
            JOIN bills b ON b.id = v.bill_id
            WHERE v.mp_id = $1
            ORDER BY v.voted_at DESC, v.bill_id
            "#,
        )
        .bind(mp_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(MpVoteRecord::try_from).collect()
    }

    async fn party_votes_on_bills(
        &self,
        party_id: PartyId,
        bill_ids: &[BillId],
    ) -> Result<Vec<PartyMemberVote>, AnalyticsError> {
        if bill_ids.is_empty() {
            return Ok(Vec::new());
        }
        let bill_ids: Vec<i64> = bill_ids.iter().map(BillId::value).collect();

        let rows: Vec<PartyVoteRow> = sqlx::query_as(
            r#"
            SELECT v.bill_id, m.party_id, v.mp_id, v.vote_value, v.voted_at
            FROM votes v
            JOIN mps m ON m.id = v.mp_id
            WHERE m.party_id = $1 AND v.bill_id = ANY($2)
            "#,
        )
        .bind(party_id.value())
        .bind(bill_ids)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PartyMemberVote::try_from).collect()
    }

    async fn party_votes_since(
        &self,
        since: Timestamp,
    ) -> Result<Vec<PartyMemberVote>, AnalyticsError> {
        let rows: Vec<PartyVoteRow> = sqlx::query_as(
            r#"
            SELECT v.bill_id, m.party_id, v.mp_id, v.vote_value, v.voted_at
            FROM votes v
            JOIN mps m ON m.id = v.mp_id
            WHERE m.party_id IS NOT NULL
              AND v.voted_at >= $1
              AND v.vote_value <> 'absent'
            "#,
        )
        .bind(since.as_datetime())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PartyMemberVote::try_from).collect()
    }

    async fn sponsorships_for_mp(&self, mp_id: MpId) -> Result<Vec<Sponsorship>, AnalyticsError> {
        let rows: Vec<SponsorshipRow> = sqlx::query_as(
            r#"
            SELECT s.bill_id, s.mp_id, s.is_primary, b.status
            FROM bill_sponsors s
            JOIN bills b ON b.id = s.bill_id
            WHERE s.mp_id = $1
            "#,
        )
        .bind(mp_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Sponsorship::try_from).collect()
    }
}
