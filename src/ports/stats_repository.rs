//! Repository port for derived MP statistics.

use async_trait::async_trait;

use super::AnalyticsError;
use crate::domain::analytics::MpStats;
use crate::domain::foundation::MpId;

/// Persistence for the single `MpStats` row of each MP.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Inserts or replaces the MP's statistics row.
    ///
    /// Must be idempotent: saving the same stats twice leaves one row.
    async fn upsert(&self, stats: &MpStats) -> Result<(), AnalyticsError>;

    /// Loads the stored statistics of an MP, if computed before.
    async fn find(&self, mp_id: MpId) -> Result<Option<MpStats>, AnalyticsError>;
}
