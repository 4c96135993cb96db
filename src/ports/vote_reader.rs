//! Vote reader port (read side of the parliamentary store).
//!
//! The analytics engine never writes votes; ingestion owns them. This port
//! exposes the filtered scans the calculators need, each bounded by a single
//! MP, a single party, or a time window.

use async_trait::async_trait;

use super::AnalyticsError;
use crate::domain::foundation::{BillId, MpId, PartyId, Timestamp};
use crate::domain::parliament::{Mp, MpVoteRecord, Party, PartyMemberVote, Sponsorship};

/// Reader port for recorded votes and the entities around them.
#[async_trait]
pub trait VoteReader: Send + Sync {
    /// Finds an MP by id.
    ///
    /// Returns `None` if not found.
    async fn find_mp(&self, mp_id: MpId) -> Result<Option<Mp>, AnalyticsError>;

    /// Lists every MP id, ascending.
    async fn list_mp_ids(&self) -> Result<Vec<MpId>, AnalyticsError>;

    /// Lists every party, ordered by id.
    async fn list_parties(&self) -> Result<Vec<Party>, AnalyticsError>;

    /// The MP's full vote history (absences included), joined with bill titles.
    async fn votes_for_mp(&self, mp_id: MpId) -> Result<Vec<MpVoteRecord>, AnalyticsError>;

    /// Votes of the party's members on the given bills.
    async fn party_votes_on_bills(
        &self,
        party_id: PartyId,
        bill_ids: &[BillId],
    ) -> Result<Vec<PartyMemberVote>, AnalyticsError>;

    /// Votes of all party members cast at or after `since`.
    ///
    /// Members without a party are not included.
    async fn party_votes_since(
        &self,
        since: Timestamp,
    ) -> Result<Vec<PartyMemberVote>, AnalyticsError>;

    /// Bills the MP sponsors, as primary sponsor or co-sponsor.
    async fn sponsorships_for_mp(&self, mp_id: MpId) -> Result<Vec<Sponsorship>, AnalyticsError>;
}
