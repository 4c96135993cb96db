//! GetActivityFeedHandler - Query handler for the paginated activity feed.

use std::sync::Arc;

use crate::domain::activity::{ActivityCursor, ActivityPage, ActivityQuery};
use crate::domain::foundation::MpId;
use crate::ports::{ActivityReader, AnalyticsError, VoteReader};

/// Query for one page of the activity feed.
#[derive(Debug, Clone)]
pub struct GetActivityFeedQuery {
    /// Restricts the feed to one MP.
    pub mp_id: Option<MpId>,
    /// Opaque cursor from a previous page.
    pub cursor: Option<String>,
    pub limit: i64,
}

/// Result of a successful feed query.
pub type GetActivityFeedResult = ActivityPage;

/// Handler for paging through votes and bill introductions.
pub struct GetActivityFeedHandler {
    activity: Arc<dyn ActivityReader>,
    votes: Arc<dyn VoteReader>,
    max_page_size: usize,
}

impl GetActivityFeedHandler {
    pub fn new(
        activity: Arc<dyn ActivityReader>,
        votes: Arc<dyn VoteReader>,
        max_page_size: usize,
    ) -> Self {
        Self {
            activity,
            votes,
            max_page_size,
        }
    }

    pub async fn handle(
        &self,
        query: GetActivityFeedQuery,
    ) -> Result<GetActivityFeedResult, AnalyticsError> {
        let limit = usize::try_from(query.limit)
            .ok()
            .filter(|limit| (1..=self.max_page_size).contains(limit))
            .ok_or_else(|| {
                AnalyticsError::InvalidInput(format!(
                    "limit must be between 1 and {}, got {}",
                    self.max_page_size, query.limit
                ))
            })?;

        let after = query
            .cursor
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(ActivityCursor::decode)
            .transpose()?;

        if let Some(mp_id) = query.mp_id {
            if self.votes.find_mp(mp_id).await?.is_none() {
                return Err(AnalyticsError::MpNotFound(mp_id));
            }
        }

        // One extra row tells whether another page exists.
        let items = self
            .activity
            .recent_activity(&ActivityQuery {
                mp_id: query.mp_id,
                after,
                limit: limit + 1,
            })
            .await?;

        let page = ActivityPage::from_overfetch(items, limit);
        tracing::debug!(items = page.items.len(), has_more = page.has_more, "Served activity page");
        Ok(page)
    }
}
