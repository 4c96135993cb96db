//! Activity feed reader port.

use async_trait::async_trait;

use super::AnalyticsError;
use crate::domain::activity::{ActivityItem, ActivityQuery};

/// Read-only access to the merged feed of votes and bill introductions.
#[async_trait]
pub trait ActivityReader: Send + Sync {
    /// Returns up to `query.limit` items admitted by the query, newest first.
    async fn recent_activity(
        &self,
        query: &ActivityQuery,
    ) -> Result<Vec<ActivityItem>, AnalyticsError>;
}
