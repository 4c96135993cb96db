//! Activity feed query handlers.

mod get_activity_feed;

pub use get_activity_feed::{GetActivityFeedHandler, GetActivityFeedQuery, GetActivityFeedResult};
