//! Activity module - the paginated "what happened recently" feed.

mod feed;

pub use feed::{
    sort_newest_first, ActivityCursor, ActivityItem, ActivityKind, ActivityPage, ActivityQuery,
};
