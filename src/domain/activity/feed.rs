//! Activity feed items and cursor-based pagination.
//!
//! The feed is ordered newest first by the key `(occurred_at, kind, id)`.
//! A cursor is the key of the last item of a page, and the next page holds
//! the items strictly below it. Paging with the same cursor returns the same
//! items as long as the underlying rows do not change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{BillId, MpId, Timestamp, ValidationError};
use crate::domain::parliament::VoteValue;

/// What happened.
///
/// The declaration order is the tie-break order within one instant and
/// matches the lexical order of the storage text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    BillIntroduced,
    Vote,
}

impl ActivityKind {
    /// Returns the storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::BillIntroduced => "bill_introduced",
            ActivityKind::Vote => "vote",
        }
    }

    fn cursor_code(&self) -> char {
        match self {
            ActivityKind::BillIntroduced => 'b',
            ActivityKind::Vote => 'v',
        }
    }

    fn from_cursor_code(code: &str) -> Option<Self> {
        match code {
            "b" => Some(ActivityKind::BillIntroduced),
            "v" => Some(ActivityKind::Vote),
            _ => None,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bill_introduced" => Ok(ActivityKind::BillIntroduced),
            "vote" => Ok(ActivityKind::Vote),
            other => Err(ValidationError::invalid_format(
                "activity_kind",
                format!("unknown value '{}'", other),
            )),
        }
    }
}

/// One entry of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub kind: ActivityKind,
    /// Row id within its kind (vote id or bill id).
    pub id: i64,
    pub occurred_at: Timestamp,
    pub mp_id: Option<MpId>,
    pub mp_name: Option<String>,
    pub bill_id: BillId,
    pub bill_title: String,
    /// Present for `Vote` items only.
    pub vote_value: Option<VoteValue>,
}

impl ActivityItem {
    /// Feed position of this item.
    pub fn position(&self) -> ActivityCursor {
        ActivityCursor {
            occurred_at: self.occurred_at,
            kind: self.kind,
            id: self.id,
        }
    }
}

/// Position in the feed. Field order defines the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActivityCursor {
    pub occurred_at: Timestamp,
    pub kind: ActivityKind,
    pub id: i64,
}

impl ActivityCursor {
    /// Opaque text form handed to clients: `<micros>.<kind>.<id>`.
    pub fn encode(&self) -> String {
        format!(
            "{}.{}.{}",
            self.occurred_at.as_unix_micros(),
            self.kind.cursor_code(),
            self.id
        )
    }

    /// Parses a cursor previously produced by [`ActivityCursor::encode`].
    pub fn decode(text: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::invalid_format("cursor", "malformed cursor");

        let mut parts = text.trim().splitn(3, '.');
        let micros = parts
            .next()
            .and_then(|p| p.parse::<i64>().ok())
            .ok_or_else(invalid)?;
        let kind = parts
            .next()
            .and_then(ActivityKind::from_cursor_code)
            .ok_or_else(invalid)?;
        let id = parts
            .next()
            .and_then(|p| p.parse::<i64>().ok())
            .ok_or_else(invalid)?;
        let occurred_at = Timestamp::from_unix_micros(micros).ok_or_else(invalid)?;

        Ok(Self {
            occurred_at,
            kind,
            id,
        })
    }
}

impl fmt::Display for ActivityCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// A feed request after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityQuery {
    pub mp_id: Option<MpId>,
    pub after: Option<ActivityCursor>,
    pub limit: usize,
}

impl ActivityQuery {
    /// Returns true if `item` belongs on a page of this query.
    pub fn admits(&self, item: &ActivityItem) -> bool {
        let mp_matches = self.mp_id.map_or(true, |mp| item.mp_id == Some(mp));
        let after_cursor = self.after.map_or(true, |cursor| item.position() < cursor);
        mp_matches && after_cursor
    }
}

/// One page of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPage {
    pub items: Vec<ActivityItem>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl ActivityPage {
    /// Builds a page from up to `limit + 1` newest-first items.
    ///
    /// The extra item only signals that another page exists.
    pub fn from_overfetch(mut items: Vec<ActivityItem>, limit: usize) -> Self {
        let has_more = items.len() > limit;
        items.truncate(limit);
        let next_cursor = if has_more {
            items.last().map(|item| item.position().encode())
        } else {
            None
        };
        Self {
            items,
            next_cursor,
            has_more,
        }
    }
}

/// Sorts items newest first by feed position.
pub fn sort_newest_first(items: &mut [ActivityItem]) {
    items.sort_by(|a, b| b.position().cmp(&a.position()));
}
