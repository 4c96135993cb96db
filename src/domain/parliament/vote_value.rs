//! VoteValue enum for individual recorded votes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How a member voted on a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteValue {
    For,
    Against,
    Abstain,
    Absent,
}

impl VoteValue {
    /// Values that count as a cast vote, in tie-break precedence.
    ///
    /// When a party's members split evenly, the earlier value wins.
    pub const CAST_PRECEDENCE: [VoteValue; 3] =
        [VoteValue::For, VoteValue::Against, VoteValue::Abstain];

    /// Returns true unless the member was absent.
    pub fn is_cast(&self) -> bool {
        !matches!(self, VoteValue::Absent)
    }

    /// Returns the storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteValue::For => "for",
            VoteValue::Against => "against",
            VoteValue::Abstain => "abstain",
            VoteValue::Absent => "absent",
        }
    }
}

impl fmt::Display for VoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VoteValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "for" => Ok(VoteValue::For),
            "against" => Ok(VoteValue::Against),
            "abstain" => Ok(VoteValue::Abstain),
            "absent" => Ok(VoteValue::Absent),
            other => Err(ValidationError::invalid_format(
                "vote_value",
                format!("unknown value '{}'", other),
            )),
        }
    }
}
