//! Bills and their sponsorship records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{BillId, MpId, Timestamp, ValidationError};

/// Legislative status of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    #[default]
    Introduced,
    InCommittee,
    Passed,
    Rejected,
    Withdrawn,
}

impl BillStatus {
    /// Returns true once the bill has been adopted.
    pub fn is_passed(&self) -> bool {
        matches!(self, BillStatus::Passed)
    }

    /// Returns the storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Introduced => "introduced",
            BillStatus::InCommittee => "in_committee",
            BillStatus::Passed => "passed",
            BillStatus::Rejected => "rejected",
            BillStatus::Withdrawn => "withdrawn",
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BillStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "introduced" => Ok(BillStatus::Introduced),
            "in_committee" => Ok(BillStatus::InCommittee),
            "passed" => Ok(BillStatus::Passed),
            "rejected" => Ok(BillStatus::Rejected),
            "withdrawn" => Ok(BillStatus::Withdrawn),
            other => Err(ValidationError::invalid_format(
                "bill_status",
                format!("unknown value '{}'", other),
            )),
        }
    }
}

/// A bill as registered in parliament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: BillId,
    pub title: String,
    pub status: BillStatus,
    pub introduced_at: Timestamp,
}

/// Whether the MP authored the bill or joined as co-sponsor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorRole {
    Primary,
    CoSponsor,
}

/// An MP's sponsorship of a bill, carrying the bill's current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsorship {
    pub bill_id: BillId,
    pub mp_id: MpId,
    pub role: SponsorRole,
    pub bill_status: BillStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_passed_is_passed() {
        assert!(BillStatus::Passed.is_passed());
        assert!(!BillStatus::Introduced.is_passed());
        assert!(!BillStatus::Rejected.is_passed());
    }

    #[test]
    fn status_roundtrips_through_storage_text() {
        for status in [
            BillStatus::Introduced,
            BillStatus::InCommittee,
            BillStatus::Passed,
            BillStatus::Rejected,
            BillStatus::Withdrawn,
        ] {
            assert_eq!(status.as_str().parse::<BillStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("vetoed".parse::<BillStatus>().is_err());
    }
}
