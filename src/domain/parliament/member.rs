//! Members of Parliament and the parties they sit with.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MpId, PartyId};

/// A Member of Parliament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mp {
    pub id: MpId,
    pub name: String,
    /// `None` for independents.
    pub party_id: Option<PartyId>,
}

/// A party or parliamentary faction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    pub short_name: String,
}
