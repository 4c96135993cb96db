//! Parliament module - the recorded facts the analytics read.
//!
//! Members, parties, bills, sponsorships and votes. All of these are
//! produced by ingestion and treated as immutable here.

mod bill;
mod member;
mod vote;
mod vote_value;

pub use bill::{Bill, BillStatus, SponsorRole, Sponsorship};
pub use member::{Mp, Party};
pub use vote::{MpVoteRecord, PartyMemberVote, Vote};
pub use vote_value::VoteValue;
