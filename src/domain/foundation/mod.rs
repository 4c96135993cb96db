//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the parliamentary analytics domain.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{BillId, MpId, PartyId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
