//! Error type shared by the analytics ports and handlers.
//!
//! Three failure classes are kept distinct so callers never confuse a
//! missing record or an outage with a legitimate zero-data result.

use crate::domain::foundation::{ErrorCode, MpId, ValidationError};

/// Errors that can occur while serving analytics requests.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("MP not found: {0}")]
    MpNotFound(MpId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl AnalyticsError {
    /// Returns the client-facing error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalyticsError::MpNotFound(_) => ErrorCode::MpNotFound,
            AnalyticsError::InvalidInput(_) => ErrorCode::InvalidInput,
            AnalyticsError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
        }
    }
}

impl From<sqlx::Error> for AnalyticsError {
    fn from(err: sqlx::Error) -> Self {
        AnalyticsError::StoreUnavailable(err.to_string())
    }
}

impl From<ValidationError> for AnalyticsError {
    fn from(err: ValidationError) -> Self {
        AnalyticsError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_from_sqlx() {
        let error: AnalyticsError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(error, AnalyticsError::StoreUnavailable(_)));
        assert_eq!(error.code(), ErrorCode::StoreUnavailable);
    }

    #[test]
    fn test_error_conversion_from_validation() {
        let error: AnalyticsError = ValidationError::empty_field("cursor").into();
        match error {
            AnalyticsError::InvalidInput(msg) => assert!(msg.contains("cursor")),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_error_messages_and_codes() {
        let error = AnalyticsError::MpNotFound(MpId::new(12).unwrap());
        assert_eq!(format!("{}", error), "MP not found: 12");
        assert_eq!(error.code(), ErrorCode::MpNotFound);

        let error = AnalyticsError::InvalidInput("mp1 and mp2 must differ".to_string());
        assert_eq!(error.code(), ErrorCode::InvalidInput);
    }
}
