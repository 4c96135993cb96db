//! Strongly-typed identifier value objects.
//!
//! Identifiers mirror the BIGINT primary keys of the parliamentary store,
//! so every id wraps a positive `i64`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an id, rejecting zero and negative values.
            pub fn new(value: i64) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::invalid_format(
                        $field,
                        format!("must be a positive integer, got {}", value),
                    ));
                }
                Ok(Self(value))
            }

            /// Wraps a value read back from the store without validation.
            pub(crate) fn from_db(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw integer.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim().parse::<i64>().map_err(|_| {
                    ValidationError::invalid_format($field, format!("'{}' is not an integer", s))
                })?;
                Self::new(value)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a Member of Parliament.
    MpId,
    "mp_id"
);

numeric_id!(
    /// Identifier of a bill.
    BillId,
    "bill_id"
);

numeric_id!(
    /// Identifier of a party or parliamentary faction.
    PartyId,
    "party_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mp_id_accepts_positive_values() {
        assert_eq!(MpId::new(42).unwrap().value(), 42);
    }

    #[test]
    fn mp_id_rejects_zero_and_negative() {
        assert!(MpId::new(0).is_err());
        assert!(MpId::new(-3).is_err());
    }

    #[test]
    fn bill_id_parses_from_str() {
        let id: BillId = " 17 ".parse().unwrap();
        assert_eq!(id.value(), 17);
    }

    #[test]
    fn party_id_parse_rejects_garbage() {
        let result = "abc".parse::<PartyId>();
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&MpId::new(7).unwrap()).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn ids_display_raw_value() {
        assert_eq!(format!("{}", BillId::new(99).unwrap()), "99");
    }
}
