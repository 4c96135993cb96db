//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Months, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC, at microsecond precision.
///
/// Microseconds match PostgreSQL `timestamptz`, so a value read back from
/// the database or from a feed cursor compares equal to the one written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "DateTime<Utc>", into = "DateTime<Utc>")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>, dropping sub-microsecond
    /// digits.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(6))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Steps back the given number of calendar months.
    ///
    /// Day-of-month is clamped to the target month (31 March minus one
    /// month is 28/29 February). Saturates at the minimum representable
    /// instant.
    pub fn minus_months(&self, months: u32) -> Self {
        self.0
            .checked_sub_months(Months::new(months))
            .map(Self)
            .unwrap_or(Self(DateTime::<Utc>::MIN_UTC))
    }

    /// Creates a timestamp from Unix microseconds.
    ///
    /// Microseconds match the resolution of PostgreSQL `timestamptz`.
    pub fn from_unix_micros(micros: i64) -> Option<Self> {
        let secs = micros.div_euclid(1_000_000);
        let nanos = (micros.rem_euclid(1_000_000) * 1_000) as u32;
        Utc.timestamp_opt(secs, nanos).single().map(Self)
    }

    /// Returns the timestamp as Unix microseconds.
    pub fn as_unix_micros(&self) -> i64 {
        self.0.timestamp_micros()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}
