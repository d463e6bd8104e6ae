//! Event and user value types
//!
//! Plain data carried between the recorder, the store backends, and the
//! analytics layer.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// User identifier assigned by the host's user registry
pub type UserId = u64;

/// A single successful-login event
///
/// Created exactly once per login by the recorder; never mutated or deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginEvent {
    /// The user who logged in
    pub user_id: UserId,
    /// Wall-clock instant at which the login was recorded
    pub occurred_at: DateTime<Utc>,
}

impl LoginEvent {
    /// Create a new login event
    pub fn new(user_id: UserId, occurred_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            occurred_at,
        }
    }
}

/// A registered user as reported by the user registry
///
/// The registry owns this data; the registration instant is immutable once
/// set and the store only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,
    /// Instant the user registered
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record
    pub fn new(id: UserId, registered_at: DateTime<Utc>) -> Self {
        Self { id, registered_at }
    }

    /// The calendar month the user registered in
    pub fn registration_month(&self) -> YearMonth {
        YearMonth::from_datetime(self.registered_at)
    }
}

/// A calendar month bucket (year + month)
///
/// Ordering is chronological, so a `BTreeSet<YearMonth>` iterates oldest
/// first. Serialized as `{ "year": 2024, "month": 3 }`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct YearMonth {
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
}

impl YearMonth {
    /// Create a year-month bucket
    ///
    /// `month` must be in 1..=12; out-of-range values are clamped.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// Bucket an instant into its calendar month
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
