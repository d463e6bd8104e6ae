//! In-memory backends
//!
//! Used for tests and for single-process deployments that recompute from a
//! host-managed registry. The event store keeps the raw appended timestamp
//! strings per user, mirroring the unbounded per-user appends of a key/value
//! meta-store: parsing happens on read, and a record that fails to parse is
//! skipped with a warning rather than failing the whole read.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::backend::{EventStore, UserSource};
use crate::error::{Result, StoreError};
use crate::event::{LoginEvent, User, UserId, YearMonth};

/// In-memory append-only login event store
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Raw RFC 3339 timestamps per user, in append order
    events: RwLock<HashMap<UserId, Vec<String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw timestamp string without validation
    ///
    /// Test hook for exercising the malformed-record path; `append` is the
    /// normal write side.
    pub fn append_raw(&self, user_id: UserId, timestamp: impl Into<String>) {
        self.events
            .write()
            .entry(user_id)
            .or_default()
            .push(timestamp.into());
    }

    /// Total number of stored events across all users
    pub fn event_count(&self) -> usize {
        self.events.read().values().map(Vec::len).sum()
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn append(&self, event: LoginEvent) -> Result<()> {
        self.append_raw(event.user_id, event.occurred_at.to_rfc3339());
        Ok(())
    }

    async fn login_months_for(&self, user_id: UserId) -> Result<BTreeSet<YearMonth>> {
        let events = self.events.read();
        let raw = match events.get(&user_id) {
            Some(raw) => raw,
            None => return Ok(BTreeSet::new()),
        };

        let mut months = BTreeSet::new();
        for timestamp in raw {
            match parse_timestamp(timestamp) {
                Ok(at) => {
                    months.insert(YearMonth::from_datetime(at));
                }
                Err(e) => {
                    // One bad record must not blank the whole report
                    tracing::warn!(user_id, error = %e, "skipping malformed login timestamp");
                }
            }
        }

        Ok(months)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Parse a stored timestamp string
///
/// Accepts RFC 3339 (the recorder's write format) and the `YYYY-MM-DD
/// HH:MM:SS` form legacy stores hand back.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .map_err(|_| StoreError::MalformedTimestamp(s.to_string()))
}

/// In-memory user registry
#[derive(Debug, Default)]
pub struct MemoryUserSource {
    users: RwLock<Vec<User>>,
}

impl MemoryUserSource {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a list of users
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Register a user
    pub fn add_user(&self, user: User) {
        self.users.write().push(user);
    }
}

#[async_trait]
impl UserSource for MemoryUserSource {
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().clone())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
