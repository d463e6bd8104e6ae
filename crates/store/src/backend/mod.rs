//! Data access traits and implementations

pub mod memory;

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::Result;
use crate::event::{LoginEvent, User, UserId, YearMonth};

/// Append-only login event store
///
/// Events accumulate without expiry; reads deduplicate to distinct calendar
/// months so callers count month-bucket membership, never raw event volume.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append a login event
    ///
    /// No validation of `user_id` and no deduplication; the same user logging
    /// in twice in a month simply appends two events.
    async fn append(&self, event: LoginEvent) -> Result<()>;

    /// Distinct calendar months in which the user logged in
    async fn login_months_for(&self, user_id: UserId) -> Result<BTreeSet<YearMonth>>;

    /// Check if the store is reachable
    async fn health_check(&self) -> Result<()>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// Read-only view of the host's user registry
#[async_trait]
pub trait UserSource: Send + Sync {
    /// All registered users with their registration instants
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Check if the registry is reachable
    async fn health_check(&self) -> Result<()>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}
