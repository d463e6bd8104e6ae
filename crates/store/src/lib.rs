//! Retain Store - login event capture and data access
//!
//! Provides the data layer for retain's cohort retention analytics:
//!
//! - **Events**: `LoginEvent`, `User`, and the `YearMonth` calendar bucket
//! - **Backends**: `EventStore` and `UserSource` traits with in-memory implementations
//! - **Recorder**: fire-and-forget login capture hooked to the host's login notification
//! - **Clock**: injectable wall clock for deterministic tests
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use retain_store::{LoginRecorder, MemoryStore, SystemClock};
//!
//! let store = Arc::new(MemoryStore::new());
//! let recorder = LoginRecorder::new(store.clone(), Arc::new(SystemClock));
//!
//! // In the host's login-success hook:
//! recorder.record_login(42).await;
//! ```
//!
//! The store is append-only: events accumulate without expiry, and reads
//! deduplicate to distinct calendar months per user so the analytics layer
//! never has to see raw event volume.

pub mod backend;
pub mod clock;
pub mod error;
pub mod event;
pub mod recorder;

#[cfg(test)]
mod backend_test;

// Re-exports for convenience
pub use backend::memory::{MemoryStore, MemoryUserSource};
pub use backend::{EventStore, UserSource};
pub use clock::{Clock, SystemClock};
pub use error::{Result, StoreError};
pub use event::{LoginEvent, User, UserId, YearMonth};
pub use recorder::LoginRecorder;
