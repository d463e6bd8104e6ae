//! Retain Analytics Engine
//!
//! Monthly user-cohort retention over an append-only login event store.
//!
//! # Overview
//!
//! This crate computes, for users who registered in each of the last few
//! calendar months, how many of them logged in during each subsequent month.
//! It includes:
//!
//! - **Months**: calendar-month arithmetic and labeling
//! - **Window**: the reporting window of cohort months plus the in-progress month
//! - **Report**: cohort datasets with N/A-aware counts and chart flattening
//! - **Engine**: the retention computation over a user registry and event store
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use retain_analytics::{RetentionEngine, DEFAULT_WINDOW_MONTHS};
//! use retain_store::{MemoryStore, MemoryUserSource};
//!
//! let engine = RetentionEngine::new(
//!     Arc::new(MemoryUserSource::new()),
//!     Arc::new(MemoryStore::new()),
//! );
//!
//! let report = engine
//!     .compute_retention(chrono::Utc::now(), DEFAULT_WINDOW_MONTHS)
//!     .await?;
//! ```
//!
//! The computation is pure over its inputs (users, events, `now`): calling it
//! twice with unchanged inputs yields identical output. A count of zero means
//! "no one came back"; `NotApplicable` means the month is not meaningful for
//! that cohort (the cohort is empty, or the month precedes its registration
//! month) and the two are never conflated.

pub mod engine;
pub mod error;
pub mod month;
pub mod palette;
pub mod report;
pub mod window;

#[cfg(test)]
mod report_test;

// Re-exports for convenience
pub use engine::{RetentionEngine, DEFAULT_WINDOW_MONTHS};
pub use error::{Result, RetentionError};
pub use report::{ChartData, ChartSeries, RetentionCount, RetentionDataset, RetentionReport};
pub use window::ReportingWindow;
