//! The retention engine
//!
//! Buckets users into registration-month cohorts and counts, per cohort and
//! per reporting-window month, how many distinct members logged in. Pure over
//! its inputs (users, events, `now`); no cross-call state.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use retain_store::{EventStore, User, UserSource, YearMonth};

use crate::error::Result;
use crate::month::month_name;
use crate::palette::color_for;
use crate::report::{RetentionCount, RetentionDataset, RetentionReport};
use crate::window::ReportingWindow;

/// Default number of elapsed cohort months in a report
pub const DEFAULT_WINDOW_MONTHS: u32 = 3;

/// Retention engine over a user registry and login event store
pub struct RetentionEngine {
    users: Arc<dyn UserSource>,
    events: Arc<dyn EventStore>,
}

impl RetentionEngine {
    /// Create an engine reading from the given sources
    pub fn new(users: Arc<dyn UserSource>, events: Arc<dyn EventStore>) -> Self {
        Self { users, events }
    }

    /// Compute the cohort retention report as of `now`
    ///
    /// Cohorts cover the `window_months` calendar months before `now`'s
    /// month, oldest first; labels additionally include the in-progress
    /// current month. Every dataset's `logged_in` has exactly one entry per
    /// label: `NotApplicable` for months preceding the cohort (or throughout,
    /// when the cohort is empty), a distinct-member count otherwise.
    ///
    /// Aborts without a partial report if either source is unreachable.
    pub async fn compute_retention(
        &self,
        now: DateTime<Utc>,
        window_months: u32,
    ) -> Result<RetentionReport> {
        let window = ReportingWindow::compute(now, window_months)?;
        let label_months = window.label_months();
        let monthly_labels = window.labels();

        let users = self.users.list_users().await?;

        // With no registry at all there is nothing to cohort; the labels are
        // still derived from `now` so callers can render an empty table.
        if users.is_empty() {
            return Ok(RetentionReport {
                monthly_labels,
                datasets: Vec::new(),
            });
        }

        let mut datasets = Vec::with_capacity(window.cohort_months.len());
        for (index, &cohort_month) in window.cohort_months.iter().enumerate() {
            let dataset = self
                .compute_cohort(cohort_month, index, &users, &label_months)
                .await?;

            tracing::debug!(
                cohort = %cohort_month,
                registered = dataset.registered,
                logged_in = ?dataset.logged_in,
                "computed cohort retention"
            );

            datasets.push(dataset);
        }

        Ok(RetentionReport {
            monthly_labels,
            datasets,
        })
    }

    /// Check that both sources are reachable
    pub async fn health_check(&self) -> Result<()> {
        self.users.health_check().await?;
        self.events.health_check().await?;
        Ok(())
    }

    async fn compute_cohort(
        &self,
        cohort_month: YearMonth,
        index: usize,
        users: &[User],
        label_months: &[YearMonth],
    ) -> Result<RetentionDataset> {
        // Bucketing on month identity keeps an instant anywhere inside the
        // month, including its final sub-second, in that month's cohort.
        let members: Vec<&User> = users
            .iter()
            .filter(|u| u.registration_month() == cohort_month)
            .collect();
        let registered = members.len() as u64;

        // A retention rate is undefined with no denominator, so an empty
        // cohort is N/A throughout, never zero.
        let logged_in = if registered == 0 {
            vec![RetentionCount::NotApplicable; label_months.len()]
        } else {
            let mut member_months = Vec::with_capacity(members.len());
            for member in &members {
                member_months.push(self.events.login_months_for(member.id).await?);
            }

            label_months
                .iter()
                .map(|&month| {
                    if month < cohort_month {
                        RetentionCount::NotApplicable
                    } else {
                        let count = member_months
                            .iter()
                            .filter(|months| months.contains(&month))
                            .count();
                        RetentionCount::Count(count as u64)
                    }
                })
                .collect()
        };

        Ok(RetentionDataset {
            label: month_name(cohort_month).to_string(),
            registered,
            logged_in,
            color: color_for(index).to_string(),
        })
    }
}
