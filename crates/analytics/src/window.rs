//! The reporting window
//!
//! A window covers the most recent fully (or partially) elapsed calendar
//! months before `now`'s month - those are the cohort months - plus the
//! current, in-progress month appended as an extra partial-month label.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use retain_store::YearMonth;

use crate::error::{Result, RetentionError};
use crate::month::{month_name, months_back};

/// The months a retention report spans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingWindow {
    /// Cohort months, oldest first; each yields one dataset
    pub cohort_months: Vec<YearMonth>,
    /// The in-progress month containing `now`
    pub current_month: YearMonth,
}

impl ReportingWindow {
    /// Compute the window of `window_months` calendar months ending the month
    /// before the one containing `now`
    pub fn compute(now: DateTime<Utc>, window_months: u32) -> Result<Self> {
        if window_months == 0 {
            return Err(RetentionError::InvalidWindow(
                "window must span at least one month".to_string(),
            ));
        }

        let cohort_months = (1..=window_months)
            .rev()
            .map(|back| months_back(now, back))
            .collect();

        Ok(Self {
            cohort_months,
            current_month: months_back(now, 0),
        })
    }

    /// All months carrying a label, oldest first
    ///
    /// The current partial month is appended after the cohort months unless it
    /// is already the last entry, so a report has `window_months` or
    /// `window_months + 1` columns.
    pub fn label_months(&self) -> Vec<YearMonth> {
        let mut months = self.cohort_months.clone();
        if months.last() != Some(&self.current_month) {
            months.push(self.current_month);
        }
        months
    }

    /// Human-readable labels aligned to `label_months`
    pub fn labels(&self) -> Vec<String> {
        self.label_months()
            .into_iter()
            .map(|m| month_name(m).to_string())
            .collect()
    }
}
