//! Retention report types
//!
//! The in-process structure handed to presentation: one dataset per cohort,
//! aligned to the window's monthly labels, plus a chart-oriented flattening.

use serde::{Deserialize, Serialize};

/// A single month's retention count for a cohort
///
/// `NotApplicable` is distinct from a count of zero: zero means no cohort
/// member came back that month, while N/A means no retention rate is
/// meaningful (the cohort is empty, or the month precedes the cohort's
/// registration month). Serializes as a number or `null` so consumers can
/// never mistake one for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum RetentionCount {
    /// Distinct cohort members with at least one login that month
    Count(u64),
    /// No meaningful retention rate for this month
    NotApplicable,
}

impl RetentionCount {
    /// Whether this entry carries a numeric count
    pub fn is_applicable(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    /// The count, or `None` for N/A
    pub fn as_option(&self) -> Option<u64> {
        match self {
            Self::Count(n) => Some(*n),
            Self::NotApplicable => None,
        }
    }
}

impl From<Option<u64>> for RetentionCount {
    fn from(value: Option<u64>) -> Self {
        match value {
            Some(n) => Self::Count(n),
            None => Self::NotApplicable,
        }
    }
}

impl From<RetentionCount> for Option<u64> {
    fn from(value: RetentionCount) -> Self {
        value.as_option()
    }
}

impl std::fmt::Display for RetentionCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{}", n),
            Self::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Retention data for one cohort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionDataset {
    /// Cohort label (registration month name)
    pub label: String,
    /// Users who registered during the cohort month
    pub registered: u64,
    /// Per-label-month counts; same length as the report's `monthly_labels`
    pub logged_in: Vec<RetentionCount>,
    /// Display color for this cohort's line
    pub color: String,
}

/// A complete retention report, cohorts oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionReport {
    /// Month labels spanning the reporting window, oldest first
    pub monthly_labels: Vec<String>,
    /// One dataset per cohort, aligned to `monthly_labels`
    pub datasets: Vec<RetentionDataset>,
}

impl RetentionReport {
    /// Check if the report has no cohorts
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Chart y-axis upper bound: the largest cohort size
    ///
    /// A cohort's retained count never exceeds its registered count, so this
    /// bounds every series. Zero when there are no datasets.
    pub fn y_axis_max(&self) -> u64 {
        self.datasets.iter().map(|d| d.registered).max().unwrap_or(0)
    }
}

/// Report flattened for a line-chart consumer
///
/// One label array plus one numeric-or-null series per cohort; N/A entries
/// serialize as `null` so chart renderers leave gaps instead of drawing zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    /// X-axis labels
    pub labels: Vec<String>,
    /// One series per cohort, oldest first
    pub series: Vec<ChartSeries>,
    /// Suggested y-axis upper bound
    pub y_max: u64,
}

/// A single cohort's chart series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Series label ("<month> Cohort")
    pub label: String,
    /// Line color
    pub color: String,
    /// Per-label values; `None` renders as a gap
    pub data: Vec<Option<u64>>,
}

impl ChartData {
    /// Flatten a report into chart form
    pub fn from_report(report: &RetentionReport) -> Self {
        let series = report
            .datasets
            .iter()
            .map(|d| ChartSeries {
                label: format!("{} Cohort", d.label),
                color: d.color.clone(),
                data: d.logged_in.iter().map(|c| c.as_option()).collect(),
            })
            .collect();

        Self {
            labels: report.monthly_labels.clone(),
            series,
            y_max: report.y_axis_max(),
        }
    }
}
