//! Tests for report types and serialization

use crate::palette::PALETTE;
use crate::report::{ChartData, RetentionCount, RetentionDataset, RetentionReport};

fn sample_report() -> RetentionReport {
    RetentionReport {
        monthly_labels: vec![
            "January".to_string(),
            "February".to_string(),
            "March".to_string(),
            "April".to_string(),
        ],
        datasets: vec![
            RetentionDataset {
                label: "January".to_string(),
                registered: 10,
                logged_in: vec![
                    RetentionCount::Count(0),
                    RetentionCount::Count(4),
                    RetentionCount::Count(3),
                    RetentionCount::Count(2),
                ],
                color: PALETTE[0].to_string(),
            },
            RetentionDataset {
                label: "February".to_string(),
                registered: 25,
                logged_in: vec![
                    RetentionCount::NotApplicable,
                    RetentionCount::Count(5),
                    RetentionCount::Count(4),
                    RetentionCount::Count(1),
                ],
                color: PALETTE[1].to_string(),
            },
        ],
    }
}

#[test]
fn test_count_display() {
    assert_eq!(RetentionCount::Count(7).to_string(), "7");
    assert_eq!(RetentionCount::Count(0).to_string(), "0");
    assert_eq!(RetentionCount::NotApplicable.to_string(), "N/A");
}

#[test]
fn test_count_serializes_null_vs_zero() {
    // Zero and N/A must never be conflated on the wire
    let json = serde_json::to_string(&vec![
        RetentionCount::Count(0),
        RetentionCount::NotApplicable,
        RetentionCount::Count(3),
    ])
    .unwrap();
    assert_eq!(json, "[0,null,3]");
}

#[test]
fn test_count_deserializes_from_null() {
    let counts: Vec<RetentionCount> = serde_json::from_str("[0,null,3]").unwrap();
    assert_eq!(
        counts,
        vec![
            RetentionCount::Count(0),
            RetentionCount::NotApplicable,
            RetentionCount::Count(3),
        ]
    );
}

#[test]
fn test_count_as_option() {
    assert_eq!(RetentionCount::Count(5).as_option(), Some(5));
    assert_eq!(RetentionCount::NotApplicable.as_option(), None);
    assert!(RetentionCount::Count(0).is_applicable());
    assert!(!RetentionCount::NotApplicable.is_applicable());
}

#[test]
fn test_y_axis_max_is_largest_cohort() {
    let report = sample_report();
    assert_eq!(report.y_axis_max(), 25);
}

#[test]
fn test_y_axis_max_empty_report() {
    let report = RetentionReport {
        monthly_labels: vec!["April".to_string()],
        datasets: Vec::new(),
    };
    assert!(report.is_empty());
    assert_eq!(report.y_axis_max(), 0);
}

#[test]
fn test_chart_data_from_report() {
    let report = sample_report();
    let chart = ChartData::from_report(&report);

    assert_eq!(chart.labels, report.monthly_labels);
    assert_eq!(chart.y_max, 25);
    assert_eq!(chart.series.len(), 2);

    let january = &chart.series[0];
    assert_eq!(january.label, "January Cohort");
    assert_eq!(january.color, PALETTE[0]);
    assert_eq!(january.data, vec![Some(0), Some(4), Some(3), Some(2)]);

    // N/A becomes a null gap, not zero
    let february = &chart.series[1];
    assert_eq!(february.data, vec![None, Some(5), Some(4), Some(1)]);
}

#[test]
fn test_report_json_roundtrip() {
    let report = sample_report();
    let json = serde_json::to_string(&report).unwrap();
    let parsed: RetentionReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}
