//! Tests for the in-memory backends

use chrono::{TimeZone, Utc};

use crate::backend::memory::{parse_timestamp, MemoryStore, MemoryUserSource};
use crate::backend::{EventStore, UserSource};
use crate::event::{LoginEvent, User, YearMonth};

#[tokio::test]
async fn test_append_and_read_months() {
    let store = MemoryStore::new();

    let feb = Utc.with_ymd_and_hms(2024, 2, 10, 8, 0, 0).unwrap();
    let mar = Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 0).unwrap();

    store.append(LoginEvent::new(1, feb)).await.unwrap();
    store.append(LoginEvent::new(1, mar)).await.unwrap();

    let months = store.login_months_for(1).await.unwrap();
    let expected: Vec<YearMonth> = vec![YearMonth::new(2024, 2), YearMonth::new(2024, 3)];
    assert_eq!(months.into_iter().collect::<Vec<_>>(), expected);
}

#[tokio::test]
async fn test_same_month_logins_deduplicated() {
    let store = MemoryStore::new();

    for day in [1, 15, 28] {
        let at = Utc.with_ymd_and_hms(2024, 2, day, 9, 0, 0).unwrap();
        store.append(LoginEvent::new(1, at)).await.unwrap();
    }

    // Three events stored, one distinct month read back
    assert_eq!(store.event_count(), 3);
    let months = store.login_months_for(1).await.unwrap();
    assert_eq!(months.len(), 1);
    assert!(months.contains(&YearMonth::new(2024, 2)));
}

#[tokio::test]
async fn test_unknown_user_has_no_months() {
    let store = MemoryStore::new();
    let months = store.login_months_for(999).await.unwrap();
    assert!(months.is_empty());
}

#[tokio::test]
async fn test_malformed_timestamp_skipped() {
    let store = MemoryStore::new();

    store.append_raw(1, "2024-02-10 08:00:00");
    store.append_raw(1, "not a timestamp");
    store.append_raw(1, "2024-03-05T12:30:00+00:00");

    // The malformed record is skipped, the rest are read normally
    let months = store.login_months_for(1).await.unwrap();
    assert_eq!(months.len(), 2);
    assert!(months.contains(&YearMonth::new(2024, 2)));
    assert!(months.contains(&YearMonth::new(2024, 3)));
}

#[tokio::test]
async fn test_events_are_per_user() {
    let store = MemoryStore::new();

    let at = Utc.with_ymd_and_hms(2024, 2, 10, 8, 0, 0).unwrap();
    store.append(LoginEvent::new(1, at)).await.unwrap();

    assert!(!store.login_months_for(1).await.unwrap().is_empty());
    assert!(store.login_months_for(2).await.unwrap().is_empty());
}

#[test]
fn test_parse_timestamp_formats() {
    assert!(parse_timestamp("2024-02-10T08:00:00+00:00").is_ok());
    assert!(parse_timestamp("2024-02-10T08:00:00Z").is_ok());
    assert!(parse_timestamp("2024-02-10 08:00:00").is_ok());
    assert!(parse_timestamp("2024-02-10").is_err());
    assert!(parse_timestamp("").is_err());
}

#[tokio::test]
async fn test_user_source_roundtrip() {
    let registered = Utc.with_ymd_and_hms(2024, 1, 31, 23, 0, 0).unwrap();
    let source = MemoryUserSource::with_users(vec![User::new(1, registered)]);
    source.add_user(User::new(2, registered));

    let users = source.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[1].id, 2);
}

#[tokio::test]
async fn test_health_checks() {
    let store = MemoryStore::new();
    let source = MemoryUserSource::new();
    assert!(store.health_check().await.is_ok());
    assert!(source.health_check().await.is_ok());
    assert_eq!(store.name(), "memory");
    assert_eq!(source.name(), "memory");
}
