//! Tests for the draft debounce scheduler and the binary draft cache.
mod common;
use common::*;
use ruleflow::draft::{DraftCache, DEBOUNCE_WINDOW};
use ruleflow::prelude::*;
use std::fs;
use std::time::{Duration, Instant};

#[test]
fn test_scheduler_starts_suppressed() {
    let mut scheduler = DraftScheduler::new();
    assert!(!scheduler.is_released());

    let now = Instant::now();
    scheduler.graph_changed(GraphDocument::seed(), now);
    assert!(!scheduler.has_pending());
    assert_eq!(scheduler.poll(now + Duration::from_secs(10)), None);
}

#[test]
fn test_scheduler_fires_after_a_quiet_window() {
    let mut scheduler = DraftScheduler::with_window(Duration::from_millis(100));
    scheduler.release();

    let t0 = Instant::now();
    let document = create_decision_flow();
    scheduler.graph_changed(document.clone(), t0);
    assert!(scheduler.has_pending());

    assert_eq!(scheduler.poll(t0 + Duration::from_millis(99)), None);
    assert_eq!(
        scheduler.poll(t0 + Duration::from_millis(100)),
        Some(document)
    );

    // The capture is handed out once.
    assert!(!scheduler.has_pending());
    assert_eq!(scheduler.poll(t0 + Duration::from_secs(1)), None);
}

#[test]
fn test_scheduler_changes_re_arm_the_window() {
    let mut scheduler = DraftScheduler::with_window(Duration::from_millis(100));
    scheduler.release();

    let t0 = Instant::now();
    scheduler.graph_changed(GraphDocument::seed(), t0);
    let latest = create_sibling_flow();
    scheduler.graph_changed(latest.clone(), t0 + Duration::from_millis(50));

    // The first deadline has passed, but the second change replaced it.
    assert_eq!(scheduler.poll(t0 + Duration::from_millis(120)), None);
    assert_eq!(
        scheduler.poll(t0 + Duration::from_millis(150)),
        Some(latest)
    );
}

#[test]
fn test_scheduler_cancel_drops_the_pending_capture() {
    let mut scheduler = DraftScheduler::with_window(Duration::from_millis(10));
    scheduler.release();

    scheduler.graph_changed(GraphDocument::seed(), Instant::now());
    scheduler.cancel();
    assert!(!scheduler.has_pending());
    assert_eq!(scheduler.poll(Instant::now() + Duration::from_secs(5)), None);
}

#[test]
fn test_scheduler_default_window_is_one_second() {
    assert_eq!(DEBOUNCE_WINDOW, Duration::from_secs(1));

    let mut scheduler = DraftScheduler::new();
    scheduler.release();
    let t0 = Instant::now();
    scheduler.graph_changed(GraphDocument::seed(), t0);
    assert_eq!(scheduler.poll(t0 + Duration::from_millis(999)), None);
    assert!(scheduler.poll(t0 + Duration::from_secs(1)).is_some());
}

#[test]
fn test_cache_store_get_and_remove() {
    let mut cache = DraftCache::new();
    assert!(cache.is_empty());

    cache.store("pkg-1", create_decision_flow());
    let record = cache.get("pkg-1").unwrap();
    assert_eq!(record.graph_data, create_decision_flow());
    assert!(record.timestamp > 0);
    assert_eq!(cache.len(), 1);

    // Storing again replaces the draft for that package.
    cache.store("pkg-1", GraphDocument::seed());
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("pkg-1").unwrap().graph_data, GraphDocument::seed());

    assert!(cache.remove("pkg-1").is_some());
    assert!(cache.is_empty());
    assert!(cache.get("pkg-1").is_none());
}

#[test]
fn test_cache_round_trips_through_its_file() {
    let path = temp_file_path("draft_round_trip", "bin");
    let mut cache = DraftCache::new();
    cache.store("loans", create_decision_flow());
    cache.store("claims", create_diamond_flow());
    cache.save(&path).unwrap();

    let loaded = DraftCache::from_file(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.get("loans"), cache.get("loans"));
    assert_eq!(loaded.get("claims"), cache.get("claims"));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_cache_from_bytes_rejects_garbage() {
    let err = DraftCache::from_bytes(&[0xFF, 0x00, 0x01]).unwrap_err();
    assert!(err.to_string().starts_with("Failed to decode draft cache:"));
}

#[test]
fn test_cache_load_or_default_swallows_a_missing_file() {
    let path = temp_file_path("never_written", "bin");
    let cache = DraftCache::load_or_default(&path);
    assert!(cache.is_empty());
}

#[test]
fn test_cache_save_reports_an_unwritable_path() {
    let cache = DraftCache::new();
    let err = cache
        .save("/nonexistent-ruleflow-dir/drafts.bin")
        .unwrap_err();
    assert!(matches!(err, DraftError::Io { .. }));
    assert!(err.to_string().starts_with("Draft cache file"));
}
