use std::time::{Duration, Instant};

use moviehub_core::search::{total_pages, Debouncer, DEFAULT_SEARCH_DEBOUNCE};

#[test]
fn fires_only_after_the_delay() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(Duration::from_millis(500));

    assert_eq!(debouncer.schedule("inc", start), None);
    assert_eq!(debouncer.poll(start + Duration::from_millis(499)), None);
    assert!(debouncer.is_pending());
    assert_eq!(debouncer.poll(start + Duration::from_millis(500)), Some("inc"));
    assert!(!debouncer.is_pending());
    assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
}

#[test]
fn new_input_cancels_and_reschedules() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(Duration::from_millis(500));

    debouncer.schedule("inc", start);
    let cancelled = debouncer.schedule("incep", start + Duration::from_millis(300));
    assert_eq!(cancelled, Some("inc"));
    assert_eq!(debouncer.deadline(), Some(start + Duration::from_millis(800)));

    // The first deadline passes without firing.
    assert_eq!(debouncer.poll(start + Duration::from_millis(600)), None);
    assert_eq!(debouncer.poll(start + Duration::from_millis(800)), Some("incep"));
}

#[test]
fn cancel_drops_pending_value() {
    let start = Instant::now();
    let mut debouncer: Debouncer<String> = Debouncer::default();
    assert_eq!(debouncer.delay(), DEFAULT_SEARCH_DEBOUNCE);

    debouncer.schedule("matrix".to_string(), start);
    assert_eq!(debouncer.cancel().as_deref(), Some("matrix"));
    assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
    assert_eq!(debouncer.deadline(), None);
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(5, 0), 0);
}
