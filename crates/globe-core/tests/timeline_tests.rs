// Integration tests for the timeline feed.

use globe_core::{EventRecord, Severity, TimelineFeed, WallStamp};

fn stamp(hour: u8, minute: u8) -> WallStamp {
    WallStamp { hour, minute }
}

#[test]
fn insertion_is_prepend_newest_first() {
    let mut feed = TimelineFeed::new();
    for index in 0..4 {
        feed.add_entry(index, false, stamp(12, index as u8));
    }
    assert_eq!(feed.len(), 4);
    let order: Vec<usize> = feed.entries().map(|e| e.event_index).collect();
    assert_eq!(order, vec![3, 2, 1, 0], "entry 0 must be the most recent");
    assert_eq!(feed.head().map(|e| e.event_index), Some(3));
}

#[test]
fn crisis_flag_is_recorded_per_entry() {
    let mut feed = TimelineFeed::new();
    feed.add_entry(0, false, stamp(9, 0));
    feed.add_entry(0, true, stamp(9, 1));
    let flags: Vec<bool> = feed.entries().map(|e| e.crisis).collect();
    assert_eq!(flags, vec![true, false]);
}

#[test]
fn wall_stamp_minute_resolution() {
    assert_eq!(WallStamp::from_epoch_secs(0), stamp(0, 0));
    assert_eq!(WallStamp::from_epoch_secs(13 * 3600 + 5 * 60 + 59), stamp(13, 5));
    assert_eq!(WallStamp::from_epoch_secs(86_399), stamp(23, 59));
    assert_eq!(WallStamp::from_epoch_secs(86_400), stamp(0, 0), "wraps at midnight");
}

#[test]
fn wall_stamp_displays_zero_padded() {
    assert_eq!(stamp(7, 3).to_string(), "07:03");
    assert_eq!(stamp(23, 59).to_string(), "23:59");
}

#[test]
fn row_text_matches_dashboard_template() {
    let event = EventRecord::new("Unknown signal", 51.5, -0.1, Severity::Info);
    let mut feed = TimelineFeed::new();
    feed.add_entry(1, false, stamp(9, 7));
    let head = feed.head().expect("entry");
    assert_eq!(
        head.row_text(&event),
        "09:07  Unknown signal — INFO  Lat: 51.5°, Lon: -0.1°"
    );
}

#[test]
fn feed_grows_without_eviction() {
    // No eviction policy exists; a long session just accumulates rows.
    let mut feed = TimelineFeed::new();
    for i in 0..1000 {
        feed.add_entry(i % 5, i % 7 == 0, stamp(0, 0));
    }
    assert_eq!(feed.len(), 1000);
}
