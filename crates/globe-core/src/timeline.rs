//! Most-recent-first event log.

use std::collections::VecDeque;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::events::EventRecord;

/// Minute-resolution wall-clock stamp (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallStamp {
    pub hour: u8,
    pub minute: u8,
}

impl WallStamp {
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_epoch_secs(secs)
    }

    pub fn from_epoch_secs(secs: u64) -> Self {
        let day = secs % 86_400;
        Self {
            hour: (day / 3_600) as u8,
            minute: (day % 3_600 / 60) as u8,
        }
    }
}

impl fmt::Display for WallStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One timeline row. Crisis entries are rendered highlighted by frontends.
#[derive(Clone, Copy, Debug)]
pub struct TimelineEntry {
    pub stamp: WallStamp,
    pub event_index: usize,
    pub crisis: bool,
}

impl TimelineEntry {
    /// Row text in the dashboard's format: stamp, name with severity tag,
    /// then the coordinates to one decimal place.
    pub fn row_text(&self, event: &EventRecord) -> String {
        format!(
            "{}  {} — {}  Lat: {:.1}°, Lon: {:.1}°",
            self.stamp, event.name, event.level, event.lat, event.lon
        )
    }
}

/// Append-at-the-head feed of timeline entries. Insertion is a prepend, so
/// iteration order is newest first. Nothing is ever evicted; a long session
/// grows this without bound.
#[derive(Default)]
pub struct TimelineFeed {
    entries: VecDeque<TimelineEntry>,
}

impl TimelineFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, event_index: usize, crisis: bool, stamp: WallStamp) {
        self.entries.push_front(TimelineEntry {
            stamp,
            event_index,
            crisis,
        });
    }

    pub fn add_entry_now(&mut self, event_index: usize, crisis: bool) {
        self.add_entry(event_index, crisis, WallStamp::now());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.entries.iter()
    }

    /// The most recent entry, if any.
    pub fn head(&self) -> Option<&TimelineEntry> {
        self.entries.front()
    }
}
