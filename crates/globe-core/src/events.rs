use std::fmt;

/// Event severity as displayed on labels and timeline rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A geolocated event. Immutable once created; the session identifies events
/// by their position in the startup list.
#[derive(Clone, Debug)]
pub struct EventRecord {
    pub name: String,
    pub lat: f32,
    pub lon: f32,
    pub level: Severity,
}

impl EventRecord {
    pub fn new(name: impl Into<String>, lat: f32, lon: f32, level: Severity) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            level,
        }
    }
}

/// Default event set for the demo dashboard.
pub const DEFAULT_EVENTS: [(&str, f32, f32, Severity); 5] = [
    ("Thermal spike", 34.0, 45.0, Severity::Critical),
    ("Unknown signal", 51.5, -0.1, Severity::Info),
    ("Unit BRAVO contact", 35.7, 139.7, Severity::Critical),
    ("Drone recon", -33.9, 151.2, Severity::Info),
    ("Sat uplink window", 40.7, -74.0, Severity::Info),
];

pub fn default_events() -> Vec<EventRecord> {
    DEFAULT_EVENTS
        .iter()
        .map(|&(name, lat, lon, level)| EventRecord::new(name, lat, lon, level))
        .collect()
}
