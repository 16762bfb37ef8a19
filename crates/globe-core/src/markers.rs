//! Event-to-visual bindings.
//!
//! One binding per event, created once at startup. The 3D position is fixed
//! for the whole session; the scene rotation is applied to the marker group
//! as a whole at projection time, never to individual bindings.

use fnv::FnvHashMap;
use glam::Vec3;

use crate::constants::MARKER_ALTITUDE;
use crate::events::EventRecord;
use crate::geo::{self, ScreenPoint};
use crate::pulse;

/// Overlay label owned by a binding; frontends mirror `text` into their own
/// label element and follow `placement` every frame.
#[derive(Clone, Debug)]
pub struct MarkerLabel {
    pub text: String,
    pub placement: ScreenPoint,
}

/// A registered event marker: core point plus the independently animated
/// pulse shell around it.
#[derive(Clone, Debug)]
pub struct MarkerBinding {
    pub event_index: usize,
    /// Fixed local position on the marker shell, radius `MARKER_ALTITUDE`.
    pub position: Vec3,
    /// Oscillation offset assigned at registration so markers never pulse in
    /// unison. Stored explicitly rather than re-derived from slot order.
    pub phase: f32,
    pub pulse_scale: f32,
    pub pulse_opacity: f32,
    /// Scale is pinned by an active crisis window while set; the idle
    /// oscillator leaves it alone until the burst's reset clears the flag.
    pub crisis_hold: bool,
    pub label: MarkerLabel,
}

/// Append-only registry of marker bindings, iterated in registration order.
#[derive(Default)]
pub struct MarkerRegistry {
    bindings: Vec<MarkerBinding>,
    by_name: FnvHashMap<String, usize>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the binding for an event: fixed position, explicit phase, and
    /// the label text (name plus coordinates to one decimal place).
    ///
    /// Registering the same event index twice is a logged no-op.
    pub fn register(&mut self, event_index: usize, event: &EventRecord) -> &MarkerBinding {
        if let Some(slot) = self
            .bindings
            .iter()
            .position(|b| b.event_index == event_index)
        {
            log::warn!("marker for event {event_index} already registered; ignoring");
            return &self.bindings[slot];
        }
        let slot = self.bindings.len();
        let phase = slot as f32;
        let binding = MarkerBinding {
            event_index,
            position: geo::geo_to_cartesian(event.lat, event.lon, MARKER_ALTITUDE),
            phase,
            pulse_scale: pulse::pulse_scale(0.0, phase),
            pulse_opacity: pulse::pulse_opacity(0.0, phase),
            crisis_hold: false,
            label: MarkerLabel {
                text: format!("{}\n{:.1}°, {:.1}°", event.name, event.lat, event.lon),
                placement: ScreenPoint::default(),
            },
        };
        self.bindings.push(binding);
        self.by_name.insert(event.name.clone(), slot);
        &self.bindings[slot]
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn bindings(&self) -> &[MarkerBinding] {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut [MarkerBinding] {
        &mut self.bindings
    }

    pub fn find_by_event(&self, event_index: usize) -> Option<&MarkerBinding> {
        self.bindings.iter().find(|b| b.event_index == event_index)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&MarkerBinding> {
        self.by_name.get(name).map(|&slot| &self.bindings[slot])
    }
}
