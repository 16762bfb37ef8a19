//! The owned visualization session context.
//!
//! All mutable state lives here and is touched from a single logical thread:
//! the driver calls `advance` once per display frame, and everything else
//! (crisis triggers, resets, beeps) happens inside that call against the
//! same engine clock.

use std::time::Duration;

use glam::Quat;
use instant::Instant;
use rand::prelude::*;
use smallvec::SmallVec;
use thiserror::Error;

use crate::audio::BeepScheduler;
use crate::constants::{CRISIS_TRIGGER_PERIOD, ROTATION_STEP};
use crate::crisis::{self, EffectChannels};
use crate::events::EventRecord;
use crate::frame::{FrameSnapshot, MarkerVisual};
use crate::geo;
use crate::markers::MarkerRegistry;
use crate::pulse;
use crate::schedule::{IntervalTimer, ResetQueue};
use crate::state::{Camera, Viewport};
use crate::timeline::TimelineFeed;

/// Fatal setup failures. There is no recovery path; callers abort.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no events configured")]
    NoEvents,
    #[error("viewport has no area")]
    EmptyViewport,
}

/// Startup configuration. Events are consumed in order; their position in
/// the list is their identity for the whole session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub events: Vec<EventRecord>,
    pub camera: Camera,
    pub viewport: Viewport,
    pub seed: u64,
}

impl SessionConfig {
    pub fn new(events: Vec<EventRecord>, viewport: Viewport, seed: u64) -> Self {
        Self {
            events,
            camera: Camera::framing(viewport),
            viewport,
            seed,
        }
    }
}

pub struct GlobeSession {
    events: Vec<EventRecord>,
    camera: Camera,
    viewport: Viewport,
    registry: MarkerRegistry,
    timeline: TimelineFeed,
    resets: ResetQueue,
    crisis_timer: IntervalTimer,
    beeper: BeepScheduler,
    channels: EffectChannels,
    rng: StdRng,
    elapsed: Duration,
    rotation_y: f32,
    paused: bool,
    last_instant: Option<Instant>,
}

impl GlobeSession {
    /// Build a session: one marker per event (in list order) and a seed
    /// timeline entry per event, oldest at the tail.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        if config.events.is_empty() {
            return Err(SessionError::NoEvents);
        }
        if config.viewport.is_empty() {
            return Err(SessionError::EmptyViewport);
        }

        let mut registry = MarkerRegistry::new();
        let mut timeline = TimelineFeed::new();
        for (index, event) in config.events.iter().enumerate() {
            registry.register(index, event);
            timeline.add_entry_now(index, false);
        }
        log::info!(
            "session ready: {} markers, viewport {}x{}",
            registry.len(),
            config.viewport.width,
            config.viewport.height
        );

        Ok(Self {
            events: config.events,
            camera: config.camera,
            viewport: config.viewport,
            registry,
            timeline,
            resets: ResetQueue::new(),
            crisis_timer: IntervalTimer::new(CRISIS_TRIGGER_PERIOD),
            beeper: BeepScheduler::new(),
            channels: EffectChannels::default(),
            rng: StdRng::seed_from_u64(config.seed),
            elapsed: Duration::ZERO,
            rotation_y: 0.0,
            paused: false,
            last_instant: None,
        })
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    pub fn timeline(&self) -> &TimelineFeed {
        &self.timeline
    }

    pub fn channels(&self) -> &EffectChannels {
        &self.channels
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Surface resize contract: ignores empty sizes, otherwise also refits
    /// the camera aspect.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            log::warn!("ignoring empty viewport");
            return;
        }
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }

    /// One-time audio gate, wired to the first qualifying user gesture.
    pub fn enable_audio(&mut self) {
        self.beeper.enable();
    }

    pub fn audio_enabled(&self) -> bool {
        self.beeper.is_enabled()
    }

    /// While paused, the clock and committed resets still run but nothing
    /// new is triggered and the scene stops animating. Periodic timers keep
    /// counting, so resuming does not replay missed firings.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fire a crisis burst at the given event now. Returns false for an
    /// unknown index.
    pub fn trigger_crisis(&mut self, event_index: usize) -> bool {
        let Some(event) = self.events.get(event_index) else {
            log::warn!("crisis trigger for unknown event {event_index}");
            return false;
        };
        log::info!("crisis burst: {}", event.name);
        crisis::trigger_burst(
            event_index,
            self.elapsed,
            &mut self.registry,
            &mut self.channels,
            &mut self.resets,
            &mut self.timeline,
            &mut self.rng,
        );
        true
    }

    pub fn trigger_crisis_by_name(&mut self, name: &str) -> bool {
        match self.registry.find_by_name(name).map(|b| b.event_index) {
            Some(index) => self.trigger_crisis(index),
            None => false,
        }
    }

    /// Advance the engine by `dt` and produce the frame for the renderer.
    ///
    /// Order within the frame: clock, due resets, periodic triggers, scene
    /// rotation, pulse pass, projection pass.
    pub fn advance(&mut self, dt: Duration) -> FrameSnapshot {
        self.elapsed += dt;
        let now = self.elapsed;

        for action in self.resets.drain_due(now) {
            crisis::apply_reset(action, &mut self.registry, &mut self.channels, &mut self.rng);
        }

        let crisis_fires = self.crisis_timer.poll(now);
        let mut beeps = SmallVec::new();
        if self.paused {
            // Timers counted above/below keep their cadence; firings while
            // paused are dropped, not deferred.
            let mut discarded = SmallVec::new();
            self.beeper.poll(now, &mut self.rng, &mut discarded);
        } else {
            for _ in 0..crisis_fires {
                let target = self.rng.gen_range(0..self.events.len());
                self.trigger_crisis(target);
            }
            self.beeper.poll(now, &mut self.rng, &mut beeps);

            self.rotation_y += ROTATION_STEP;
            pulse::advance_pulses(&mut self.registry, now.as_secs_f32());
        }

        // Projection pass, in lockstep with the group rotation: each label
        // follows its marker's rotated world position.
        let spin = Quat::from_rotation_y(self.rotation_y);
        let mut markers = Vec::with_capacity(self.registry.len());
        let mut labels = Vec::with_capacity(self.registry.len());
        for binding in self.registry.bindings_mut() {
            let world = spin * binding.position;
            let placement = geo::project_to_screen(world, &self.camera, self.viewport);
            binding.label.placement = placement;
            markers.push(MarkerVisual {
                world_position: world,
                scale: binding.pulse_scale,
                opacity: binding.pulse_opacity,
            });
            labels.push(placement);
        }

        FrameSnapshot {
            elapsed: now,
            rotation_y: self.rotation_y,
            markers,
            labels,
            strobe_opacity: self.channels.strobe_opacity,
            echo_opacity: self.channels.echo_opacity,
            bars: self.channels.bars,
            beeps,
        }
    }

    /// Advance with dt measured from a monotonic clock; the first call
    /// renders a zero-dt frame.
    pub fn advance_realtime(&mut self) -> FrameSnapshot {
        let now = Instant::now();
        let dt = self
            .last_instant
            .map(|prev| now - prev)
            .unwrap_or_default();
        self.last_instant = Some(now);
        self.advance(dt)
    }
}
