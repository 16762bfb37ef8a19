//! Crisis bursts: bounded multi-channel effect activations.
//!
//! Each burst flashes the strobe and echo overlays, logs a timeline entry,
//! spikes the threat bars, and sends a shockwave through the marker pulses,
//! committing one reset per channel to the queue. Bursts are independent and
//! may overlap: a later trigger overwrites channel values immediately, and
//! an earlier burst's reset still fires inside the later window, clobbering
//! the channel back to idle. That replicates the source dashboard and is
//! accepted; do not add debouncing.

use std::time::Duration;

use rand::Rng;

use crate::constants::{
    BAR_COUNT, BAR_RESET_DELAY, BAR_SETTLE_MIN, BAR_SETTLE_SPAN, BAR_SPIKE_MIN, BAR_SPIKE_SPAN,
    CRISIS_RIPPLE_SCALE, CRISIS_TARGET_SCALE, ECHO_RESET_DELAY, PULSE_RESET_DELAY,
    STROBE_RESET_DELAY,
};
use crate::markers::MarkerRegistry;
use crate::schedule::{ResetAction, ResetQueue};
use crate::timeline::TimelineFeed;

/// Screen-wide effect channels mutated by crisis bursts.
#[derive(Clone, Copy, Debug)]
pub struct EffectChannels {
    pub strobe_opacity: f32,
    pub echo_opacity: f32,
    pub bars: [f32; BAR_COUNT],
}

impl Default for EffectChannels {
    fn default() -> Self {
        Self {
            strobe_opacity: 0.0,
            echo_opacity: 0.0,
            bars: [BAR_SETTLE_MIN; BAR_COUNT],
        }
    }
}

/// Fire one burst targeting `target` at engine time `now`.
pub fn trigger_burst<R: Rng>(
    target: usize,
    now: Duration,
    registry: &mut MarkerRegistry,
    channels: &mut EffectChannels,
    queue: &mut ResetQueue,
    timeline: &mut TimelineFeed,
    rng: &mut R,
) {
    channels.strobe_opacity = 1.0;
    queue.schedule(now + STROBE_RESET_DELAY, ResetAction::Strobe);

    channels.echo_opacity = 1.0;
    queue.schedule(now + ECHO_RESET_DELAY, ResetAction::Echo);

    timeline.add_entry_now(target, true);

    spike_bars(channels, rng);
    queue.schedule(now + BAR_RESET_DELAY, ResetAction::Bars);

    // Shockwave: the epicenter spikes hard, every other marker ripples.
    for (slot, binding) in registry.bindings_mut().iter_mut().enumerate() {
        binding.pulse_scale = if binding.event_index == target {
            CRISIS_TARGET_SCALE
        } else {
            CRISIS_RIPPLE_SCALE
        };
        binding.crisis_hold = true;
        queue.schedule(now + PULSE_RESET_DELAY, ResetAction::MarkerPulse { marker: slot });
    }
}

/// Jump every threat bar to a spike level in [0.7, 1.0).
pub fn spike_bars<R: Rng>(channels: &mut EffectChannels, rng: &mut R) {
    for bar in channels.bars.iter_mut() {
        *bar = BAR_SPIKE_MIN + rng.gen::<f32>() * BAR_SPIKE_SPAN;
    }
}

/// Drop every threat bar to a settled level in [0.2, 0.4).
pub fn settle_bars<R: Rng>(channels: &mut EffectChannels, rng: &mut R) {
    for bar in channels.bars.iter_mut() {
        *bar = BAR_SETTLE_MIN + rng.gen::<f32>() * BAR_SETTLE_SPAN;
    }
}

/// Run one due reset against the current state.
pub fn apply_reset<R: Rng>(
    action: ResetAction,
    registry: &mut MarkerRegistry,
    channels: &mut EffectChannels,
    rng: &mut R,
) {
    match action {
        ResetAction::Strobe => channels.strobe_opacity = 0.0,
        ResetAction::Echo => channels.echo_opacity = 0.0,
        ResetAction::Bars => settle_bars(channels, rng),
        ResetAction::MarkerPulse { marker } => {
            if let Some(binding) = registry.bindings_mut().get_mut(marker) {
                binding.pulse_scale = 1.0;
                binding.crisis_hold = false;
            }
        }
    }
}
