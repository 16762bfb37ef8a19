//! Idle "breathing" oscillation for marker pulse shells.

use crate::constants::{
    PULSE_OPACITY_AMPLITUDE, PULSE_OPACITY_BASE, PULSE_RATE, PULSE_SCALE_AMPLITUDE,
};
use crate::markers::MarkerRegistry;

/// Pulse shell scale at elapsed seconds `t` for a marker with `phase`.
#[inline]
pub fn pulse_scale(t: f32, phase: f32) -> f32 {
    1.0 + PULSE_SCALE_AMPLITUDE * (PULSE_RATE * t + phase).sin()
}

/// Pulse shell opacity at elapsed seconds `t` for a marker with `phase`.
#[inline]
pub fn pulse_opacity(t: f32, phase: f32) -> f32 {
    PULSE_OPACITY_BASE + PULSE_OPACITY_AMPLITUDE * (1.0 + (PULSE_RATE * t + phase).sin()) / 2.0
}

/// Per-frame idle pass over every binding. Opacity always follows the
/// oscillator; scale does too unless a crisis window currently pins it. The
/// stored phase is never touched, so a marker re-joins the oscillation with
/// no drift once its hold clears.
pub fn advance_pulses(registry: &mut MarkerRegistry, t: f32) {
    for binding in registry.bindings_mut() {
        binding.pulse_opacity = pulse_opacity(t, binding.phase);
        if !binding.crisis_hold {
            binding.pulse_scale = pulse_scale(t, binding.phase);
        }
    }
}
