//! Beep scheduling and the audio synthesis seam.
//!
//! The engine decides when a beep happens and what envelope it gets; turning
//! a `BeepRequest` into sound (an oscillator into a gain ramp, a sample
//! buffer, or just a log line) belongs to the frontend behind `AudioSink`.

use std::time::Duration;

use rand::Rng;
use smallvec::SmallVec;

use crate::constants::{
    BEEP_DECAY, BEEP_FLOOR_GAIN, BEEP_FREQ_BASE_HZ, BEEP_FREQ_SPAN_HZ, BEEP_PEAK_GAIN,
    BEEP_PERIOD, BEEP_PROBABILITY,
};
use crate::schedule::IntervalTimer;

/// One requested tone burst: frequency plus an exponential decay envelope
/// from `peak_gain` down to `floor_gain` over `decay`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeepRequest {
    pub frequency_hz: f32,
    pub peak_gain: f32,
    pub floor_gain: f32,
    pub decay: Duration,
}

pub trait AudioSink {
    fn beep(&mut self, request: BeepRequest);
}

/// Probability-gated periodic beeper.
///
/// Stays silent until the one-time enable call (the "first user gesture"
/// gate); enabling again is a no-op. The timer keeps running while disabled
/// so enabling late does not replay missed periods.
#[derive(Clone, Copy, Debug)]
pub struct BeepScheduler {
    timer: IntervalTimer,
    enabled: bool,
}

impl Default for BeepScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl BeepScheduler {
    pub fn new() -> Self {
        Self {
            timer: IntervalTimer::new(BEEP_PERIOD),
            enabled: false,
        }
    }

    pub fn enable(&mut self) {
        if self.enabled {
            log::debug!("audio already enabled; ignoring");
            return;
        }
        log::info!("audio enabled");
        self.enabled = true;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Poll at engine time `now`; each crossed period has a fixed chance of
    /// producing one request.
    pub fn poll<R: Rng>(
        &mut self,
        now: Duration,
        rng: &mut R,
        out_requests: &mut SmallVec<[BeepRequest; 2]>,
    ) {
        let fired = self.timer.poll(now);
        if !self.enabled {
            return;
        }
        for _ in 0..fired {
            if rng.gen::<f32>() < BEEP_PROBABILITY {
                out_requests.push(BeepRequest {
                    frequency_hz: BEEP_FREQ_BASE_HZ + rng.gen::<f32>() * BEEP_FREQ_SPAN_HZ,
                    peak_gain: BEEP_PEAK_GAIN,
                    floor_gain: BEEP_FLOOR_GAIN,
                    decay: BEEP_DECAY,
                });
            }
        }
    }
}
