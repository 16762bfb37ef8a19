use std::time::Duration;

// Shared tuning constants for the globe engine and its frontends.

// Globe geometry
pub const GLOBE_RADIUS: f32 = 1.0;
pub const MARKER_ALTITUDE: f32 = 1.02; // marker shell sits just above the surface

// Scene rotation, radians per frame (not per second)
pub const ROTATION_STEP: f32 = 0.002;

// Idle pulse oscillation
pub const PULSE_RATE: f32 = 3.0; // radians per elapsed second fed to sin()
pub const PULSE_SCALE_AMPLITUDE: f32 = 0.4;
pub const PULSE_OPACITY_BASE: f32 = 0.3;
pub const PULSE_OPACITY_AMPLITUDE: f32 = 0.3;

// Crisis burst magnitudes: the targeted marker spikes hard, the rest ripple
pub const CRISIS_TARGET_SCALE: f32 = 3.0;
pub const CRISIS_RIPPLE_SCALE: f32 = 1.3;

// Channel reset delays
pub const STROBE_RESET_DELAY: Duration = Duration::from_millis(180);
pub const ECHO_RESET_DELAY: Duration = Duration::from_millis(350);
pub const PULSE_RESET_DELAY: Duration = Duration::from_millis(600);
pub const BAR_RESET_DELAY: Duration = Duration::from_millis(800);

// Threat bars
pub const BAR_COUNT: usize = 4;
pub const BAR_SPIKE_MIN: f32 = 0.7; // spike level in [0.7, 1.0)
pub const BAR_SPIKE_SPAN: f32 = 0.3;
pub const BAR_SETTLE_MIN: f32 = 0.2; // settled level in [0.2, 0.4)
pub const BAR_SETTLE_SPAN: f32 = 0.2;

// Periodic triggers
pub const CRISIS_TRIGGER_PERIOD: Duration = Duration::from_millis(8000);
pub const BEEP_PERIOD: Duration = Duration::from_millis(2500);
pub const BEEP_PROBABILITY: f32 = 0.3;

// Beep envelope handed to the audio sink
pub const BEEP_FREQ_BASE_HZ: f32 = 700.0;
pub const BEEP_FREQ_SPAN_HZ: f32 = 300.0;
pub const BEEP_PEAK_GAIN: f32 = 0.15;
pub const BEEP_FLOOR_GAIN: f32 = 0.001;
pub const BEEP_DECAY: Duration = Duration::from_millis(150);

// Default camera framing (see state.rs)
pub const CAMERA_Z: f32 = 3.2;
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
