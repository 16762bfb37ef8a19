//! Per-frame output handed to rendering surfaces.

use std::time::Duration;

use glam::Vec3;
use smallvec::SmallVec;

use crate::audio::BeepRequest;
use crate::constants::BAR_COUNT;
use crate::geo::ScreenPoint;

/// Per-marker values the renderer needs this frame. `world_position` has the
/// group rotation already applied.
#[derive(Clone, Copy, Debug)]
pub struct MarkerVisual {
    pub world_position: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

/// Everything external surfaces consume for one frame: the renderer draws
/// from `markers`, the overlay moves labels to `labels` (parallel to
/// registration order), the HUD reads the flash opacities and bar levels,
/// and the audio sink takes `beeps`.
#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    pub elapsed: Duration,
    pub rotation_y: f32,
    pub markers: Vec<MarkerVisual>,
    pub labels: Vec<ScreenPoint>,
    pub strobe_opacity: f32,
    pub echo_opacity: f32,
    pub bars: [f32; BAR_COUNT],
    pub beeps: SmallVec<[BeepRequest; 2]>,
}
