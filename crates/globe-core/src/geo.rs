//! Geographic-to-screen projection.
//!
//! Both functions are pure and run every frame for every marker, so they must
//! stay allocation-free and numerically stable at the poles and the
//! antimeridian (degenerate inputs yield finite, merely-degenerate geometry).

use glam::Vec3;

use crate::state::{Camera, Viewport};

/// Convert latitude/longitude (degrees) to a point on a sphere of `radius`.
///
/// Latitude is measured from the +Y pole (`phi = 90° - lat`) and longitude is
/// offset by 180° so the equirectangular texture seam lands behind the globe.
pub fn geo_to_cartesian(lat_deg: f32, lon_deg: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();
    Vec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// A projected overlay position in viewport pixels.
///
/// `visible` reflects the sign of the normalized depth: markers in front of
/// the camera test positive, the near-degenerate band does not. This is an
/// approximation of occlusion, not a real depth test.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub visible: bool,
}

impl ScreenPoint {
    const HIDDEN: Self = Self {
        x: 0.0,
        y: 0.0,
        visible: false,
    };
}

/// Project a world-space point to viewport pixel coordinates.
///
/// ndc.x/ndc.y map to pixels with the usual half-plus-half flip on Y; the
/// point is reported hidden (at a finite position) when the homogeneous
/// divide would be degenerate.
pub fn project_to_screen(world: Vec3, camera: &Camera, viewport: Viewport) -> ScreenPoint {
    let clip = camera.view_projection() * world.extend(1.0);
    if !clip.w.is_finite() || clip.w.abs() <= f32::EPSILON {
        return ScreenPoint::HIDDEN;
    }
    let ndc = clip.truncate() / clip.w;
    if !ndc.is_finite() {
        return ScreenPoint::HIDDEN;
    }
    ScreenPoint {
        x: (ndc.x * 0.5 + 0.5) * viewport.width,
        y: (-ndc.y * 0.5 + 0.5) * viewport.height,
        visible: ndc.z > 0.0,
    }
}
