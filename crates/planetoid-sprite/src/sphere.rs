//! Projection of sprite pixels onto a viewer-facing hemisphere.

use glam::{DVec2, DVec3};

/// Divisor applied to rotated pixel coordinates before sampling noise.
pub const NOISE_SCALE: f64 = 100.0;

/// Centre of a `size × size` sprite, in pixels.
#[inline]
pub fn sprite_center(size: u32) -> DVec2 {
    let half = f64::from(size) / 2.0;
    DVec2::new(half, half)
}

/// Lift pixel `(x, y)` of a `size × size` sprite onto the hemisphere.
///
/// Returns `None` when the pixel lies on or outside the inscribed circle.
/// Inside, the depth is `size/2 - distance_to_center`: the rim sits at
/// `z = 0` and the centre bulges toward the viewer.
pub fn surface_point(x: u32, y: u32, size: u32) -> Option<DVec3> {
    let radius = f64::from(size) / 2.0;
    let pixel = DVec2::new(f64::from(x), f64::from(y));
    let distance = pixel.distance(sprite_center(size));
    if distance >= radius {
        return None;
    }
    Some(DVec3::new(pixel.x, pixel.y, radius - distance))
}

/// Rotation pivot for a sprite: its centre, in the image plane.
#[inline]
pub fn rotation_origin(size: u32) -> DVec3 {
    sprite_center(size).extend(0.0)
}
