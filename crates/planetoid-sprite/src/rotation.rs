//! Rotation of sample points about the sprite's vertical axis.

use glam::{DMat3, DVec3};

/// Rotate `point` about the Y axis passing through `origin`.
///
/// The offset `point - origin` is multiplied as a row vector by
///
/// ```text
/// [ cos θ, 0, sin θ]
/// [ 0,     1, 0    ]
/// [-sin θ, 0, cos θ]
/// ```
///
/// and the result is translated back by `origin`. The Y component is
/// untouched, so a pixel only ever sweeps horizontally.
pub fn rotate_y(point: DVec3, origin: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    // v * M == M^T * v; glam multiplies column vectors, so the matrix rows
    // above become this matrix's columns.
    let rotation = DMat3::from_cols(
        DVec3::new(cos, 0.0, sin),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(-sin, 0.0, cos),
    );
    rotation * (point - origin) + origin
}
