//! Cloud deck image generation.

use glam::DVec3;

use crate::image::RasterImage;
use crate::noise_field::FractalNoise;
use crate::rotation::rotate_y;
use crate::sphere::{NOISE_SCALE, rotation_origin, surface_point};

/// Pixels added to the requested cloud size so the deck overhangs the planet.
pub const CLOUD_INFLATION: u32 = 30;

/// Default translation applied to cloud sample points.
pub const DEFAULT_CLOUD_OFFSET: f64 = 30.0;

/// Noise values strictly above this become cloud.
pub const CLOUD_THRESHOLD: f64 = 0.1;

/// Colour written for cloud pixels.
pub const CLOUD_RGBA: [u8; 4] = [255, 255, 255, 100];

/// Inputs for one cloud image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudParams {
    /// Requested edge length, before [`CLOUD_INFLATION`] is added.
    pub size: u32,
    /// Spin about the vertical axis, in radians.
    pub rotation: f64,
    /// Translation added to every sample point before rotating.
    pub offset: f64,
}

impl CloudParams {
    /// Edge length of the rendered image.
    pub fn image_size(&self) -> u32 {
        self.size + CLOUD_INFLATION
    }
}

/// Cloud colour for a noise sample, or `None` for clear sky.
pub fn cloud_color(noise_value: f64) -> Option<[u8; 4]> {
    (noise_value > CLOUD_THRESHOLD).then_some(CLOUD_RGBA)
}

/// Colour of cloud pixel `(x, y)` in the inflated image, if any.
pub fn cloud_pixel(x: u32, y: u32, params: &CloudParams, noise: &FractalNoise) -> Option<[u8; 4]> {
    let size = params.image_size();
    let point = surface_point(x, y, size)? + DVec3::splat(params.offset);
    let rotated = rotate_y(point, rotation_origin(size), params.rotation);
    cloud_color(noise.sample(rotated / NOISE_SCALE))
}

/// Render the unlit cloud deck for `params`.
///
/// The image is `params.size + CLOUD_INFLATION` pixels wide. Pixels are
/// either fully transparent or [`CLOUD_RGBA`].
pub fn render_clouds(params: &CloudParams, noise: &FractalNoise) -> RasterImage {
    let size = params.image_size();
    let mut image = RasterImage::square(size);

    for y in 0..size {
        for x in 0..size {
            if let Some(rgba) = cloud_pixel(x, y, params, noise) {
                image.set_pixel(x, y, rgba);
            }
        }
    }

    image
}
