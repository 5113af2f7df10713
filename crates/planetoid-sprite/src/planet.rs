//! Planet surface image generation.

use glam::DVec2;

use crate::bands::TerrainBand;
use crate::image::RasterImage;
use crate::light::LightSource;
use crate::noise_field::FractalNoise;
use crate::rotation::rotate_y;
use crate::sphere::{NOISE_SCALE, rotation_origin, surface_point};

/// Default planet sprite edge length in pixels.
pub const DEFAULT_PLANET_SIZE: u32 = 128;

/// Inputs for one planet image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetParams {
    /// Sprite edge length in pixels.
    pub size: u32,
    /// Spin about the vertical axis, in radians.
    pub rotation: f64,
    /// Screen-space light shading the surface.
    pub light: LightSource,
}

/// Colour of planet pixel `(x, y)`, or `None` if it falls outside the disc.
pub fn planet_pixel(x: u32, y: u32, params: &PlanetParams, noise: &FractalNoise) -> Option<[u8; 4]> {
    let point = surface_point(x, y, params.size)?;
    let rotated = rotate_y(point, rotation_origin(params.size), params.rotation);

    let lighting = params
        .light
        .lighting_at(DVec2::new(f64::from(x), f64::from(y)));
    let value = noise.sample(rotated / NOISE_SCALE);

    let [r, g, b] = TerrainBand::classify(value).shaded_color(lighting);
    Some([r, g, b, 255])
}

/// Render the lit planet disc for `params`.
///
/// Pixels outside the inscribed circle stay `(0, 0, 0, 0)`; every pixel
/// inside is opaque.
pub fn render_planet(params: &PlanetParams, noise: &FractalNoise) -> RasterImage {
    let mut image = RasterImage::square(params.size);

    for y in 0..params.size {
        for x in 0..params.size {
            if let Some(rgba) = planet_pixel(x, y, params, noise) {
                image.set_pixel(x, y, rgba);
            }
        }
    }

    image
}
