//! Procedural planet sprites: a noise-textured, spinning sphere with a cloud deck.
//!
//! Each pixel of a square bitmap is lifted onto a hemisphere, rotated about the
//! vertical axis, and used to sample fractal simplex noise. The planet maps the
//! sample to a terrain band shaded by a point light; the clouds threshold it.

mod bands;
mod clouds;
mod image;
mod light;
mod noise_field;
mod planet;
mod renderer;
mod rotation;
mod sphere;

pub mod composite;

pub use bands::TerrainBand;
pub use clouds::{
    CLOUD_INFLATION, CLOUD_RGBA, CLOUD_THRESHOLD, CloudParams, DEFAULT_CLOUD_OFFSET, cloud_color,
    cloud_pixel, render_clouds,
};
pub use image::{ImageError, RasterImage};
pub use light::{DEFAULT_INTENSITY, LightSource, lighting};
pub use noise_field::{FractalNoise, FractalParams};
pub use planet::{DEFAULT_PLANET_SIZE, PlanetParams, planet_pixel, render_planet};
pub use renderer::{
    DEFAULT_CLOUD_SHRINK, DEFAULT_INITIAL_ROTATION, DEFAULT_SPIN_RATE, LightPlacement,
    RenderState, SphereRenderer, SpriteSettings, advance_rotation,
};
pub use rotation::rotate_y;
pub use sphere::{NOISE_SCALE, rotation_origin, sprite_center, surface_point};

pub use glam::{DVec2, DVec3};
