//! Per-tick regeneration of the planet and cloud sprites.
//!
//! [`SphereRenderer`] owns everything that stays fixed for a run (noise
//! fields, light, sizes). [`RenderState`] is the only thing that changes: it is
//! passed into [`SphereRenderer::update`] and a fresh one is returned.

use std::f64::consts::TAU;
use std::time::Instant;

use glam::DVec2;
use tracing::{debug, info};

use crate::clouds::{CloudParams, DEFAULT_CLOUD_OFFSET, render_clouds};
use crate::image::RasterImage;
use crate::light::{DEFAULT_INTENSITY, LightSource};
use crate::noise_field::{FractalNoise, FractalParams};
use crate::planet::{DEFAULT_PLANET_SIZE, PlanetParams, render_planet};

/// Rotation at the first frame, in radians.
pub const DEFAULT_INITIAL_ROTATION: f64 = 0.2;

/// Radians of spin per second of elapsed time.
pub const DEFAULT_SPIN_RATE: f64 = 0.1;

/// How much smaller than the planet the cloud size is requested.
pub const DEFAULT_CLOUD_SHRINK: u32 = 20;

/// Where the planet's light comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightPlacement {
    /// A fixed pixel position.
    Fixed(DVec2),
    /// A random pixel drawn from a ChaCha stream with this seed.
    Seeded(u64),
}

/// Fixed settings for a [`SphereRenderer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteSettings {
    /// Planet sprite edge length in pixels.
    pub planet_size: u32,
    /// Subtracted from `planet_size` to get the requested cloud size.
    pub cloud_shrink: u32,
    /// Translation applied to cloud sample points.
    pub cloud_offset: f64,
    /// Rotation of the first frame.
    pub initial_rotation: f64,
    /// Radians per second.
    pub spin_rate: f64,
    /// Light brightness.
    pub light_intensity: f64,
    /// Light position policy.
    pub light: LightPlacement,
    /// Seed shared by the planet and cloud noise fields.
    pub noise_seed: u32,
}

impl Default for SpriteSettings {
    fn default() -> Self {
        Self {
            planet_size: DEFAULT_PLANET_SIZE,
            cloud_shrink: DEFAULT_CLOUD_SHRINK,
            cloud_offset: DEFAULT_CLOUD_OFFSET,
            initial_rotation: DEFAULT_INITIAL_ROTATION,
            spin_rate: DEFAULT_SPIN_RATE,
            light_intensity: DEFAULT_INTENSITY,
            light: LightPlacement::Seeded(0),
            noise_seed: 0,
        }
    }
}

impl SpriteSettings {
    /// Requested cloud size before inflation.
    pub fn cloud_size(&self) -> u32 {
        self.planet_size.saturating_sub(self.cloud_shrink)
    }
}

/// The frame being displayed: current spin plus both sprites drawn with it.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    /// Spin in `[0, 2π)`.
    pub rotation: f64,
    /// Lit planet disc, top-down.
    pub planet: RasterImage,
    /// Cloud deck, top-down.
    pub clouds: RasterImage,
}

/// Advance `rotation` by `dt * spin_rate`, wrapped into `[0, 2π)`.
pub fn advance_rotation(rotation: f64, dt: f64, spin_rate: f64) -> f64 {
    (rotation + dt * spin_rate).rem_euclid(TAU)
}

/// Regenerates both sprites for a given rotation.
pub struct SphereRenderer {
    settings: SpriteSettings,
    light: LightSource,
    planet_noise: FractalNoise,
    cloud_noise: FractalNoise,
}

impl SphereRenderer {
    /// Build a renderer, resolving the light position once.
    pub fn new(settings: SpriteSettings) -> Self {
        let light = match settings.light {
            LightPlacement::Fixed(position) => {
                LightSource::new(position, settings.light_intensity)
            }
            LightPlacement::Seeded(seed) => {
                LightSource::seeded(seed, settings.planet_size, settings.light_intensity)
            }
        };
        info!(
            planet_size = settings.planet_size,
            cloud_size = settings.cloud_size() + crate::clouds::CLOUD_INFLATION,
            light_x = light.position.x,
            light_y = light.position.y,
            "Sphere renderer ready"
        );

        Self {
            settings,
            light,
            planet_noise: FractalNoise::new(settings.noise_seed, FractalParams::PLANET),
            cloud_noise: FractalNoise::new(settings.noise_seed, FractalParams::CLOUDS),
        }
    }

    /// The resolved light.
    pub fn light(&self) -> &LightSource {
        &self.light
    }

    /// Planet image at `rotation`.
    pub fn planet(&self, rotation: f64) -> RasterImage {
        let params = PlanetParams {
            size: self.settings.planet_size,
            rotation,
            light: self.light,
        };
        render_planet(&params, &self.planet_noise)
    }

    /// Cloud image at `rotation`.
    pub fn clouds(&self, rotation: f64) -> RasterImage {
        let params = CloudParams {
            size: self.settings.cloud_size(),
            rotation,
            offset: self.settings.cloud_offset,
        };
        render_clouds(&params, &self.cloud_noise)
    }

    /// Draw both sprites at `rotation`.
    pub fn render(&self, rotation: f64) -> RenderState {
        let started = Instant::now();
        let state = RenderState {
            rotation,
            planet: self.planet(rotation),
            clouds: self.clouds(rotation),
        };
        debug!(
            rotation,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Regenerated sprites"
        );
        state
    }

    /// First frame, drawn at the configured initial rotation.
    pub fn initial_state(&self) -> RenderState {
        self.render(advance_rotation(self.settings.initial_rotation, 0.0, 0.0))
    }

    /// Advance the spin by `dt` seconds and redraw both sprites from scratch.
    pub fn update(&self, state: RenderState, dt: f64) -> RenderState {
        let rotation = advance_rotation(state.rotation, dt, self.settings.spin_rate);
        self.render(rotation)
    }
}
