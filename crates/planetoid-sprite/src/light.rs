//! Screen-space point light used to shade the planet.

use glam::DVec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default light intensity.
pub const DEFAULT_INTENSITY: f64 = 0.5;

/// A point light in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSource {
    /// Light position in image pixels (top-down).
    pub position: DVec2,
    /// Brightness; the falloff reaches full light within `intensity * 100`
    /// pixels of the source.
    pub intensity: f64,
}

impl LightSource {
    /// A light at `position` with the given intensity.
    pub fn new(position: DVec2, intensity: f64) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// A light at a random integer pixel in `[0, size] × [0, size]`.
    pub fn random<R: Rng>(rng: &mut R, size: u32, intensity: f64) -> Self {
        let x = rng.random_range(0..=size);
        let y = rng.random_range(0..=size);
        Self::new(DVec2::new(f64::from(x), f64::from(y)), intensity)
    }

    /// A random light drawn from a ChaCha stream seeded with `seed`.
    pub fn seeded(seed: u64, size: u32, intensity: f64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::random(&mut rng, size, intensity)
    }

    /// Light reaching the pixel at `pixel`, clamped to `[0, 1]`.
    pub fn lighting_at(&self, pixel: DVec2) -> f64 {
        lighting(self.intensity, self.position.distance(pixel))
    }
}

/// Inverse-distance falloff: `min(1, intensity * 100 / (distance + 1))`.
///
/// Evaluated as the reciprocal of `(distance + 1) / (intensity * 100)`, so
/// exact products such as `145 * 50 / 58` truncate to 125 rather than 124.
/// `distance` is expected to be non-negative.
pub fn lighting(intensity: f64, distance: f64) -> f64 {
    (1.0 / ((distance + 1.0) / (intensity * 100.0))).min(1.0)
}
