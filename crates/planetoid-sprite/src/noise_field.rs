//! Normalised multi-octave simplex noise.
//!
//! Sums octaves of 3D simplex noise, each at a higher frequency and lower
//! amplitude than the last, and divides by the total amplitude so samples
//! stay near `[-1, 1]` no matter how many octaves are layered.

use glam::DVec3;
use noise::{NoiseFn, Simplex};

/// Layering parameters for [`FractalNoise`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalParams {
    /// Number of noise layers summed per sample.
    pub octaves: u32,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
}

impl FractalParams {
    /// Terrain layering used for the planet surface.
    pub const PLANET: Self = Self {
        octaves: 6,
        lacunarity: 2.5,
        persistence: 0.5,
    };

    /// Softer, more persistent layering used for the cloud deck.
    pub const CLOUDS: Self = Self {
        octaves: 6,
        lacunarity: 1.8,
        persistence: 0.8,
    };

    /// Sum of all octave amplitudes, starting from an amplitude of 1.
    pub fn amplitude_sum(&self) -> f64 {
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        for _ in 0..self.octaves {
            sum += amplitude;
            amplitude *= self.persistence;
        }
        sum
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self::PLANET
    }
}

/// Seeded fractal noise field sampled in 3D.
#[derive(Clone)]
pub struct FractalNoise {
    noise: Simplex,
    params: FractalParams,
    amplitude_sum: f64,
}

impl FractalNoise {
    /// Create a noise field for `seed` with the given layering.
    pub fn new(seed: u32, params: FractalParams) -> Self {
        Self {
            noise: Simplex::new(seed),
            params,
            amplitude_sum: params.amplitude_sum(),
        }
    }

    /// Sample the field at `point`.
    ///
    /// Returns a value roughly in `[-1, 1]`. A field with zero octaves
    /// returns `0.0`.
    pub fn sample(&self, point: DVec3) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;

        for _ in 0..self.params.octaves {
            let value = self.noise.get([
                point.x * frequency,
                point.y * frequency,
                point.z * frequency,
            ]);
            total += value * amplitude;

            frequency *= self.params.lacunarity;
            amplitude *= self.params.persistence;
        }

        if self.amplitude_sum > 0.0 {
            total / self.amplitude_sum
        } else {
            0.0
        }
    }
}
