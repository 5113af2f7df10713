//! Translation of loaded configuration into renderer settings.

use planetoid_config::SpriteConfig;
use planetoid_sprite::{DVec2, LightPlacement, SpriteSettings};

/// Build [`SpriteSettings`] from `config`.
///
/// A fixed `light_source` wins; otherwise the light is seeded from
/// `light_seed`, or from `fallback_seed` when no seed is configured.
pub fn sprite_settings(config: &SpriteConfig, fallback_seed: u64) -> SpriteSettings {
    let light = match (config.light_source, config.light_seed) {
        (Some((x, y)), _) => LightPlacement::Fixed(DVec2::new(x, y)),
        (None, Some(seed)) => LightPlacement::Seeded(seed),
        (None, None) => LightPlacement::Seeded(fallback_seed),
    };

    SpriteSettings {
        planet_size: config.planet_size,
        cloud_shrink: config.cloud_shrink,
        cloud_offset: config.cloud_offset,
        initial_rotation: config.initial_rotation,
        spin_rate: config.spin_rate,
        light_intensity: config.light_intensity,
        light,
        noise_seed: config.noise_seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_over() {
        let settings = sprite_settings(&SpriteConfig::default(), 9);
        let expected = SpriteSettings {
            light: LightPlacement::Seeded(9),
            ..SpriteSettings::default()
        };
        assert_eq!(settings, expected);
    }

    #[test]
    fn test_fixed_light_wins() {
        let config = SpriteConfig {
            light_source: Some((3.0, 4.0)),
            light_seed: Some(1),
            ..Default::default()
        };
        assert_eq!(
            sprite_settings(&config, 0).light,
            LightPlacement::Fixed(DVec2::new(3.0, 4.0))
        );
    }

    #[test]
    fn test_configured_seed_beats_fallback() {
        let config = SpriteConfig {
            light_seed: Some(55),
            ..Default::default()
        };
        assert_eq!(sprite_settings(&config, 0).light, LightPlacement::Seeded(55));
    }
}
