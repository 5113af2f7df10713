//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_NAME: &str = "planetoid";
const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Planet and cloud sprite settings.
    pub sprite: SpriteConfig,
    /// Frame clock settings.
    pub clock: ClockConfig,
    /// Headless PNG export settings.
    pub export: ExportConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Enable vsync (PresentMode::Fifo).
    pub vsync: bool,
}

/// Sprite generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpriteConfig {
    /// Planet sprite edge length in pixels.
    pub planet_size: u32,
    /// Subtracted from the planet size before the cloud deck is inflated.
    pub cloud_shrink: u32,
    /// Translation applied to cloud sample points.
    pub cloud_offset: f64,
    /// Spin at startup, in radians.
    pub initial_rotation: f64,
    /// Spin speed in radians per second.
    pub spin_rate: f64,
    /// Point light brightness.
    pub light_intensity: f64,
    /// Fixed light position in sprite pixels. `None` picks a random one.
    pub light_source: Option<(f64, f64)>,
    /// Seed for the random light position. `None` draws a fresh seed.
    pub light_seed: Option<u64>,
    /// Seed of the planet and cloud noise fields.
    pub noise_seed: u32,
}

/// Frame clock configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// Sprite regenerations per second.
    pub tick_hz: f64,
    /// Longest frame time fed to the accumulator, in seconds.
    pub max_frame_time: f64,
}

/// Headless export configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Number of frames to write. Zero disables export.
    pub frames: u32,
    /// Directory receiving `frame_NNNN.png` files.
    pub out_dir: PathBuf,
    /// Canvas width of exported frames.
    pub width: u32,
    /// Canvas height of exported frames.
    pub height: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "Planetoid".to_string(),
            vsync: true,
        }
    }
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            planet_size: 128,
            cloud_shrink: 20,
            cloud_offset: 30.0,
            initial_rotation: 0.2,
            spin_rate: 0.1,
            light_intensity: 0.5,
            light_source: None,
            light_seed: None,
            noise_seed: 0,
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_hz: 30.0,
            max_frame_time: 0.25,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            frames: 0,
            out_dir: PathBuf::from("frames"),
            width: 256,
            height: 256,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

/// Where [`Config::load_or_create`] got its config from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Read from an existing file.
    Loaded(PathBuf),
    /// No file existed; defaults were written here.
    Created(PathBuf),
}

impl std::fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loaded(path) => write!(f, "Loaded config from {}", path.display()),
            Self::Created(path) => write!(f, "Created default config at {}", path.display()),
        }
    }
}

impl Config {
    /// Per-user configuration directory, if the OS exposes one.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join(APP_NAME))
    }

    /// Load config from the given directory, or create a default config file.
    ///
    /// Runs before logging is set up; the caller reports the returned
    /// [`ConfigOrigin`].
    pub fn load_or_create(config_dir: &Path) -> Result<(Self, ConfigOrigin), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read_file(&config_path)?;
            Ok((config, ConfigOrigin::Loaded(config_path)))
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            Ok((config, ConfigOrigin::Created(config_path)))
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .separate_tuple_members(false)
            .struct_names(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("planet_size: 128"));
        assert!(ron_str.contains("tick_hz: 30.0"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.sprite.light_source = Some((12.0, 80.0));
        config.sprite.light_seed = Some(5);
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(window: (width: 800), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.sprite, SpriteConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.sprite.planet_size = 96;
        config.sprite.noise_seed = 42;
        config.export.frames = 12;

        config.save(dir.path()).unwrap();
        let (loaded, origin) = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(origin, ConfigOrigin::Loaded(dir.path().join(CONFIG_FILE)));
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let (config, origin) = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(origin, ConfigOrigin::Created(dir.path().join(CONFIG_FILE)));
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_origin_message_names_the_file() {
        let path = PathBuf::from("cfg").join(CONFIG_FILE);
        let created = ConfigOrigin::Created(path.clone()).to_string();
        assert!(created.starts_with("Created default config at "));
        assert!(created.ends_with(&path.display().to_string()));
        assert!(ConfigOrigin::Loaded(path).to_string().starts_with("Loaded config from "));
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        match result {
            Err(ConfigError::ParseError { path, .. }) => assert!(path.ends_with(CONFIG_FILE)),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }
}
