//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Planetoid command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "planetoid", about = "Spinning procedural planet sprite")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Planet sprite edge length in pixels.
    #[arg(long)]
    pub size: Option<u32>,

    /// Noise seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Seed for the random light position.
    #[arg(long)]
    pub light_seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write PNG frames instead of opening a window.
    #[arg(long)]
    pub headless: bool,

    /// Number of frames to export in headless mode.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Output directory for exported frames.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(size) = args.size {
            self.sprite.planet_size = size;
        }
        if let Some(seed) = args.seed {
            self.sprite.noise_seed = seed;
        }
        if let Some(seed) = args.light_seed {
            self.sprite.light_seed = Some(seed);
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(frames) = args.frames {
            self.export.frames = frames;
        }
        if let Some(ref dir) = args.out_dir {
            self.export.out_dir = dir.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            size: Some(256),
            light_seed: Some(77),
            out_dir: Some(PathBuf::from("/tmp/frames")),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.sprite.planet_size, 256);
        assert_eq!(config.sprite.light_seed, Some(77));
        assert_eq!(config.export.out_dir, PathBuf::from("/tmp/frames"));
        // Non-overridden fields retain defaults
        assert_eq!(config.window.height, 480);
        assert_eq!(config.sprite.noise_seed, 0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "planetoid",
            "--headless",
            "--frames",
            "10",
            "--seed",
            "3",
        ]);
        assert!(args.headless);
        assert_eq!(args.frames, Some(10));
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.width, None);
    }
}
