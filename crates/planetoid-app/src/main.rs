//! The binary entry point for Planetoid.

use clap::Parser;
use planetoid_app::export::export_frames;
use planetoid_app::frame_clock::FrameClock;
use planetoid_app::platform::PlatformDirs;
use planetoid_app::settings::sprite_settings;
use planetoid_app::window;
use planetoid_config::{CliArgs, Config};
use planetoid_sprite::SphereRenderer;
use tracing::{error, info, warn};

fn main() {
    let args = CliArgs::parse();

    let dirs = match args.config.as_deref() {
        Some(root) => PlatformDirs::with_config_dir(root),
        None => match PlatformDirs::resolve() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("Failed to resolve platform directories: {e}");
                std::process::exit(1);
            }
        },
    };
    if let Err(e) = dirs.create_dirs() {
        eprintln!("Failed to create platform directories: {e}");
        std::process::exit(1);
    }

    let (mut config, origin) = match Config::load_or_create(&dirs.config_dir) {
        Ok((config, origin)) => (config, Ok(origin)),
        Err(e) => (Config::default(), Err(e)),
    };
    config.apply_cli_overrides(&args);

    planetoid_log::init_logging(
        Some(&dirs.log_dir),
        cfg!(debug_assertions),
        Some(&config),
    );
    match origin {
        Ok(origin) => info!("{origin}"),
        Err(e) => warn!("Using default config: {e}"),
    }
    info!("Config directory: {}", dirs.config_dir.display());

    let settings = sprite_settings(&config.sprite, rand::random());
    let renderer = SphereRenderer::new(settings);

    if args.headless {
        if config.export.frames == 0 {
            warn!("Headless run with zero frames requested, nothing to export");
            return;
        }
        let mut clock = FrameClock::new(config.clock.tick_hz, config.clock.max_frame_time);
        if let Err(e) = export_frames(&renderer, &mut clock, &config.export) {
            error!("Export failed: {e}");
            std::process::exit(1);
        }
    } else if let Err(e) = window::run(config, renderer) {
        error!("{e}");
        std::process::exit(1);
    }
}
