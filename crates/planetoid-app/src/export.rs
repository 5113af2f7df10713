//! Headless PNG export.
//!
//! Runs the same fixed-step clock as the window, feeding it exactly one tick
//! per frame, and writes each composited frame as `frame_NNNN.png`.

use std::path::{Path, PathBuf};

use planetoid_config::ExportConfig;
use planetoid_sprite::{ImageError, SphereRenderer, composite::compose_frame};
use tracing::{debug, info, instrument};

use crate::frame_clock::FrameClock;

/// Errors produced while exporting frames.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A frame could not be encoded or written.
    #[error("failed to write frame {index}: {source}")]
    Frame { index: u32, source: ImageError },
}

/// File name for frame `index`.
pub fn frame_file_name(index: u32) -> String {
    format!("frame_{index:04}.png")
}

/// Write `config.frames` frames into `config.out_dir`.
///
/// Frame 0 is the renderer's initial state; each later frame advances the
/// spin by one clock tick. Returns the paths written, in order.
#[instrument(skip_all, fields(frames = config.frames))]
pub fn export_frames(
    renderer: &SphereRenderer,
    clock: &mut FrameClock,
    config: &ExportConfig,
) -> Result<Vec<PathBuf>, ExportError> {
    let out_dir: &Path = &config.out_dir;
    std::fs::create_dir_all(out_dir).map_err(|source| ExportError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(config.frames as usize);
    let mut state = renderer.initial_state();

    for index in 0..config.frames {
        if index > 0 {
            let dt = clock.tick_dt();
            clock.advance(dt, |dt| {
                state = renderer.update(state.clone(), dt);
            });
        }

        let frame = compose_frame(&state, config.width, config.height);
        let path = out_dir.join(frame_file_name(index));
        frame
            .save_png(&path)
            .map_err(|source| ExportError::Frame { index, source })?;
        debug!(index, rotation = state.rotation, "Wrote {}", path.display());
        written.push(path);
    }

    info!(
        "Exported {} frames to {}",
        written.len(),
        out_dir.display()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planetoid_sprite::SpriteSettings;

    fn small_renderer() -> SphereRenderer {
        SphereRenderer::new(SpriteSettings {
            planet_size: 32,
            cloud_shrink: 8,
            ..SpriteSettings::default()
        })
    }

    #[test]
    fn test_frame_file_name_is_zero_padded() {
        assert_eq!(frame_file_name(0), "frame_0000.png");
        assert_eq!(frame_file_name(42), "frame_0042.png");
        assert_eq!(frame_file_name(12345), "frame_12345.png");
    }

    #[test]
    fn test_exports_requested_frame_count() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            frames: 3,
            out_dir: tmp.path().join("out"),
            width: 64,
            height: 48,
        };
        let mut clock = FrameClock::default();

        let paths = export_frames(&small_renderer(), &mut clock, &config).unwrap();

        assert_eq!(paths.len(), 3);
        for (i, path) in paths.iter().enumerate() {
            assert!(path.exists(), "missing {}", path.display());
            assert!(path.ends_with(frame_file_name(i as u32)));
        }
        assert_eq!(clock.tick_count(), 2);
    }

    #[test]
    fn test_zero_frames_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            frames: 0,
            out_dir: tmp.path().to_path_buf(),
            width: 64,
            height: 64,
        };
        let mut clock = FrameClock::default();
        let paths = export_frames(&small_renderer(), &mut clock, &config).unwrap();
        assert!(paths.is_empty());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_consecutive_frames_differ() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            frames: 2,
            out_dir: tmp.path().to_path_buf(),
            width: 48,
            height: 48,
        };
        let mut clock = FrameClock::new(1.0, 1.0);
        let paths = export_frames(&small_renderer(), &mut clock, &config).unwrap();
        let first = std::fs::read(&paths[0]).unwrap();
        let second = std::fs::read(&paths[1]).unwrap();
        assert_ne!(first, second, "spin should change the frame");
    }
}
