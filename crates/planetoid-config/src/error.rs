//! Configuration error types.

use std::path::PathBuf;

/// Errors raised while reading or writing `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config directory or file could not be written.
    #[error("cannot write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid RON for [`Config`](crate::Config).
    #[error("invalid config in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: ron::error::SpannedError,
    },

    /// Serializing the config to RON failed.
    #[error("cannot serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}
