//! Error types for glyphfolio-config

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for glyphfolio-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or saving the configuration
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration TOML
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The configuration could not be encoded
    #[error("Failed to encode config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The platform has no config directory (no home directory)
    #[error("No config directory available on this platform")]
    NoConfigDir,
}
