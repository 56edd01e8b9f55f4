//! Error types for glide_carousel

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating carousel configuration
///
/// Event handling itself never fails; degenerate states turn operations into
/// no-ops instead.
#[derive(Error, Debug)]
pub enum CarouselError {
    /// A configuration value is out of range
    #[error("Invalid carousel config: {0}")]
    InvalidConfig(String),

    /// Failed to read a configuration file
    #[error("Failed to read {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration TOML
    #[error("Failed to parse carousel config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to serialize configuration TOML
    #[error("Failed to serialize carousel config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for glide_carousel operations
pub type Result<T> = std::result::Result<T, CarouselError>;
