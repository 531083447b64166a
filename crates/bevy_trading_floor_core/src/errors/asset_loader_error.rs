use thiserror::Error;

use super::InvalidGridConfigError;

/// Possible errors that can be produced by the floor config loader
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AssetLoaderError {
    /// An [IO](std::io) Error
    #[error("Could not read floor config: {0}")]
    Io(#[from] std::io::Error),
    /// A [RON](ron) Error
    #[error("Could not parse RON: {0}")]
    RonSpannedError(#[from] ron::error::SpannedError),
    #[error("Floor config has an invalid desk grid: {0}")]
    InvalidGrid(#[from] InvalidGridConfigError),
}
