//! Error types for SpinReel

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias
pub type GameResult<T> = Result<T, GameError>;
