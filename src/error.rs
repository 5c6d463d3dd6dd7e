//! Crate-level error types.

use std::fmt;

/// Errors produced by the spina crate.
#[derive(Debug)]
pub enum SpinaError {
    /// Playback rate that is zero, negative, or not finite.
    InvalidRate(f64),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Trajectory file is not valid JSON or not an array of step objects.
    TrajectoryParse(String),
    /// Trajectory JSON parsed but its frames disagree on shape.
    TrajectoryShape(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for SpinaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRate(sps) => {
                write!(f, "steps per second must be positive, got {sps}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::TrajectoryParse(msg) => {
                write!(f, "trajectory parse error: {msg}")
            }
            Self::TrajectoryShape(msg) => {
                write!(f, "malformed trajectory: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for SpinaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SpinaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SpinaError {
    fn from(e: serde_json::Error) -> Self {
        Self::TrajectoryParse(e.to_string())
    }
}
