//! Errors raised at the edges of the simulation
//!
//! The simulation itself never fails. Only configuration and replay scripts,
//! which come from outside the process, can be rejected.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A configuration value is out of range
    InvalidConfig { field: &'static str, reason: String },
    /// Script events must be sorted by tick
    UnorderedScript { index: usize, tick: u64, previous: u64 },
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config value for `{field}`: {reason}")
            }
            Self::UnorderedScript {
                index,
                tick,
                previous,
            } => write!(
                f,
                "script event {index} at tick {tick} comes after an event at tick {previous}"
            ),
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig { .. } | Self::UnorderedScript { .. } => None,
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
