//! Error types for engine construction and runs.

use crate::config::ConfigError;
use hotspot_sim::SimError;
use hotspot_stats::StatError;
use std::error::Error;
use std::fmt;

/// Errors from [`NeutralHotspotEngine`](crate::NeutralHotspotEngine).
///
/// A run either returns the full matrix or one of these; no partial rows
/// are ever returned.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// The simulation parameters do not fit the neighbour source.
    Params(SimError),
    /// A trial's simulation failed.
    Sim {
        /// Trial index.
        trial: usize,
        /// Underlying error.
        error: SimError,
    },
    /// A trial's surface could not be scored (e.g. it diverged to
    /// non-finite values).
    Stat {
        /// Trial index.
        trial: usize,
        /// Underlying error.
        error: StatError,
    },
    /// The run was cancelled through its [`CancelToken`](crate::CancelToken).
    Cancelled,
    /// The worker pool could not be created.
    ThreadPool {
        /// Pool builder message.
        reason: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid engine config: {e}"),
            Self::Params(e) => write!(f, "invalid simulation parameters: {e}"),
            Self::Sim { trial, error } => write!(f, "trial {trial}: simulation failed: {error}"),
            Self::Stat { trial, error } => write!(f, "trial {trial}: statistic failed: {error}"),
            Self::Cancelled => write!(f, "run cancelled"),
            Self::ThreadPool { reason } => write!(f, "failed to build worker pool: {reason}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Params(e) => Some(e),
            Self::Sim { error, .. } => Some(error),
            Self::Stat { error, .. } => Some(error),
            Self::Cancelled | Self::ThreadPool { .. } => None,
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
