use std::io;
use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Faults the tour can surface
// =============================================================================

/// Every fault the tour propagates instead of recovering from.
///
/// Nothing in the tour retries: an error travels back to `main`, which ends
/// the process with a failure.
#[derive(Error, Debug)]
pub enum TourError {
    #[error("failed to spawn thread '{name}': {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("shared lock was poisoned by a panicking holder")]
    LockPoisoned,

    #[error("worker thread '{name}' panicked: {message}")]
    WorkerPanicked { name: String, message: String },

    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl TourError {
    pub fn spawn(name: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            name: name.into(),
            source,
        }
    }

    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Builds a `WorkerPanicked` from the payload `JoinHandle::join` hands back.
    pub fn worker_panicked(name: impl Into<String>, payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        Self::WorkerPanicked {
            name: name.into(),
            message,
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for TourError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        TourError::LockPoisoned
    }
}
