//! Construction errors for gatherers.
//!
//! Failures raised *during* a run are plain [`anyhow::Error`] values returned by
//! [`Gatherer::integrate`](crate::Gatherer::integrate) or
//! [`Gatherer::finish`](crate::Gatherer::finish); the driver hands them back to
//! the caller untouched. [`GatherError`] only covers parameters that can be
//! rejected before a run starts.

use thiserror::Error;

/// Error returned by gatherer constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatherError {
    /// A constructor argument has no valid semantics (e.g. a window of size 0).
    #[error("invalid argument `{what}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        what: &'static str,
        /// Human-readable reason.
        reason: String,
    },
}

impl GatherError {
    pub(crate) fn invalid<R: Into<String>>(what: &'static str, reason: R) -> Self {
        Self::InvalidArgument {
            what,
            reason: reason.into(),
        }
    }
}

/// Result type for gatherer construction.
pub type GatherResult<T> = Result<T, GatherError>;
