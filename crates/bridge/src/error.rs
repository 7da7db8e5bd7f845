//! Error types.
//!
//! Unrecognised validator kinds are not errors: they fall back to the
//! `Custom` adapter. The only failures are the ones raised by the wrapped
//! rule set while validating, and they pass through untouched.

/// Failure raised by a wrapped rule set.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The instance handed to `validate` is not the model the rule set checks.
    #[error("cannot validate this instance: the rule set validates `{expected}`")]
    IncompatibleInstance {
        /// Type name of the model the rule set expects.
        expected: &'static str,
    },

    /// Any other failure inside the rule-set library.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl SourceError {
    /// Creates an incompatible-instance error for model type `T`.
    pub fn incompatible<T: ?Sized>() -> Self {
        Self::IncompatibleInstance {
            expected: std::any::type_name::<T>(),
        }
    }

    /// Wraps an arbitrary library error.
    pub fn other(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(error.into())
    }
}

/// Error returned by [`ModelValidator::validate`](crate::model::ModelValidator::validate).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The wrapped rule set failed; propagated as-is.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Result alias with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
