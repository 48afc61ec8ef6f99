// src/error.rs
use thiserror::Error;

/// Errors for malformed resolver inputs
///
/// These are the hard failures: the caller handed us something that is not
/// a version vector at all. Unsupported platforms and out-of-range releases
/// are not errors - they resolve to an empty [`crate::Resolution`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("OS version must be a non-empty sequence when the OS tag is set")]
    EmptyVersion,

    #[error("OS version component {value} is not finite")]
    NonFiniteComponent { value: f64 },

    #[error("OS version component {value} is not an integer")]
    NonIntegralComponent { value: f64 },

    #[error("OS version component {value} is negative")]
    NegativeComponent { value: f64 },
}

pub type ResolverResult<T> = Result<T, ResolveError>;
