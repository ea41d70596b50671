//! Error types for base parsing and comparison

use thiserror::Error;

/// Errors raised while parsing or ordering distribution bases
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistroError {
    /// The string did not contain exactly one `@`
    #[error("Invalid base string '{0}'. Format should be '<distribution>@<series>'")]
    InvalidBaseString(String),

    /// An ordering was requested between bases of different distributions
    #[error("Different distributions ({left} and {right}) do not have comparable versions.")]
    IncompatibleDistributions { left: String, right: String },
}

pub type Result<T> = std::result::Result<T, DistroError>;
