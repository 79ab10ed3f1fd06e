//! Configuration errors produced by [`crate::Settings::parse`].

use alloc::string::String;
use thiserror::Error;

/// Failure to construct a [`crate::Tokenizer`] from a settings list.
///
/// Returned by `create`/`Settings::parse` instead of producing a handle. The
/// tokenizer's runtime operations (`next`, `reset`) never fail: malformed
/// UTF-8 and internal invariant violations are programmer errors and panic
/// instead (see the crate-level docs).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    /// An unrecognized settings key was supplied.
    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    /// `maxlen` was not a positive integer.
    #[error("invalid maxlen setting: {0}")]
    InvalidMaxLen(String),

    /// `algorithm` was not one of `simple` or `tr29`.
    #[error("invalid algorithm: {0}")]
    InvalidAlgorithm(String),
}
