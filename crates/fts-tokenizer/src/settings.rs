//! Tokenizer configuration: which algorithm to run and the token length cap.

use alloc::string::{String, ToString};

use crate::error::TokenizerError;

/// Word-segmentation algorithm a [`crate::Tokenizer`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Fast ASCII/punctuation-table splitter (§4.2 of the design notes).
    #[default]
    Simple,
    /// Adaptation of Unicode word-break rules (§4.3).
    Tr29,
}

/// Resolved configuration for a [`crate::Tokenizer`].
///
/// Built via [`Settings::parse`] from an ordered list of `(key, value)`
/// pairs, the same shape FTS backends hand a tokenizer factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub(crate) algorithm: Algorithm,
    pub(crate) max_length: usize,
}

/// Default token length cap in bytes, matching the reference tokenizer.
const DEFAULT_MAX_LENGTH: usize = 30;

impl Default for Settings {
    fn default() -> Self {
        Self { algorithm: Algorithm::default(), max_length: DEFAULT_MAX_LENGTH }
    }
}

impl Settings {
    /// Parse settings from an ordered `(key, value)` pair list.
    ///
    /// Recognized keys:
    /// - `algorithm`: `"simple"` or `"tr29"` (default `"simple"`).
    /// - `maxlen`: a positive integer byte cap (default `30`).
    /// - `search`: accepted and ignored; the reference tokenizer used it to
    ///   relax query-time tokenization, which this crate does not implement
    ///   (see the crate-level Non-goals).
    ///
    /// Later occurrences of the same key override earlier ones, matching
    /// how FTS backends fold repeated settings.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::UnknownSetting`], [`TokenizerError::InvalidAlgorithm`],
    /// or [`TokenizerError::InvalidMaxLen`] if a key or value is malformed.
    pub fn parse<'a, I>(pairs: I) -> Result<Self, TokenizerError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut settings = Self::default();
        for (key, value) in pairs {
            match key {
                "algorithm" => settings.algorithm = parse_algorithm(value)?,
                "maxlen" => settings.max_length = parse_max_length(value)?,
                "search" => {}
                other => return Err(TokenizerError::UnknownSetting(other.to_string())),
            }
        }
        Ok(settings)
    }

    /// The algorithm this configuration selects.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The token length cap in bytes.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

fn parse_algorithm(value: &str) -> Result<Algorithm, TokenizerError> {
    match value {
        "simple" => Ok(Algorithm::Simple),
        "tr29" => Ok(Algorithm::Tr29),
        other => Err(TokenizerError::InvalidAlgorithm(String::from(other))),
    }
}

fn parse_max_length(value: &str) -> Result<usize, TokenizerError> {
    match value.parse::<usize>() {
        Ok(0) | Err(_) => Err(TokenizerError::InvalidMaxLen(String::from(value))),
        Ok(n) => Ok(n),
    }
}
