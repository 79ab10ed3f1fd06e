//! A streaming word-boundary tokenizer for full-text search indexing.
//!
//! Two segmentation algorithms are offered: [`Algorithm::Simple`], a fast
//! punctuation-table splitter, and [`Algorithm::Tr29`], an adaptation of
//! Unicode Standard Annex #29 word-boundary rules tailored for FTS (breaks
//! are emitted once per boundary, non-token runs are discarded, and a few
//! pragmatic deviations from strict TR29 conformance are made).
//!
//! Both algorithms are driven through the same chunked streaming protocol:
//! feed successive byte slices into [`Tokenizer::next`], which returns either
//! a completed [`Token`] or a request for more input. An empty final chunk
//! flushes any token still in progress.
#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod letter_type;
mod settings;
mod simple;
mod tables;
mod token_buffer;
mod tokenizer;
mod tr29;
mod utf8;

pub use error::TokenizerError;
pub use letter_type::LetterType;
pub use settings::{Algorithm, Settings};
pub use token_buffer::Token;
pub use tokenizer::{NextOutcome, Tokenizer};
