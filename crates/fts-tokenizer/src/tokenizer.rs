//! The streaming tokenizer handle.

use crate::settings::{Algorithm, Settings};
use crate::simple::{self, SimpleState};
use crate::token_buffer::{Token, TokenBuffer};
use crate::tr29::{self, Tr29State};
use crate::utf8;

/// Result of a single [`Tokenizer::next`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextOutcome {
    /// A token was completed; the caller should advance past the returned
    /// skip count and call `next` again with the remainder.
    TokenReady(Token),
    /// No token yet; the caller should supply more input (or, if this was
    /// the final chunk, call `next` once more with an empty slice to flush).
    NeedMore,
}

enum Engine {
    Simple(SimpleState),
    Tr29(Tr29State),
}

/// A streaming word-boundary tokenizer.
///
/// Drive it by calling [`Tokenizer::next`] with successive byte chunks of
/// the input. A call with an empty slice signals end-of-input and flushes
/// any token still being accumulated; repeat it until it returns
/// [`NextOutcome::NeedMore`] to confirm nothing is left pending.
///
/// A chunk may end mid-codepoint: `next` only consumes complete codepoints
/// and reports that in its skip count, so the caller can splice the
/// unconsumed tail onto the following read.
pub struct Tokenizer {
    settings: Settings,
    buffer: TokenBuffer,
    engine: Engine,
}

impl Tokenizer {
    /// Build a tokenizer from already-validated settings.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let buffer = TokenBuffer::new(settings.max_length());
        let engine = match settings.algorithm() {
            Algorithm::Simple => Engine::Simple(SimpleState::default()),
            Algorithm::Tr29 => Engine::Tr29(Tr29State::default()),
        };
        Self { settings, buffer, engine }
    }

    /// Parse `settings` and build a tokenizer in one step.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Settings::parse`].
    pub fn create<'a, I>(settings: I) -> Result<Self, crate::TokenizerError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Settings::parse(settings).map(Self::new)
    }

    /// The settings this tokenizer was built with.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Empty the in-progress token and reset category history, leaving the
    /// tokenizer observationally equivalent to a freshly created one with
    /// the same settings.
    pub fn reset(&mut self) {
        self.buffer.clear();
        match &mut self.engine {
            Engine::Simple(state) => state.reset(),
            Engine::Tr29(state) => state.reset(),
        }
    }

    /// Feed the next chunk of input.
    ///
    /// Pass an empty slice to flush a token still in progress at
    /// end-of-input; repeat until it returns `NeedMore`.
    ///
    /// Returns the outcome and the number of bytes of `chunk` consumed. A
    /// chunk that ends with a partial codepoint is only consumed up to the
    /// last complete codepoint; callers resubmit the unconsumed tail
    /// alongside further input.
    pub fn next(&mut self, chunk: &[u8]) -> (NextOutcome, usize) {
        if chunk.is_empty() {
            let token = match &mut self.engine {
                Engine::Simple(_) => simple::flush(&mut self.buffer),
                Engine::Tr29(state) => tr29::flush(state, &mut self.buffer),
            };
            return (to_outcome(token), 0);
        }

        let usable_len = utf8::complete_prefix_length(chunk);
        let usable = &chunk[..usable_len];
        let (skip, token) = match &mut self.engine {
            Engine::Simple(state) => simple::next(state, &mut self.buffer, usable),
            Engine::Tr29(state) => tr29::next(state, &mut self.buffer, usable),
        };
        (to_outcome(token), skip)
    }
}

fn to_outcome(token: Option<Token>) -> NextOutcome {
    match token {
        Some(token) => NextOutcome::TokenReady(token),
        None => NextOutcome::NeedMore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tok: &mut Tokenizer, input: &str) -> alloc::vec::Vec<alloc::string::String> {
        use alloc::string::ToString;
        use alloc::vec::Vec;

        let mut out: Vec<alloc::string::String> = Vec::new();
        let bytes = input.as_bytes();
        let mut offset = 0;
        loop {
            let (outcome, skip) = tok.next(&bytes[offset..]);
            offset += skip;
            match outcome {
                NextOutcome::TokenReady(token) => out.push(token.as_str().to_string()),
                NextOutcome::NeedMore if offset >= bytes.len() => break,
                NextOutcome::NeedMore => continue,
            }
        }
        loop {
            match tok.next(&[]) {
                (NextOutcome::TokenReady(token), _) => out.push(token.as_str().to_string()),
                (NextOutcome::NeedMore, _) => break,
            }
        }
        out
    }

    #[test]
    fn simple_scenario_5_chunked_input_matches_whole_input() {
        let mut tok = Tokenizer::create([]).unwrap();
        let mut out: alloc::vec::Vec<alloc::string::String> = alloc::vec::Vec::new();
        for (outcome, _) in [tok.next(b"foo"), tok.next(b" bar")] {
            if let NextOutcome::TokenReady(token) = outcome {
                use alloc::string::ToString;
                out.push(token.as_str().to_string());
            }
        }
        if let NextOutcome::TokenReady(token) = tok.next(&[]).0 {
            use alloc::string::ToString;
            out.push(token.as_str().to_string());
        }
        assert_eq!(out, ["foo", "bar"]);
    }

    #[test]
    fn tr29_settings_select_tr29_engine() {
        let mut tok = Tokenizer::create([("algorithm", "tr29")]).unwrap();
        assert_eq!(run(&mut tok, "can't"), ["can't"]);
    }

    #[test]
    fn reset_clears_pending_buffer_and_history() {
        let mut tok = Tokenizer::create([]).unwrap();
        let _ = tok.next(b"partial");
        tok.reset();
        assert_eq!(run(&mut tok, "fresh start"), ["fresh", "start"]);
    }

    #[test]
    fn trailing_partial_codepoint_is_not_consumed_until_completed() {
        let mut tok = Tokenizer::create([]).unwrap();
        // Split a 3-byte apostrophe (U+2019) across the chunk boundary.
        let full = "don\u{2019}t".as_bytes();
        let (outcome, skip) = tok.next(&full[..4]);
        assert_eq!(outcome, NextOutcome::NeedMore);
        assert_eq!(skip, 3, "only the complete-codepoint prefix is consumed");
        let (outcome, _) = tok.next(&full[skip..]);
        assert_eq!(outcome, NextOutcome::NeedMore);
        let (outcome, _) = tok.next(&[]);
        assert!(matches!(outcome, NextOutcome::TokenReady(_)));
    }

    #[test]
    fn create_rejects_unknown_settings() {
        assert!(Tokenizer::create([("bogus", "1")]).is_err());
    }
}
