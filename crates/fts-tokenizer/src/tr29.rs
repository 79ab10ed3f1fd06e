//! The TR29-derived segmentation engine.
//!
//! Implements the adapted word-break rule table from the design notes: a
//! per-codepoint pipeline of leading non-token skipping, a boundary test
//! keyed by the current category and a two-deep history of prior
//! categories, and a finalize step that trims a small set of trailing
//! "false positive" categories before a token is emitted.

use crate::letter_type::{self, LetterType};
use crate::token_buffer::{Token, TokenBuffer};
use crate::utf8;

/// Two-deep category history plus the current letter, mirroring the
/// reference tokenizer's handle fields.
#[derive(Debug, Default)]
pub(crate) struct Tr29State {
    prev_letter: LetterType,
    prev_prev_letter: LetterType,
}

impl Tr29State {
    pub(crate) fn reset(&mut self) {
        self.prev_letter = LetterType::None;
        self.prev_prev_letter = LetterType::None;
    }

    fn add_prev_letter(&mut self, lt: LetterType) {
        if self.prev_letter != LetterType::None {
            self.prev_prev_letter = self.prev_letter;
        }
        self.prev_letter = lt;
    }
}

/// Everything except the categories that may legally start a token once the
/// handle has no history (`prev_letter == NONE`).
fn is_nontoken(lt: LetterType) -> bool {
    !matches!(
        lt,
        LetterType::RegionalIndicator
            | LetterType::Katakana
            | LetterType::HebrewLetter
            | LetterType::ALetter
            | LetterType::Numeric
    )
}

/// Whether `lt`, following `prev`/`prev_prev`, declares a word boundary.
///
/// Only meaningful when `prev != NONE`; callers never invoke this otherwise.
fn is_boundary(lt: LetterType, prev: LetterType, prev_prev: LetterType) -> bool {
    use LetterType::{
        ALetter, Apostrophe, Cr, DoubleQuote, ExtendNumLet, Extend, Format, HebrewLetter,
        Katakana, Lf, MidLetter, MidNum, MidNumLet, Newline, None, Numeric, Other,
        RegionalIndicator, SingleQuote,
    };

    match lt {
        None => unreachable!("NONE is never a current category"),
        Cr | Lf | Newline => true,
        Extend | Format => false,
        RegionalIndicator => prev != RegionalIndicator,
        Katakana => !matches!(prev, Katakana | ExtendNumLet),
        HebrewLetter => {
            prev != HebrewLetter
                && !(prev_prev == HebrewLetter
                    && matches!(prev, SingleQuote | Apostrophe | MidLetter | DoubleQuote))
                && prev != Numeric
                && prev != ExtendNumLet
        }
        ALetter => {
            prev != ALetter
                && !(prev_prev == ALetter && matches!(prev, SingleQuote | Apostrophe | MidLetter))
                && prev != Numeric
                && prev != ExtendNumLet
        }
        SingleQuote => !matches!(prev, ALetter | HebrewLetter) && prev != Numeric,
        DoubleQuote => prev != DoubleQuote,
        MidNumLet => true,
        MidLetter => !matches!(prev, ALetter | HebrewLetter),
        MidNum => prev != Numeric,
        Numeric => {
            prev != Numeric
                && !matches!(prev, ALetter | HebrewLetter)
                && !(prev_prev == Numeric && matches!(prev, MidNum | MidNumLet | SingleQuote))
                && prev != ExtendNumLet
        }
        ExtendNumLet => {
            !matches!(prev, ALetter | HebrewLetter | Numeric | Katakana | ExtendNumLet)
        }
        Apostrophe => !matches!(prev, ALetter | HebrewLetter),
        Other => true,
    }
}

/// Categories whose presence as `prev_letter` at a boundary means the
/// buffer's trailing codepoint was provisionally accepted but turned out to
/// be trailing punctuation, not part of the word — trimmed in [`finalize`].
fn is_trailing_false_positive(lt: LetterType) -> bool {
    matches!(
        lt,
        LetterType::MidLetter
            | LetterType::MidNumLet
            | LetterType::Apostrophe
            | LetterType::SingleQuote
            | LetterType::MidNum
    )
}

fn finalize(state: &mut Tr29State, buffer: &mut TokenBuffer) -> Token {
    let token = if is_trailing_false_positive(state.prev_letter) {
        buffer.take_dropping_last_char()
    } else {
        buffer.take_whole()
    };
    state.reset();
    token
}

/// Consume as much of `chunk` (already trimmed to complete codepoints) as
/// needed to find the next word boundary, returning the number of bytes
/// consumed and a token if a boundary was found.
///
/// Unlike the simple engine, a boundary here always yields a token: leading
/// non-token runs are discarded before anything reaches the buffer, so by
/// the time a boundary can fire the buffer is guaranteed non-empty.
///
/// The codepoint that triggers a boundary is consumed along with it and
/// discarded, never carried into the next token: the reference tokenizer
/// advances past it before reporting `skip`, and only calls `add_prev_letter`
/// on the non-boundary path, so a boundary-causing codepoint never becomes
/// history for the word that follows.
pub(crate) fn next(
    state: &mut Tr29State,
    buffer: &mut TokenBuffer,
    chunk: &[u8],
) -> (usize, Option<Token>) {
    let mut start = 0;
    let mut i = 0;
    while i < chunk.len() {
        let char_start = i;
        let (c, len) = utf8::decode_one(chunk, i);
        i += len;
        let lt = letter_type::classify(c);

        if state.prev_letter == LetterType::None && is_nontoken(lt) {
            start = i;
            continue;
        }

        if state.prev_letter != LetterType::None && is_boundary(lt, state.prev_letter, state.prev_prev_letter)
        {
            buffer.append_truncated(&chunk[start..char_start]);
            #[cfg(any(test, feature = "fuzzing"))]
            assert!(!buffer.is_empty(), "boundary fired before any token-worthy codepoint was buffered");
            let token = finalize(state, buffer);
            return (i, Some(token));
        }

        if !matches!(lt, LetterType::Extend | LetterType::Format) {
            state.add_prev_letter(lt);
        }
    }
    buffer.append_truncated(&chunk[start..i]);
    (i, None)
}

/// End-of-stream flush: finalize and emit whatever is pending, or `None` if
/// the buffer is empty.
pub(crate) fn flush(state: &mut Tr29State, buffer: &mut TokenBuffer) -> Option<Token> {
    if buffer.is_empty() {
        return None;
    }
    Some(finalize(state, buffer))
}
