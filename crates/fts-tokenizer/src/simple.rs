//! The fast, punctuation-table-driven segmentation engine.

use crate::letter_type::is_apostrophe;
use crate::tables;
use crate::token_buffer::{Token, TokenBuffer};
use crate::utf8;

/// Fast lookup for codepoints below 0x80: `true` means "this byte is a
/// word break", transcribed byte-for-byte from the reference tokenizer's
/// ASCII table. Note 0x60 (backtick) breaks, same as the rest of row
/// 0x5B-0x5E; underscore (0x5F) is the only punctuation byte in that
/// neighborhood that doesn't.
const ASCII_BREAK: [bool; 128] = build_ascii_break();

const fn build_ascii_break() -> [bool; 128] {
    let mut table = [false; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = match i {
            0x00..=0x1F => true,
            0x20..=0x2F => i != 0x27,
            0x30..=0x39 => false,
            0x3A..=0x3F => true,
            0x40 => true,
            0x41..=0x5A => false,
            0x5B..=0x5E => true,
            0x5F => false,
            0x60 => true,
            0x61..=0x7A => false,
            0x7B..=0x7E => true,
            0x7F => false,
            _ => unreachable!(),
        };
        i += 1;
    }
    table
}

/// Whether `c` is a word break, given that `prev_is_apostrophe` reflects the
/// previous codepoint's apostrophe-ness (the simple algorithm's only
/// history).
fn is_break(c: u32, prev_is_apostrophe: bool) -> bool {
    if is_apostrophe(c) {
        return prev_is_apostrophe;
    }
    if c < 0x80 {
        return ASCII_BREAK[c as usize];
    }
    if (0x2000..=0x206F).contains(&c) {
        return true;
    }
    tables::contains(tables::WHITE_SPACE, c)
        || tables::contains(tables::DASH, c)
        || tables::contains(tables::QUOTATION_MARK, c)
        || tables::contains(tables::TERMINAL_PUNCTUATION, c)
        || tables::contains(tables::STERM, c)
        || tables::contains(tables::PATTERN_WHITE_SPACE, c)
}

/// The simple engine's only history: whether the previous codepoint was an
/// apostrophe (mirrors `prev_letter ∈ {NONE, SINGLE_QUOTE}`).
#[derive(Debug, Default)]
pub(crate) struct SimpleState {
    prev_is_apostrophe: bool,
}

impl SimpleState {
    pub(crate) fn reset(&mut self) {
        self.prev_is_apostrophe = false;
    }
}

/// Consume as much of `chunk` (already trimmed to complete codepoints) as
/// possible, returning the number of bytes consumed and a token if a break
/// produced one.
///
/// A break that leaves no content after apostrophe trimming (e.g. a run of
/// bare apostrophes) does not stop the scan: it clears the buffer and
/// continues, matching §4.2's "if nothing remained, continue".
pub(crate) fn next(
    state: &mut SimpleState,
    buffer: &mut TokenBuffer,
    chunk: &[u8],
) -> (usize, Option<Token>) {
    let mut start = 0;
    let mut i = 0;
    while i < chunk.len() {
        let (c, len) = utf8::decode_one(chunk, i);
        if is_break(c, state.prev_is_apostrophe) {
            buffer.append_truncated(&chunk[start..i]);
            start = i + len;
            state.prev_is_apostrophe = false;
            if let Some(token) = buffer.take_trimmed() {
                return (start, Some(token));
            }
            i = start;
            continue;
        }
        state.prev_is_apostrophe = is_apostrophe(c);
        i += len;
    }
    buffer.append_truncated(&chunk[start..i]);
    (i, None)
}

/// End-of-stream flush: take whatever is left in the buffer, post-processed
/// as a break would, or `None` if there is nothing pending.
pub(crate) fn flush(buffer: &mut TokenBuffer) -> Option<Token> {
    if buffer.is_empty() {
        return None;
    }
    buffer.take_trimmed()
}
