//! The growable, truncating, apostrophe-folding token accumulator.

use alloc::vec::Vec;
use bstr::ByteSlice;

use crate::utf8;

/// A finalized word emitted by the tokenizer.
///
/// Always valid UTF-8, never empty, and never contains U+2019 or U+FF07
/// (both folded to U+0027 while the token was accumulated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(Vec<u8>);

impl Token {
    /// Borrow the token's bytes as a `str`.
    ///
    /// Never panics: the tokenizer guarantees every emitted token is valid
    /// UTF-8.
    #[must_use]
    pub fn as_str(&self) -> &str {
        debug_assert!(core::str::from_utf8(&self.0).is_ok(), "token is not valid UTF-8");
        // SAFETY: every byte appended to the underlying buffer came from a
        // decoded codepoint (`TokenBuffer::append_truncated`) or from the
        // single-byte ASCII apostrophe fold; the buffer is never handed
        // bytes that split a codepoint.
        unsafe { core::str::from_utf8_unchecked(&self.0) }
    }

    /// Borrow the token's raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// The handle's accumulation buffer: bytes of the token currently in
/// progress, capped at `max_length`.
#[derive(Debug, Default)]
pub(crate) struct TokenBuffer {
    data: Vec<u8>,
    max_length: usize,
}

impl TokenBuffer {
    pub(crate) fn new(max_length: usize) -> Self {
        Self { data: Vec::new(), max_length }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }

    /// Current buffered length in bytes, exposed for invariant checks under
    /// test and fuzzing builds.
    #[cfg(any(test, feature = "fuzzing"))]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Append `src` to the buffer, subject to the `max_length` byte cap and
    /// apostrophe folding (U+2019, U+FF07 -> U+0027).
    ///
    /// Truncation is measured against `src`'s byte length, not the
    /// post-fold length: folding a 3-byte apostrophe down to 1 byte can
    /// leave the emitted token shorter than `max_length` even when the
    /// source span was exactly `max_length` bytes. This mirrors the
    /// reference tokenizer's behavior and is preserved for compatibility.
    pub(crate) fn append_truncated(&mut self, src: &[u8]) {
        let room = self.max_length - self.data.len();
        let take = room.min(src.len());

        let mut pos = 0;
        let mut flushed_to = 0;
        while pos < take {
            let (c, len) = utf8::decode_one(src, pos);
            if matches!(c, 0x2019 | 0xFF07) {
                self.data.extend_from_slice(&src[flushed_to..pos]);
                self.data.push(b'\'');
                flushed_to = pos + len;
            }
            pos += len;
        }
        if flushed_to < take {
            self.data.extend_from_slice(&src[flushed_to..take]);
        }
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(self.data.len() <= self.max_length, "buffer grew past max_length");
    }

    /// Strip leading and trailing ASCII apostrophes and take the token if
    /// anything remains (simple-mode post-processing, §4.2).
    ///
    /// Returns `None` (and clears the buffer) if the stripped content is
    /// empty — an apostrophe-only span produces no token.
    pub(crate) fn take_trimmed(&mut self) -> Option<Token> {
        let trimmed = self.data.trim_with(|c| c == '\'');
        let token = if trimmed.is_empty() { None } else { Some(Token(trimmed.to_vec())) };
        self.data.clear();
        token
    }

    /// Drop the trailing codepoint (TR29 finalize, §4.3.2) and take the
    /// remaining buffer as a token.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty after trimming; the TR29 engine never
    /// calls this on a buffer that can become empty (leading non-token runs
    /// are skipped before anything is appended).
    pub(crate) fn take_dropping_last_char(&mut self) -> Token {
        let mut len = self.data.len();
        while len > 0 && self.data[len - 1] & 0xC0 == 0x80 {
            len -= 1;
        }
        assert!(len > 0, "TR29 finalize left an empty token after trimming");
        len -= 1;
        self.data.truncate(len);
        self.take_whole()
    }

    /// Take the whole buffer as a token without any post-processing.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub(crate) fn take_whole(&mut self) -> Token {
        assert!(!self.data.is_empty(), "attempted to emit an empty token");
        let token = Token(core::mem::take(&mut self.data));
        token
    }
}
