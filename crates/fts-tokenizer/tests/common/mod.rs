#![allow(missing_docs)]

use fts_tokenizer::{NextOutcome, Tokenizer};

/// Feed `chunks` through `tokenizer` in order, followed by an end-of-input
/// flush, collecting every emitted token.
pub fn tokenize_chunks(tokenizer: &mut Tokenizer, chunks: &[&[u8]]) -> Vec<String> {
    let mut out = Vec::new();
    for chunk in chunks {
        let mut remaining = *chunk;
        loop {
            let (outcome, skip) = tokenizer.next(remaining);
            remaining = &remaining[skip..];
            if let NextOutcome::TokenReady(token) = outcome {
                out.push(token.as_str().to_string());
            }
            if remaining.is_empty() || skip == 0 {
                break;
            }
        }
    }
    loop {
        let (outcome, _) = tokenizer.next(&[]);
        match outcome {
            NextOutcome::TokenReady(token) => out.push(token.as_str().to_string()),
            NextOutcome::NeedMore => break,
        }
    }
    out
}

/// Feed the whole `input` as one chunk and flush.
pub fn tokenize(tokenizer: &mut Tokenizer, input: &str) -> Vec<String> {
    tokenize_chunks(tokenizer, &[input.as_bytes()])
}
