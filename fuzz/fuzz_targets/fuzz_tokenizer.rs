#![no_main]

use arbitrary::Arbitrary;
use fts_tokenizer::{NextOutcome, Tokenizer};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    tr29: bool,
    max_length: u8,
    split_seed: u64,
    text: String,
}

fn drain(tok: &mut Tokenizer, chunk: &[u8]) -> Vec<String> {
    let mut out = Vec::new();
    let mut remaining = chunk;
    loop {
        let (outcome, skip) = tok.next(remaining);
        remaining = &remaining[skip..];
        if let NextOutcome::TokenReady(token) = outcome {
            out.push(token.as_str().to_string());
        }
        if remaining.is_empty() || skip == 0 {
            break;
        }
    }
    out
}

fn flush(tok: &mut Tokenizer) -> Vec<String> {
    let mut out = Vec::new();
    loop {
        match tok.next(&[]) {
            (NextOutcome::TokenReady(token), _) => out.push(token.as_str().to_string()),
            (NextOutcome::NeedMore, _) => break,
        }
    }
    out
}

/// Split `s` into boundary-safe chunks using `seed` to pick each chunk size,
/// same technique as the reference parser's fuzz harness.
fn split_into_safe_chunks(s: &str, seed: u64) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let len = s.len();
    if len == 0 {
        return chunks;
    }
    while start < len {
        let remaining = len - start;
        let mut size = (seed as usize % remaining) + 1;
        while start + size < len && !s.is_char_boundary(start + size) {
            size += 1;
        }
        chunks.push(&s[start..start + size]);
        start += size;
    }
    chunks
}

fuzz_target!(|input: Input| {
    let max_length = u16::from(input.max_length).saturating_add(1).to_string();
    let algorithm = if input.tr29 { "tr29" } else { "simple" };
    let settings = [("algorithm", algorithm), ("maxlen", max_length.as_str())];

    let mut whole_tok = Tokenizer::create(settings).unwrap();
    let mut whole = drain(&mut whole_tok, input.text.as_bytes());
    whole.extend(flush(&mut whole_tok));

    let mut chunked_tok = Tokenizer::create(settings).unwrap();
    let mut chunked = Vec::new();
    for chunk in split_into_safe_chunks(&input.text, input.split_seed) {
        chunked.extend(drain(&mut chunked_tok, chunk.as_bytes()));
    }
    chunked.extend(flush(&mut chunked_tok));

    assert_eq!(whole, chunked, "chunk-invariance violated");

    let max_length: usize = max_length.parse().unwrap();
    for token in &whole {
        assert!(!token.is_empty(), "empty token emitted");
        assert!(token.len() <= max_length, "token exceeded maxlen");
        assert!(!token.contains('\u{2019}') && !token.contains('\u{FF07}'), "unfolded apostrophe");
    }
});
