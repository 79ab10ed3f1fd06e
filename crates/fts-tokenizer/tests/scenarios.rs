#![allow(missing_docs)]

mod common;

use common::{tokenize, tokenize_chunks};
use fts_tokenizer::Tokenizer;
use rstest::rstest;

#[rstest]
#[case("Hello, world!", &["Hello", "world"])]
#[case("don\u{2019}t stop", &["don't", "stop"])]
#[case("'''abc'''", &["abc"])]
fn simple_mode_scenarios(#[case] input: &str, #[case] expected: &[&str]) {
    let mut tok = Tokenizer::create([]).unwrap();
    assert_eq!(tokenize(&mut tok, input), expected);
}

#[test]
fn simple_mode_truncates_to_maxlen() {
    let mut tok = Tokenizer::create([("maxlen", "10")]).unwrap();
    let input = "a".repeat(50);
    assert_eq!(tokenize(&mut tok, &input), ["a".repeat(10)]);
}

#[test]
fn simple_mode_chunk_boundary_on_whitespace() {
    let mut tok = Tokenizer::create([]).unwrap();
    let tokens = tokenize_chunks(&mut tok, &[b"foo", b" bar"]);
    assert_eq!(tokens, ["foo", "bar"]);
}

#[rstest]
#[case("can't", &["can't"])]
#[case("hello,world", &["hello", "world"])]
#[case("1,000", &["1,000"])]
#[case("abc.", &["abc"])]
fn tr29_mode_scenarios(#[case] input: &str, #[case] expected: &[&str]) {
    let mut tok = Tokenizer::create([("algorithm", "tr29")]).unwrap();
    assert_eq!(tokenize(&mut tok, input), expected);
}

#[test]
fn tr29_mode_katakana_run_then_trailing_hiragana_is_discarded() {
    // A faithful reproduction of the reference tokenizer's `OTHER`-category
    // behavior: Hiragana has no word-break property assigned, so it always
    // triggers a boundary, and with no preceding token-worthy codepoint the
    // leading non-token skip discards it entirely. See the crate's design
    // notes on the `OTHER` category for why this is preserved, not "fixed".
    let mut tok = Tokenizer::create([("algorithm", "tr29")]).unwrap();
    assert_eq!(tokenize(&mut tok, "\u{30AB}\u{30BF}\u{30AB}\u{30CA}\u{3067}\u{3059}"), ["カタカナ"]);
}

#[test]
fn tr29_mode_chunk_split_mid_apostrophe_matches_whole_input() {
    let whole = "can't stop";
    let mut whole_tok = Tokenizer::create([("algorithm", "tr29")]).unwrap();
    let expected = tokenize(&mut whole_tok, whole);

    let mut chunked_tok = Tokenizer::create([("algorithm", "tr29")]).unwrap();
    let bytes = whole.as_bytes();
    let actual = tokenize_chunks(&mut chunked_tok, &[&bytes[..4], &bytes[4..]]);
    assert_eq!(actual, expected);
}

#[test]
fn reset_returns_tokenizer_to_fresh_state() {
    let mut tok = Tokenizer::create([("algorithm", "tr29")]).unwrap();
    let _ = tok.next(b"unterminated");
    tok.reset();
    assert_eq!(tokenize(&mut tok, "can't"), ["can't"]);
}

#[test]
fn create_reports_unknown_setting() {
    let err = Tokenizer::create([("nope", "x")]).unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn create_reports_invalid_maxlen() {
    assert!(Tokenizer::create([("maxlen", "0")]).is_err());
    assert!(Tokenizer::create([("maxlen", "-1")]).is_err());
}

#[test]
fn create_reports_invalid_algorithm() {
    assert!(Tokenizer::create([("algorithm", "trie")]).is_err());
}

#[test]
fn search_setting_is_accepted() {
    assert!(Tokenizer::create([("search", "1")]).is_ok());
}
