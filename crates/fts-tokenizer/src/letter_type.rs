//! The `LetterType` classification consumed by the TR29 rule table.

use crate::tables;

/// Word-break category of a single codepoint, used by the TR29 engine.
///
/// `Apostrophe` is a sentinel for ASCII `'` (U+0027) and the two non-ASCII
/// apostrophe codepoints (U+2019, U+FF07); it takes priority over the
/// native `Single_Quote`/`Double_Quote` categories (see [`classify`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterType {
    /// No category yet assigned; the initial state of a handle's history.
    #[default]
    None,
    /// Carriage return (U+000D).
    Cr,
    /// Line feed (U+000A).
    Lf,
    /// Other hard line-break codepoints (e.g. U+2028, U+2029).
    Newline,
    /// Combining marks and other codepoints that extend the preceding
    /// character without ever starting or ending a word on their own.
    Extend,
    /// Regional indicator symbols (flag-emoji pairs).
    RegionalIndicator,
    /// Formatting codepoints (e.g. zero-width joiner) ignored like `Extend`.
    Format,
    /// Katakana script letters.
    Katakana,
    /// Hebrew script letters.
    HebrewLetter,
    /// Letters from scripts not covered by a more specific category.
    ALetter,
    /// The native Unicode `Single_Quote` property (shadowed by
    /// [`LetterType::Apostrophe`] for the codepoints that sentinel covers).
    SingleQuote,
    /// The native Unicode `Double_Quote` property.
    DoubleQuote,
    /// Punctuation that joins both letters and digits mid-word (e.g. `.`).
    MidNumLet,
    /// Punctuation that joins letters mid-word but not digits.
    MidLetter,
    /// Punctuation that joins digits mid-word but not letters.
    MidNum,
    /// Decimal digits.
    Numeric,
    /// Underscore and similar word-joining connector punctuation.
    ExtendNumLet,
    /// Sentinel for the three apostrophe codepoints.
    Apostrophe,
    /// Anything not otherwise classified (always a boundary when preceded
    /// by any other category — see the TR29 rule table's `Other` row).
    Other,
}

/// One of U+0027, U+2019, or U+FF07.
#[inline]
pub(crate) fn is_apostrophe(c: u32) -> bool {
    matches!(c, 0x0027 | 0x2019 | 0xFF07)
}

/// Classify `c` per the TR29 word-break properties, in priority order.
///
/// The apostrophe short-circuit is checked first: U+0027 is also a member
/// of `Single_Quote`, but `Apostrophe` wins so that the rule table's
/// `WB6`/`WB7`-derived exceptions for quotes inside words apply uniformly
/// regardless of which apostrophe glyph was used.
#[must_use]
pub fn classify(c: u32) -> LetterType {
    if is_apostrophe(c) {
        return LetterType::Apostrophe;
    }
    if tables::contains(tables::CR, c) {
        return LetterType::Cr;
    }
    if tables::contains(tables::LF, c) {
        return LetterType::Lf;
    }
    if tables::contains(tables::NEWLINE, c) {
        return LetterType::Newline;
    }
    if tables::contains(tables::EXTEND, c) {
        return LetterType::Extend;
    }
    if tables::contains(tables::REGIONAL_INDICATOR, c) {
        return LetterType::RegionalIndicator;
    }
    if tables::contains(tables::FORMAT, c) {
        return LetterType::Format;
    }
    if tables::contains(tables::KATAKANA, c) {
        return LetterType::Katakana;
    }
    if tables::contains(tables::HEBREW_LETTER, c) {
        return LetterType::HebrewLetter;
    }
    if tables::contains(tables::ALETTER, c) {
        return LetterType::ALetter;
    }
    if tables::contains(tables::SINGLE_QUOTE, c) {
        return LetterType::SingleQuote;
    }
    if tables::contains(tables::DOUBLE_QUOTE, c) {
        return LetterType::DoubleQuote;
    }
    if tables::contains(tables::MIDNUMLET, c) {
        return LetterType::MidNumLet;
    }
    if tables::contains(tables::MIDLETTER, c) {
        return LetterType::MidLetter;
    }
    if tables::contains(tables::MIDNUM, c) {
        return LetterType::MidNum;
    }
    if tables::contains(tables::NUMERIC, c) {
        return LetterType::Numeric;
    }
    if tables::contains(tables::EXTENDNUMLET, c) {
        return LetterType::ExtendNumLet;
    }
    LetterType::Other
}
