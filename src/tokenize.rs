//! Tokenizer.
//!
//! Splits text on the literal space character only (no other whitespace is
//! recognized) and validates that no token contains a control character.

/// Split `text` into the ordered sequence of maximal runs of non-space
/// characters. The only whitespace recognized is `0x20`; empty input yields
/// an empty sequence.
pub fn split(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// Returns `true` if every byte in `term` is `>= 0x20` (no control characters).
pub fn is_valid_word(term: &str) -> bool {
    term.bytes().all(|b| b >= 0x20)
}
