//! The `word` module contains helpers for normalizing and validating the words that flow through
//! the mutation generator and the path search.

/// The letters the mutators use for insertions and substitutions.
pub static ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Return the canonical (uppercase) form of `word`.
///
/// # Arguments
///
/// * `word` - The string slice containing the word to normalize.
pub fn normalize(word: &str) -> String {
    word.to_uppercase()
}

/// Return true if `word` is non-empty and contains only ASCII letters.
///
/// # Arguments
///
/// * `word` - The string slice containing the word to check.
pub fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}
