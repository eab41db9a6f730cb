//! Shared text rules for the alphabet ciphers.
//!
//! Every cipher works over the 26 uppercase Latin letters. Whether other
//! characters are stripped or passed through is decided per cipher.

/// Number of letters in the working alphabet.
pub const ALPHABET_LEN: i64 = 26;

/// Letter used to pad blocks and split repeated digraph letters.
pub const DEFAULT_FILLER: char = 'X';

/// Uppercase `text` and drop everything that is not an ASCII letter.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Position of an uppercase ASCII letter in A-Z, or `None`.
pub fn letter_index(c: char) -> Option<i64> {
    c.is_ascii_uppercase().then(|| i64::from(c as u8 - b'A'))
}

/// Letter at `index` after reducing it into `[0, 26)`.
pub fn index_letter(index: i64) -> char {
    // rem_euclid keeps the value in 0..26, so the cast cannot truncate
    (b'A' + index.rem_euclid(ALPHABET_LEN) as u8) as char
}
