use crate::core::errors::Result;
use crate::core::models::cipher_spec::CipherKind;
use crate::core::text::ALPHABET_LEN;
use crate::core::traits::cipher::Cipher;

/// Shift-by-N substitution.
///
/// Letters rotate within their own case; everything else is copied
/// through untouched. Any shift is valid, it is reduced mod 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    /// Always in `[0, 26)`.
    shift: i64,
}

impl Caesar {
    pub fn new(shift: i64) -> Self {
        Self {
            shift: shift.rem_euclid(ALPHABET_LEN),
        }
    }

    pub fn shift(&self) -> i64 {
        self.shift
    }

    fn rotate(text: &str, shift: i64) -> String {
        text.chars()
            .map(|c| {
                let base = if c.is_ascii_uppercase() {
                    b'A'
                } else if c.is_ascii_lowercase() {
                    b'a'
                } else {
                    return c;
                };
                let offset = (i64::from(c as u8 - base) + shift).rem_euclid(ALPHABET_LEN);
                (base + offset as u8) as char
            })
            .collect()
    }
}

impl Cipher for Caesar {
    fn encode(&self, text: &str) -> Result<String> {
        Ok(Self::rotate(text, self.shift))
    }

    fn decode(&self, text: &str) -> Result<String> {
        Ok(Self::rotate(text, ALPHABET_LEN - self.shift))
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Caesar
    }
}
