use crate::core::errors::{CipherError, Result};
use crate::core::models::cipher_spec::CipherKind;
use crate::core::text::{index_letter, letter_index};
use crate::core::traits::cipher::Cipher;

const NAME: &str = "Polyalphabetic";

/// Vigenère-style repeating-key substitution.
///
/// Input is uppercased. The key cursor moves on every character, letters
/// or not, so `"HE LLO"` and `"HELLO"` use different key letters for the
/// tail. Non-letters are copied through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyalphabetic {
    shifts: Vec<i64>,
}

impl Polyalphabetic {
    /// The key must be non-empty and made of letters only (any case).
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::invalid_key(NAME, "key must not be empty"));
        }
        let shifts = key
            .chars()
            .map(|c| {
                letter_index(c.to_ascii_uppercase()).ok_or_else(|| {
                    CipherError::invalid_key(NAME, format!("key character '{c}' is not a letter"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { shifts })
    }

    fn apply(&self, text: &str, sign: i64) -> String {
        text.chars()
            .map(|c| c.to_ascii_uppercase())
            .zip(self.shifts.iter().cycle())
            .map(|(c, shift)| match letter_index(c) {
                Some(index) => index_letter(index + sign * shift),
                None => c,
            })
            .collect()
    }
}

impl Cipher for Polyalphabetic {
    fn encode(&self, text: &str) -> Result<String> {
        Ok(self.apply(text, 1))
    }

    fn decode(&self, text: &str) -> Result<String> {
        Ok(self.apply(text, -1))
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Poly
    }
}
