//! Hill cipher: blocks of n letters multiplied by an n x n key matrix mod 26.
//!
//! Decoding multiplies by the inverse key. The inverse mod 26 is found
//! mod 2 and mod 13 (both fields) and recombined with the CRT.

use crate::core::errors::{CipherError, Result};
use crate::core::models::cipher_spec::CipherKind;
use crate::core::text::{ALPHABET_LEN, DEFAULT_FILLER, index_letter, letter_index, normalize};
use crate::core::traits::cipher::Cipher;

const NAME: &str = "Hill";

/// The fixed demonstration key used when none is supplied.
pub const DEFAULT_KEY_MATRIX: [i64; 9] = [6, 24, 1, 13, 16, 10, 20, 17, 15];

/// Square key matrix flattened row-major, entries reduced mod 26.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    size: usize,
    entries: Vec<i64>,
}

impl KeyMatrix {
    /// Accepts any perfect-square number of entries. Negative entries are
    /// reduced into `[0, 26)`.
    pub fn new(entries: &[i64]) -> Result<Self> {
        let size = integer_sqrt(entries.len()).ok_or_else(|| {
            CipherError::invalid_key(
                NAME,
                format!(
                    "key matrix needs a perfect square number of entries, got {}",
                    entries.len()
                ),
            )
        })?;
        Ok(Self {
            size,
            entries: entries.iter().map(|v| v.rem_euclid(ALPHABET_LEN)).collect(),
        })
    }

    /// Block size n.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn entries(&self) -> &[i64] {
        &self.entries
    }

    /// `result[j] = sum_k key[j*n+k] * block[k] mod 26`.
    ///
    /// The block must hold exactly n values.
    pub fn apply(&self, block: &[i64]) -> Result<Vec<i64>> {
        if block.len() != self.size {
            return Err(CipherError::invalid_input(
                NAME,
                format!(
                    "block has {} values, key matrix expects {}",
                    block.len(),
                    self.size
                ),
            ));
        }
        Ok(self
            .entries
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .zip(block)
                    .map(|(k, v)| k * v)
                    .sum::<i64>()
                    .rem_euclid(ALPHABET_LEN)
            })
            .collect())
    }

    /// Inverse of the key mod 26, if the determinant is a unit mod 26.
    pub fn inverse(&self) -> Result<Self> {
        let not_invertible = || {
            CipherError::invalid_key(NAME, "key matrix is not invertible mod 26, cannot decode")
        };
        let mod2 = invert_mod_prime(&self.entries, self.size, 2).ok_or_else(not_invertible)?;
        let mod13 = invert_mod_prime(&self.entries, self.size, 13).ok_or_else(not_invertible)?;

        // x = a (mod 2), x = b (mod 13)  =>  x = 13a + 14b (mod 26)
        let entries = mod2
            .iter()
            .zip(&mod13)
            .map(|(a, b)| (13 * a + 14 * b).rem_euclid(ALPHABET_LEN))
            .collect();
        Ok(Self {
            size: self.size,
            entries,
        })
    }
}

fn integer_sqrt(len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    (1..=len).take_while(|n| n * n <= len).last().filter(|n| n * n == len)
}

/// Gauss-Jordan inversion over GF(p).
fn invert_mod_prime(entries: &[i64], n: usize, p: i64) -> Option<Vec<i64>> {
    let mut rows: Vec<Vec<i64>> = entries
        .chunks(n)
        .enumerate()
        .map(|(r, row)| {
            let mut augmented: Vec<i64> = row.iter().map(|v| v.rem_euclid(p)).collect();
            augmented.extend((0..n).map(|c| i64::from(c == r)));
            augmented
        })
        .collect();

    for col in 0..n {
        let pivot = (col..n).find(|&r| rows[r][col] != 0)?;
        rows.swap(col, pivot);

        let scale = inverse_mod_prime(rows[col][col], p)?;
        for v in rows[col].iter_mut() {
            *v = (*v * scale) % p;
        }

        let pivot_row = rows[col].clone();
        for (r, row) in rows.iter_mut().enumerate() {
            let factor = row[col];
            if r == col || factor == 0 {
                continue;
            }
            for (v, pv) in row.iter_mut().zip(&pivot_row) {
                *v = (*v - factor * pv).rem_euclid(p);
            }
        }
    }

    Some(rows.into_iter().flat_map(|row| row.into_iter().skip(n)).collect())
}

fn inverse_mod_prime(value: i64, p: i64) -> Option<i64> {
    (1..p).find(|x| (value * x).rem_euclid(p) == 1)
}

/// Hill cipher bound to a key matrix and a padding letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hill {
    key: KeyMatrix,
    filler: char,
}

impl Hill {
    pub fn new(key: &[i64]) -> Result<Self> {
        Self::with_filler(key, DEFAULT_FILLER)
    }

    pub fn with_filler(key: &[i64], filler: char) -> Result<Self> {
        let filler = filler.to_ascii_uppercase();
        if !filler.is_ascii_uppercase() {
            return Err(CipherError::invalid_key(
                NAME,
                format!("filler '{filler}' must be a letter A-Z"),
            ));
        }
        Ok(Self {
            key: KeyMatrix::new(key)?,
            filler,
        })
    }

    pub fn key(&self) -> &KeyMatrix {
        &self.key
    }

    /// Normalize and pad with the filler to a multiple of the block size.
    pub fn pad(&self, text: &str) -> String {
        let mut padded = normalize(text);
        while padded.len() % self.key.size() != 0 {
            padded.push(self.filler);
        }
        padded
    }

    fn transform(key: &KeyMatrix, letters: &str) -> Result<String> {
        let indices: Vec<i64> = letters.chars().filter_map(letter_index).collect();
        let mut out = String::with_capacity(indices.len());
        for block in indices.chunks(key.size()) {
            out.extend(key.apply(block)?.into_iter().map(index_letter));
        }
        Ok(out)
    }
}

impl Cipher for Hill {
    fn encode(&self, text: &str) -> Result<String> {
        Self::transform(&self.key, &self.pad(text))
    }

    /// Requires a key invertible mod 26 and a whole number of blocks.
    fn decode(&self, text: &str) -> Result<String> {
        let inverse = self.key.inverse()?;
        let letters = normalize(text);
        if letters.len() % self.key.size() != 0 {
            return Err(CipherError::invalid_input(
                NAME,
                format!(
                    "ciphertext length {} is not a multiple of the block size {}",
                    letters.len(),
                    self.key.size()
                ),
            ));
        }
        Self::transform(&inverse, &letters)
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Hill
    }
}
