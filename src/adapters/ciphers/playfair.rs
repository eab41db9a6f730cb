//! Playfair digraph substitution over a keyed 5x5 grid.
//!
//! I and J share a cell. Plaintext is prepared before encoding: J becomes
//! I, a filler letter splits repeated letters and pads an odd tail. The
//! grid is rebuilt on every call.

use crate::core::errors::{CipherError, Result};
use crate::core::models::cipher_spec::CipherKind;
use crate::core::text::{DEFAULT_FILLER, normalize};
use crate::core::traits::cipher::Cipher;

const NAME: &str = "Playfair";

/// The 25 grid letters in alphabetical order (no J).
const GRID_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

const SIDE: usize = 5;

/// Seed letters in first-occurrence order, then the rest of the grid
/// alphabet. Characters outside the grid alphabet (including J) are dropped.
pub fn build_alphabet_order(seed: &str) -> Vec<char> {
    let mut order: Vec<char> = Vec::with_capacity(SIDE * SIDE);
    let seeded = seed.chars().map(|c| c.to_ascii_uppercase());
    for c in seeded.chain(GRID_ALPHABET.chars()) {
        if GRID_ALPHABET.contains(c) && !order.contains(&c) {
            order.push(c);
        }
    }
    order
}

/// Row-major 5x5 grid holding each of the 25 letters exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairMatrix {
    grid: [[char; SIDE]; SIDE],
}

impl PlayfairMatrix {
    pub fn from_key(key: &str) -> Self {
        let order = build_alphabet_order(key);
        let mut grid = [[' '; SIDE]; SIDE];
        for (i, c) in order.into_iter().enumerate() {
            grid[i / SIDE][i % SIDE] = c;
        }
        Self { grid }
    }

    pub fn row(&self, row: usize) -> &[char; SIDE] {
        &self.grid[row]
    }

    /// `(row, col)` of `c`, or `None` for J and non-letters.
    pub fn position(&self, c: char) -> Option<(usize, usize)> {
        self.grid.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|&cell| cell == c).map(|col| (r, col))
        })
    }

    fn at(&self, row: usize, col: usize) -> char {
        self.grid[row % SIDE][col % SIDE]
    }

    /// Substitute one digraph. `step` is 1 to encode and 4 (i.e. -1 mod 5)
    /// to decode.
    fn substitute(&self, a: char, b: char, step: usize) -> Result<[char; 2]> {
        let locate = |c: char| {
            self.position(c).ok_or_else(|| {
                CipherError::invalid_input(NAME, format!("'{c}' is not in the key grid"))
            })
        };
        let (r1, c1) = locate(a)?;
        let (r2, c2) = locate(b)?;

        let pair = if r1 == r2 {
            [self.at(r1, c1 + step), self.at(r2, c2 + step)]
        } else if c1 == c2 {
            [self.at(r1 + step, c1), self.at(r2 + step, c2)]
        } else {
            [self.at(r1, c2), self.at(r2, c1)]
        };
        Ok(pair)
    }
}

/// Playfair cipher bound to a key and a filler letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfair {
    key: String,
    filler: char,
}

impl Playfair {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            filler: DEFAULT_FILLER,
        }
    }

    /// Use `filler` instead of X. It must be a grid letter.
    pub fn with_filler(key: &str, filler: char) -> Result<Self> {
        let filler = filler.to_ascii_uppercase();
        if !GRID_ALPHABET.contains(filler) {
            return Err(CipherError::invalid_key(
                NAME,
                format!("filler '{filler}' must be a letter A-Z other than J"),
            ));
        }
        Ok(Self {
            key: key.to_string(),
            filler,
        })
    }

    pub fn matrix(&self) -> PlayfairMatrix {
        PlayfairMatrix::from_key(&self.key)
    }

    /// Normalize, merge J into I, split doubled letters with the filler
    /// and pad to an even length.
    pub fn prepare(&self, text: &str) -> String {
        let letters: Vec<char> = merge_j(&normalize(text)).chars().collect();
        let mut prepared = String::with_capacity(letters.len() * 2);
        for (i, &c) in letters.iter().enumerate() {
            prepared.push(c);
            if letters.get(i + 1) == Some(&c) {
                prepared.push(self.filler);
            }
        }
        if prepared.len() % 2 == 1 {
            prepared.push(self.filler);
        }
        prepared
    }

    fn transform(&self, prepared: &str, step: usize) -> Result<String> {
        let matrix = self.matrix();
        let letters: Vec<char> = prepared.chars().collect();
        let mut out = String::with_capacity(letters.len());
        for pair in letters.chunks(2) {
            out.extend(matrix.substitute(pair[0], pair[1], step)?);
        }
        Ok(out)
    }
}

fn merge_j(text: &str) -> String {
    text.replace('J', "I")
}

impl Cipher for Playfair {
    fn encode(&self, text: &str) -> Result<String> {
        self.transform(&self.prepare(text), 1)
    }

    /// Ciphertext is normalized (J read as I) but never refilled, so an
    /// odd number of letters is rejected.
    fn decode(&self, text: &str) -> Result<String> {
        let cipher = merge_j(&normalize(text));
        if cipher.len() % 2 == 1 {
            return Err(CipherError::invalid_input(
                NAME,
                format!("ciphertext must have an even number of letters, got {}", cipher.len()),
            ));
        }
        self.transform(&cipher, SIDE - 1)
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Playfair
    }
}
