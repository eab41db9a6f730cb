use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::CipherError;

/// The supported cipher families, without key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    Caesar,
    RailFence,
    Playfair,
    Hill,
    Poly,
}

impl CipherKind {
    pub const ALL: [CipherKind; 5] = [
        CipherKind::Caesar,
        CipherKind::RailFence,
        CipherKind::Playfair,
        CipherKind::Hill,
        CipherKind::Poly,
    ];

    /// Identifier used on the command line and in the history log.
    pub fn id(&self) -> &'static str {
        match self {
            CipherKind::Caesar => "caesar",
            CipherKind::RailFence => "railfence",
            CipherKind::Playfair => "playfair",
            CipherKind::Hill => "hill",
            CipherKind::Poly => "poly",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CipherKind::Caesar => "Caesar",
            CipherKind::RailFence => "Rail Fence",
            CipherKind::Playfair => "Playfair",
            CipherKind::Hill => "Hill",
            CipherKind::Poly => "Polyalphabetic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CipherKind::Caesar => {
                "A substitution cipher where each letter is shifted a fixed number \
                 of places up or down the alphabet."
            }
            CipherKind::RailFence => {
                "The plaintext is written in a zigzag over a number of rails and \
                 then read off rail by rail."
            }
            CipherKind::Playfair => {
                "Encrypts pairs of letters (digraphs) using a 5x5 grid built from a key."
            }
            CipherKind::Hill => {
                "Uses linear algebra: blocks of letters are multiplied by a key \
                 matrix modulo 26."
            }
            CipherKind::Poly => {
                "Uses a repeating key to switch between several substitution \
                 alphabets (Vigenère)."
            }
        }
    }

    /// Whether `decrypt` can invert this cipher in general.
    ///
    /// Hill only decodes with keys invertible mod 26.
    pub fn always_decodable(&self) -> bool {
        !matches!(self, CipherKind::Hill)
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CipherKind::ALL
            .into_iter()
            .find(|k| k.id() == wanted)
            .ok_or_else(|| CipherError::InvalidConfig {
                detail: format!(
                    "Unknown cipher '{s}'. Use one of: {}",
                    CipherKind::ALL.map(|k| k.id()).join(", ")
                ),
            })
    }
}

/// Which way a transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => f.write_str("encode"),
            Direction::Decode => f.write_str("decode"),
        }
    }
}

/// A cipher selection together with its key material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherSpec {
    Caesar { shift: i64 },
    RailFence { rails: usize },
    Playfair { key: String, filler: char },
    Hill { matrix: Vec<i64>, filler: char },
    Poly { key: String },
}

impl CipherSpec {
    pub fn kind(&self) -> CipherKind {
        match self {
            CipherSpec::Caesar { .. } => CipherKind::Caesar,
            CipherSpec::RailFence { .. } => CipherKind::RailFence,
            CipherSpec::Playfair { .. } => CipherKind::Playfair,
            CipherSpec::Hill { .. } => CipherKind::Hill,
            CipherSpec::Poly { .. } => CipherKind::Poly,
        }
    }

    /// Whether callers should strip non-letters before this cipher.
    ///
    /// Caesar and Polyalphabetic pass other characters through, the rest
    /// only ever see letters.
    pub fn passes_through_non_letters(&self) -> bool {
        matches!(self, CipherSpec::Caesar { .. } | CipherSpec::Poly { .. })
    }
}
