//! Classical cipher transforms: Caesar, Rail Fence, Playfair, Hill and
//! Polyalphabetic (Vigenère) substitution.
//!
//! These ciphers are for teaching and puzzles. None of them is secure.
//!
//! Each cipher is a small value holding its validated key and implementing
//! [`Cipher`]. Callers that pick a cipher at runtime describe it with a
//! [`CipherSpec`] and turn it into a boxed cipher with [`build`].
//!
//! ```
//! use classicrypt::{Cipher, CipherSpec, build};
//!
//! let cipher = build(&CipherSpec::RailFence { rails: 3 }).unwrap();
//! let encoded = cipher.encode("WEAREDISCOVEREDFLEEATONCE").unwrap();
//! assert_eq!(encoded, "WECRLTEERDSOEEFEAOCAIVDEN");
//! assert_eq!(cipher.decode(&encoded).unwrap(), "WEAREDISCOVEREDFLEEATONCE");
//! ```

pub mod adapters;
pub mod config;
pub mod core;

pub use crate::adapters::ciphers::{Caesar, Hill, Playfair, Polyalphabetic, RailFence, build};
pub use crate::core::errors::{CipherError, Result};
pub use crate::core::models::cipher_spec::{CipherKind, CipherSpec, Direction};
pub use crate::core::text::normalize;
pub use crate::core::traits::cipher::Cipher;
