pub mod caesar;
pub mod hill;
pub mod playfair;
pub mod polyalphabetic;
pub mod rail_fence;

use crate::core::errors::Result;
use crate::core::models::cipher_spec::CipherSpec;
use crate::core::traits::cipher::Cipher;

pub use caesar::Caesar;
pub use hill::Hill;
pub use playfair::Playfair;
pub use polyalphabetic::Polyalphabetic;
pub use rail_fence::RailFence;

/// Build the concrete cipher for `spec`, validating its key.
pub fn build(spec: &CipherSpec) -> Result<Box<dyn Cipher>> {
    let cipher: Box<dyn Cipher> = match spec {
        CipherSpec::Caesar { shift } => Box::new(Caesar::new(*shift)),
        CipherSpec::RailFence { rails } => Box::new(RailFence::new(*rails)?),
        CipherSpec::Playfair { key, filler } => Box::new(Playfair::with_filler(key, *filler)?),
        CipherSpec::Hill { matrix, filler } => Box::new(Hill::with_filler(matrix, *filler)?),
        CipherSpec::Poly { key } => Box::new(Polyalphabetic::new(key)?),
    };
    Ok(cipher)
}
