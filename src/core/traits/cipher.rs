use crate::core::errors::Result;
use crate::core::models::cipher_spec::CipherKind;

/// Port for the classical cipher transforms.
///
/// Implementations live in `adapters::ciphers`. Each one owns its
/// validated key, so `encode`/`decode` only deal with the text.
pub trait Cipher: Send + Sync {
    /// Transform plaintext into ciphertext.
    fn encode(&self, text: &str) -> Result<String>;

    /// Transform ciphertext back into plaintext.
    fn decode(&self, text: &str) -> Result<String>;

    /// Which cipher family this is.
    fn kind(&self) -> CipherKind;

    /// Human-readable name of this cipher (e.g. "Rail Fence").
    fn name(&self) -> &'static str {
        self.kind().display_name()
    }
}

impl<C: Cipher + ?Sized> Cipher for Box<C> {
    fn encode(&self, text: &str) -> Result<String> {
        (**self).encode(text)
    }

    fn decode(&self, text: &str) -> Result<String> {
        (**self).decode(text)
    }

    fn kind(&self) -> CipherKind {
        (**self).kind()
    }
}
