use crate::core::errors::Result;
use crate::core::models::cipher_spec::Direction;
use crate::core::models::operation::OperationRecord;
use crate::core::traits::cipher::Cipher;

/// Result of one transform plus its history record.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    pub text: String,
    pub record: OperationRecord,
}

/// Runs a `Cipher` in either direction and describes what it did.
pub struct CipherService<C: Cipher> {
    pub cipher: C,
}

impl<C: Cipher> CipherService<C> {
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Encode or decode `text` with the bound cipher.
    pub fn run(&self, direction: Direction, text: &str) -> Result<Transformed> {
        let output = match direction {
            Direction::Encode => self.cipher.encode(text),
            Direction::Decode => self.cipher.decode(text),
        };

        let output = output.inspect_err(|e| {
            tracing::debug!(cipher = self.cipher.name(), %direction, error = %e, "transform rejected");
        })?;

        tracing::debug!(
            cipher = self.cipher.name(),
            %direction,
            input_len = text.len(),
            output_len = output.len(),
            "transform complete"
        );

        let record = OperationRecord::new(self.cipher.kind(), direction, text, &output);
        Ok(Transformed {
            text: output,
            record,
        })
    }
}
