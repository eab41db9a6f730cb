/// All domain errors for classicrypt.
///
/// Each variant names the cipher involved so the message is useful
/// without a backtrace.
#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    #[error("Invalid key for {cipher}: {reason}")]
    InvalidKey { cipher: &'static str, reason: String },

    #[error("Invalid input for {cipher}: {reason}")]
    InvalidInput { cipher: &'static str, reason: String },

    #[error(
        "Invalid configuration: {detail}\n\n  \
         Check the file passed with --config, or remove it to use defaults."
    )]
    InvalidConfig { detail: String },

    #[error("History log error: {detail}")]
    HistoryError { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CipherError {
    pub(crate) fn invalid_key(cipher: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            cipher,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_input(cipher: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            cipher,
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_display_names_cipher() {
        let err = CipherError::invalid_key("Rail Fence", "rails must be at least 2");
        assert_eq!(
            err.to_string(),
            "Invalid key for Rail Fence: rails must be at least 2"
        );
    }

    #[test]
    fn invalid_input_display_names_cipher() {
        let err = CipherError::invalid_input("Playfair", "odd length");
        assert_eq!(err.to_string(), "Invalid input for Playfair: odd length");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CipherError = io.into();
        assert!(matches!(err, CipherError::Io(_)));
    }
}
