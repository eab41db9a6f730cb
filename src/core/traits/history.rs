use crate::core::errors::Result;
use crate::core::models::cipher_spec::CipherKind;
use crate::core::models::operation::OperationRecord;

/// Port for recording and querying past cipher operations.
pub trait HistoryLogger: Send + Sync {
    /// Append a record to the history.
    fn log_event(&self, record: &OperationRecord) -> Result<()>;

    /// Query all records, optionally filtered by cipher.
    fn query(&self, cipher: Option<CipherKind>) -> Result<Vec<OperationRecord>>;
}
