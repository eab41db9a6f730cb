use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::config::app_config::HistorySection;
use crate::core::errors::{CipherError, Result};
use crate::core::models::cipher_spec::CipherKind;
use crate::core::models::operation::OperationRecord;
use crate::core::traits::history::HistoryLogger;

/// History logger that appends records as JSON lines to a file.
///
/// Each line is a self-contained `OperationRecord`, so appends never
/// rewrite the file and reads can stream line by line.
pub struct JsonHistoryLogger {
    log_path: PathBuf,
}

impl JsonHistoryLogger {
    /// Create a logger that writes to `{config_dir}/{log_file}`.
    pub fn new(config_dir: &Path, log_file: &str) -> Self {
        Self {
            log_path: config_dir.join(log_file),
        }
    }

    pub fn from_config(config_dir: &Path, section: &HistorySection) -> Self {
        Self::new(config_dir, &section.log_file)
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

impl HistoryLogger for JsonHistoryLogger {
    fn log_event(&self, record: &OperationRecord) -> Result<()> {
        let line = serde_json::to_string(record).map_err(|e| CipherError::HistoryError {
            detail: format!("Failed to serialize history record: {e}"),
        })?;

        if let Some(parent) = self.log_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| CipherError::HistoryError {
                detail: format!("Cannot open history at {}: {e}", self.log_path.display()),
            })?;

        writeln!(file, "{line}").map_err(|e| CipherError::HistoryError {
            detail: format!("Failed to write history record: {e}"),
        })?;

        tracing::debug!(path = %self.log_path.display(), "history record appended");
        Ok(())
    }

    fn query(&self, cipher: Option<CipherKind>) -> Result<Vec<OperationRecord>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.log_path).map_err(|e| CipherError::HistoryError {
            detail: format!("Cannot read history: {e}"),
        })?;

        let mut records = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| CipherError::HistoryError {
                detail: format!("Error reading history line {}: {e}", line_num + 1),
            })?;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let record: OperationRecord =
                serde_json::from_str(trimmed).map_err(|e| CipherError::HistoryError {
                    detail: format!("Malformed history record at line {}: {e}", line_num + 1),
                })?;

            if cipher.is_some_and(|wanted| record.cipher != wanted) {
                continue;
            }

            records.push(record);
        }

        Ok(records)
    }
}
