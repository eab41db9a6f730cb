use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::adapters::ciphers::hill::DEFAULT_KEY_MATRIX;
use crate::core::errors::{CipherError, Result};
use crate::core::text::DEFAULT_FILLER;

/// File name looked up inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration read from `config.toml`.
///
/// Every section is optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub classicrypt: GeneralSection,
    pub playfair: PlayfairSection,
    pub hill: HillSection,
    pub history: HistorySection,
}

impl AppConfig {
    /// Load `path` if it exists, defaults otherwise.
    ///
    /// An explicitly passed path must exist. Filler letters are validated
    /// here so a bad config fails before any text is read.
    pub fn load(path: &Path, explicit: bool) -> Result<Self> {
        if !path.exists() {
            if explicit {
                return Err(CipherError::InvalidConfig {
                    detail: format!("{} not found", path.display()),
                });
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| CipherError::InvalidConfig {
            detail: format!("Failed to parse {CONFIG_FILE}: {e}"),
        })?;

        validate_filler("playfair.filler", config.playfair.filler, true)?;
        validate_filler("hill.filler", config.hill.filler, false)?;
        if config.history.log_file.contains(['/', '\\']) || config.history.log_file.contains("..")
        {
            return Err(CipherError::InvalidConfig {
                detail: format!(
                    "history.log_file must be a plain file name, got '{}'",
                    config.history.log_file
                ),
            });
        }

        Ok(config)
    }
}

fn validate_filler(field: &str, filler: char, forbid_j: bool) -> Result<()> {
    let upper = filler.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() || (forbid_j && upper == 'J') {
        return Err(CipherError::InvalidConfig {
            detail: format!("{field} must be a letter, got '{filler}'"),
        });
    }
    Ok(())
}

/// Default directory holding `config.toml` and the history file.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("classicrypt"))
        .unwrap_or_else(|| PathBuf::from(".classicrypt"))
}

/// The `[classicrypt]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSection {
    /// Uppercase and strip non-letters before every cipher.
    pub normalize_input: bool,
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            normalize_input: true,
        }
    }
}

/// The `[playfair]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayfairSection {
    pub filler: char,
}

impl Default for PlayfairSection {
    fn default() -> Self {
        Self {
            filler: DEFAULT_FILLER,
        }
    }
}

/// The `[hill]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HillSection {
    pub filler: char,
    /// Key used when `--matrix` is not given.
    pub matrix: Vec<i64>,
}

impl Default for HillSection {
    fn default() -> Self {
        Self {
            filler: DEFAULT_FILLER,
            matrix: DEFAULT_KEY_MATRIX.to_vec(),
        }
    }
}

/// The `[history]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistorySection {
    pub enabled: bool,
    pub log_file: String,
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            enabled: false,
            log_file: "history.log".to_string(),
        }
    }
}
