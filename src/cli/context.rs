use std::path::{Path, PathBuf};

use classicrypt::Result;
use classicrypt::config::app_config::{AppConfig, CONFIG_FILE, default_config_dir};

/// Per-invocation settings shared by the commands.
///
/// Built once in `main` from the global flags and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: AppConfig,
    /// Directory of the config file; the history file lives next to it.
    pub config_dir: PathBuf,
    /// Skip input normalization, from `--raw` or the config.
    pub raw: bool,
}

impl Context {
    pub fn load(config_path: Option<&str>, raw: bool) -> Result<Self> {
        let (path, explicit) = match config_path {
            Some(p) => (PathBuf::from(p), true),
            None => (default_config_dir().join(CONFIG_FILE), false),
        };
        let config = AppConfig::load(&path, explicit)?;
        let config_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let raw = raw || !config.classicrypt.normalize_input;

        Ok(Self {
            config,
            config_dir,
            raw,
        })
    }
}
