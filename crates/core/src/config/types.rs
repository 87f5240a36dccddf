use std::path::PathBuf;

use serde::Deserialize;

use super::mode::MetadataMode;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub loading: LoadingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: 1,
            metadata: MetadataConfig::default(),
            loading: LoadingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetadataConfig {
    /// Default strictness for parses that do not pass a mode. Unset keeps
    /// the environment or built-in default.
    #[serde(default)]
    pub mode: Option<MetadataMode>,
    #[serde(default = "default_true")]
    pub warn_on_ignored: bool,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self { mode: None, warn_on_ignored: true }
    }
}

/// Defaults for bulk loading from directories.
#[derive(Debug, Deserialize, Clone)]
pub struct LoadingConfig {
    #[serde(default = "default_glob")]
    pub glob: String,
    #[serde(default)]
    pub recursive: bool,
    /// Maximum number of files per bulk load; `0` disables the limit.
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self { glob: default_glob(), recursive: false, max_files: default_max_files() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_true() -> bool {
    true
}

pub(crate) fn default_glob() -> String {
    "*.txt".to_string()
}

pub(crate) fn default_max_files() -> usize {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Where the configuration came from; `None` when built-in defaults are used.
    pub source: Option<PathBuf>,
    pub metadata: MetadataConfig,
    pub loading: LoadingConfig,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Push the configured metadata defaults into the process-wide settings.
    pub fn apply_globals(&self) {
        if let Some(mode) = self.metadata.mode {
            super::global::set_default_mode(mode);
        }
        super::global::set_warn_on_ignored_metadata(self.metadata.warn_on_ignored);
    }

    /// `max_files` as used by the loader: `0` means unlimited.
    pub fn max_files(&self) -> Option<usize> {
        match self.loading.max_files {
            0 => None,
            n => Some(n),
        }
    }
}
