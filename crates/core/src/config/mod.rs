//! Metadata strictness modes and process-wide configuration.

pub mod global;
pub mod loader;
pub mod mode;
pub mod types;

pub use global::{
    MODE_ENV_VAR, default_mode, resolve_mode, set_default_mode, set_default_mode_str,
    set_warn_on_ignored_metadata, skip_metadata, warn_on_ignored_metadata,
};
pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use mode::{MetadataMode, ParseModeError};
pub use types::{ConfigFile, LoadingConfig, LoggingConfig, MetadataConfig, ResolvedConfig};
