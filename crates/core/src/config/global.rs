//! Process-wide default settings.
//!
//! The default mode is read at the start of every parse that is not given an
//! explicit mode. Writes are last-writer-visible: a parse running while the
//! default changes may observe either value, so callers needing isolation
//! should pass a mode explicitly.

use std::sync::{LazyLock, PoisonError, RwLock};

use super::mode::{MetadataMode, ParseModeError};

/// Environment variable consulted once, when the settings are first touched.
pub const MODE_ENV_VAR: &str = "TEXTPROMPTS_METADATA_MODE";

#[derive(Debug, Clone, Copy)]
struct Settings {
    mode: MetadataMode,
    warn_on_ignored: bool,
}

static SETTINGS: LazyLock<RwLock<Settings>> = LazyLock::new(|| {
    let mode = std::env::var(MODE_ENV_VAR)
        .ok()
        .and_then(|v| v.parse::<MetadataMode>().ok())
        .unwrap_or_default();
    RwLock::new(Settings { mode, warn_on_ignored: true })
});

fn read() -> Settings {
    *SETTINGS.read().unwrap_or_else(PoisonError::into_inner)
}

fn update(f: impl FnOnce(&mut Settings)) {
    let mut guard = SETTINGS.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard);
}

/// Current process-wide default metadata mode.
pub fn default_mode() -> MetadataMode {
    read().mode
}

pub fn set_default_mode(mode: MetadataMode) {
    tracing::debug!(%mode, "default metadata mode changed");
    update(|s| s.mode = mode);
}

/// Like [`set_default_mode`], accepting `"strict"`, `"allow"`, or `"ignore"`.
pub fn set_default_mode_str(mode: &str) -> Result<(), ParseModeError> {
    set_default_mode(mode.parse()?);
    Ok(())
}

/// Shorthand for `set_default_mode(MetadataMode::Ignore)`.
pub fn skip_metadata() {
    set_default_mode(MetadataMode::Ignore);
}

/// Whether `Ignore` mode logs an advisory for content that starts with `---`.
pub fn warn_on_ignored_metadata() -> bool {
    read().warn_on_ignored
}

pub fn set_warn_on_ignored_metadata(warn: bool) {
    update(|s| s.warn_on_ignored = warn);
}

/// Explicit mode wins; otherwise the process default.
pub fn resolve_mode(explicit: Option<MetadataMode>) -> MetadataMode {
    explicit.unwrap_or_else(default_mode)
}
