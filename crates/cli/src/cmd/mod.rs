pub mod check;
pub mod doctor;
pub mod format;
pub mod new;
pub mod placeholders;
pub mod show;

use std::path::Path;

use textprompts_core::config::{ConfigLoader, ResolvedConfig};
use textprompts_core::{MetadataMode, Prompt, load_prompt};

/// Load the configuration or exit with an error.
pub fn load_config(config: Option<&Path>) -> ResolvedConfig {
    match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    }
}

/// Load the configuration, publish its metadata defaults, and start logging.
pub fn setup(config: Option<&Path>) -> ResolvedConfig {
    let rc = load_config(config);
    rc.apply_globals();
    start_logging(&rc);
    rc
}

/// Start logging or exit with an error naming the log file.
pub fn start_logging(rc: &ResolvedConfig) {
    if let Err(e) = crate::logging::init(&rc.logging) {
        let file = rc.logging.file.as_deref().unwrap_or(Path::new(""));
        eprintln!("Error: failed to open log file {}: {e}", file.display());
        std::process::exit(1);
    }
}

/// Load a single prompt or exit with an error.
pub fn load_or_exit(path: &Path, mode: Option<MetadataMode>) -> Prompt {
    match load_prompt(path, mode) {
        Ok(prompt) => prompt,
        Err(e) => fail(&e),
    }
}

/// Print `err` and exit with status 1, flushing the file logger first.
pub fn fail(err: &dyn std::fmt::Display) -> ! {
    eprintln!("Error: {err}");
    crate::logging::shutdown();
    std::process::exit(1);
}
