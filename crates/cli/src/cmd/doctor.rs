use std::path::Path;

use textprompts_core::config::{ConfigLoader, MODE_ENV_VAR, default_config_path};
use textprompts_core::default_mode;

pub fn run(config: Option<&Path>) {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            rc.apply_globals();
            super::start_logging(&rc);
            tracing::debug!(source = ?rc.source, "config resolved");

            println!("OK   textprompts doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("loaded: {}", rc.source.is_some());
            println!("metadata.mode: {}", default_mode());
            println!("metadata.warn_on_ignored: {}", rc.metadata.warn_on_ignored);
            println!("loading.glob: {}", rc.loading.glob);
            println!("loading.recursive: {}", rc.loading.recursive);
            println!("loading.max_files: {}", rc.loading.max_files);
            println!("logging.level: {}", rc.logging.level);
            if let Some(file) = &rc.logging.file {
                println!("logging.file: {}", file.display());
            }
            if let Ok(value) = std::env::var(MODE_ENV_VAR) {
                println!("env {MODE_ENV_VAR}: {value}");
            }
        }
        Err(e) => {
            println!("FAIL textprompts doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
