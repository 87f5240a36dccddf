//! Log output for the CLI.
//!
//! Events go to stderr at `logging.level`. When `logging.file` is set they are
//! also appended to that file at `logging.file_level`, or `logging.level` when
//! unset. `RUST_LOG` directives refine both filters.

use std::fs::{self, File, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;

use textprompts_core::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static FILE_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Install the global subscriber. Fails only when the log file cannot be opened.
pub fn init(cfg: &LoggingConfig) -> io::Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .with_filter(filter_for(&cfg.level, LevelFilter::INFO));

    let file_layer = match &cfg.file {
        Some(path) => {
            let level = cfg.file_level.as_deref().unwrap_or(&cfg.level);
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            if let Ok(mut g) = FILE_GUARD.lock() {
                *g = Some(guard);
            }
            Some(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(filter_for(level, LevelFilter::DEBUG)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
    Ok(())
}

/// Flush the file logger. Needed before `process::exit`, which skips destructors.
pub fn shutdown() {
    if let Ok(mut g) = FILE_GUARD.lock() {
        g.take();
    }
}

/// Runs append to the same file; missing parent directories are created.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn filter_for(level: &str, fallback: LevelFilter) -> EnvFilter {
    let level = parse_level(level).unwrap_or(fallback);
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
