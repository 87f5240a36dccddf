//! Loading prompt files from disk.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use super::parser::parse_source;
use super::source::FsSource;
use super::types::Prompt;
use crate::config::{MetadataMode, ResolvedConfig};
use crate::config::types::{default_glob, default_max_files};
use crate::errors::TextPromptsError;

/// Options for [`load_prompts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Descend into subdirectories of directory arguments.
    pub recursive: bool,
    /// Pattern file names must match inside directories. A pattern containing
    /// `/` is matched against the path relative to the directory instead.
    pub glob: String,
    /// `None` uses the process default.
    pub mode: Option<MetadataMode>,
    /// Maximum number of prompts to load; `None` for no limit.
    pub max_files: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            glob: default_glob(),
            mode: None,
            max_files: Some(default_max_files()),
        }
    }
}

impl LoadOptions {
    pub fn from_config(cfg: &ResolvedConfig) -> Self {
        Self {
            recursive: cfg.loading.recursive,
            glob: cfg.loading.glob.clone(),
            mode: None,
            max_files: cfg.max_files(),
        }
    }
}

/// Load a single prompt file.
pub fn load_prompt(
    path: impl AsRef<Path>,
    mode: Option<MetadataMode>,
) -> Result<Prompt, TextPromptsError> {
    let path = path.as_ref();
    parse_source(&FsSource::new(), &path.to_string_lossy(), mode)
}

/// Load every prompt named by `paths`.
///
/// Files are loaded as given; directories contribute the files matching
/// `opts.glob`, in path order. Nothing is loaded when more than
/// `opts.max_files` files are found ([`TextPromptsError::TooManyFiles`]).
pub fn load_prompts<P: AsRef<Path>>(
    paths: &[P],
    opts: &LoadOptions,
) -> Result<Vec<Prompt>, TextPromptsError> {
    let files = collect_prompt_files(paths, opts)?;
    let prompts =
        files.iter().map(|file| load_prompt(file, opts.mode)).collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = prompts.len(), "loaded prompts");
    Ok(prompts)
}

/// The files [`load_prompts`] would load, without parsing them.
pub fn collect_prompt_files<P: AsRef<Path>>(
    paths: &[P],
    opts: &LoadOptions,
) -> Result<Vec<PathBuf>, TextPromptsError> {
    let pattern = Pattern::new(&opts.glob).map_err(|source| TextPromptsError::InvalidPattern {
        pattern: opts.glob.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            files.extend(discover_prompt_files(path, &pattern, opts.recursive)?);
        } else {
            files.push(path.to_path_buf());
        }

        if let Some(limit) = opts.max_files
            && files.len() > limit
        {
            return Err(TextPromptsError::TooManyFiles { limit });
        }
    }
    Ok(files)
}

/// Files under `root` matching `pattern`, sorted by path.
pub fn discover_prompt_files(
    root: &Path,
    pattern: &Pattern,
    recursive: bool,
) -> Result<Vec<PathBuf>, TextPromptsError> {
    let match_relative = pattern.as_str().contains('/');
    let walker = WalkDir::new(root).min_depth(1).max_depth(if recursive { usize::MAX } else { 1 });

    let mut out = Vec::new();
    for entry in walker {
        let entry = entry
            .map_err(|source| TextPromptsError::Walk { path: root.to_path_buf(), source })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matched = if match_relative {
            entry.path().strip_prefix(root).is_ok_and(|rel| pattern.matches_path(rel))
        } else {
            pattern.matches(&entry.file_name().to_string_lossy())
        };
        if matched {
            out.push(entry.into_path());
        }
    }

    out.sort();
    Ok(out)
}
