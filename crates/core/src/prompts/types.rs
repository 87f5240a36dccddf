use std::fmt;
use std::path::{Path, PathBuf};

use super::string::PromptString;
use crate::config::MetadataMode;
use crate::errors::TextPromptsError;
use crate::frontmatter::PromptMeta;
use crate::placeholders::{FormatArgs, FormatError};

/// A parsed prompt: where it came from, its metadata, and its template body.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    path: PathBuf,
    meta: PromptMeta,
    prompt: PromptString,
}

impl Prompt {
    /// Build a prompt. The body must contain something other than whitespace.
    pub fn new(
        path: impl Into<PathBuf>,
        meta: PromptMeta,
        body: impl Into<String>,
    ) -> Result<Self, TextPromptsError> {
        let path = path.into();
        let body = body.into();
        if body.trim().is_empty() {
            return Err(TextPromptsError::EmptyContent { id: path.display().to_string() });
        }
        Ok(Self { path, meta, prompt: PromptString::new(body) })
    }

    /// Load a prompt file, see [`load_prompt`](super::load_prompt).
    pub fn from_path(
        path: impl AsRef<Path>,
        mode: Option<MetadataMode>,
    ) -> Result<Self, TextPromptsError> {
        super::loader::load_prompt(path, mode)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn meta(&self) -> &PromptMeta {
        &self.meta
    }

    pub fn prompt(&self) -> &PromptString {
        &self.prompt
    }

    pub fn body(&self) -> &str {
        self.prompt.as_str()
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.title.as_deref()
    }

    pub fn format(&self, args: &FormatArgs) -> Result<String, FormatError> {
        self.prompt.format(args)
    }

    pub fn format_partial(&self, args: &FormatArgs) -> Result<String, FormatError> {
        self.prompt.format_partial(args)
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prompt.as_str())
    }
}
