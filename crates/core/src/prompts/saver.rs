//! Writing prompts back to disk.

use std::fs;
use std::path::Path;

use super::types::Prompt;
use crate::errors::TextPromptsError;
use crate::frontmatter::{PromptMeta, serialize_prompt};

/// Write `prompt` to `path` with a TOML front matter header.
pub fn save_prompt(path: impl AsRef<Path>, prompt: &Prompt) -> Result<(), TextPromptsError> {
    write(path.as_ref(), prompt.meta(), prompt.body())
}

/// Write `body` to `path` under a header with empty `title`, `description`,
/// and `version` fields, ready to be filled in.
pub fn save_prompt_text(path: impl AsRef<Path>, body: &str) -> Result<(), TextPromptsError> {
    write(path.as_ref(), &PromptMeta::default(), body)
}

fn write(path: &Path, meta: &PromptMeta, body: &str) -> Result<(), TextPromptsError> {
    let text = serialize_prompt(meta, body)
        .map_err(|source| TextPromptsError::Serialize { path: path.to_path_buf(), source })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|source| TextPromptsError::Io { path: parent.to_path_buf(), source })?;
    }
    fs::write(path, text)
        .map_err(|source| TextPromptsError::Io { path: path.to_path_buf(), source })?;

    tracing::debug!(path = %path.display(), "saved prompt");
    Ok(())
}
