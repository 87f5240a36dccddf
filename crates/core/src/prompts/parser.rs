//! Turning raw prompt text into a [`Prompt`].
//!
//! The path through the parser depends on the metadata mode and on whether
//! the text opens with a `---` line:
//!
//! | mode   | front matter      | outcome                                   |
//! |--------|-------------------|-------------------------------------------|
//! | ignore | any               | whole text is the body, title from source |
//! | strict | none              | `MissingMetadata`                         |
//! | strict | unterminated      | `MalformedHeader`                         |
//! | strict | present           | decoded; title/description/version needed |
//! | allow  | none              | empty metadata                            |
//! | allow  | unterminated      | `MalformedHeader`                         |
//! | allow  | present           | decoded, any fields accepted              |

use std::path::{Path, PathBuf};

use super::source::PromptSource;
use super::types::Prompt;
use crate::config::{MetadataMode, resolve_mode, warn_on_ignored_metadata};
use crate::errors::TextPromptsError;
use crate::frontmatter::{PromptMeta, decode_metadata, split_front_matter, starts_with_delimiter};

/// Source id recorded for in-memory prompts parsed without a name.
pub const INLINE_SOURCE: &str = "<inline>";

/// Title given to in-memory prompts that have neither a title nor a name.
pub const INLINE_TITLE: &str = "inline";

/// Parse a prompt from `source`.
///
/// `mode` falls back to the process default when `None`.
pub fn parse_source<S>(
    source: &S,
    id: &str,
    mode: Option<MetadataMode>,
) -> Result<Prompt, TextPromptsError>
where
    S: PromptSource + ?Sized,
{
    if !source.exists(id) {
        return Err(TextPromptsError::SourceMissing(id.to_string()));
    }
    let raw = source
        .read_to_string(id)
        .map_err(|e| TextPromptsError::Io { path: PathBuf::from(id), source: e })?;
    parse_content(&raw, id, resolve_mode(mode))
}

/// Parse a prompt from text in memory.
///
/// `source_id` names the prompt (its file stem becomes the fallback title);
/// pass `""` for anonymous text.
pub fn parse_str(
    content: &str,
    source_id: &str,
    mode: Option<MetadataMode>,
) -> Result<Prompt, TextPromptsError> {
    let id = if source_id.is_empty() { INLINE_SOURCE } else { source_id };
    parse_content(content, id, resolve_mode(mode))
}

fn parse_content(raw: &str, id: &str, mode: MetadataMode) -> Result<Prompt, TextPromptsError> {
    if raw.trim().is_empty() {
        return Err(TextPromptsError::EmptyContent { id: id.to_string() });
    }

    let (mut meta, body) = match mode {
        MetadataMode::Ignore => {
            if starts_with_delimiter(raw) && warn_on_ignored_metadata() {
                tracing::warn!(
                    source = id,
                    "content starts with '---' but metadata is ignored; \
                     use the allow or strict mode to parse it"
                );
            }
            (PromptMeta::default(), raw)
        }
        MetadataMode::Strict | MetadataMode::Allow => {
            let split = split_front_matter(raw)
                .map_err(|_| TextPromptsError::MalformedHeader { id: id.to_string() })?;
            match split.header {
                Some(header) => {
                    let meta = decode_metadata(header, mode).map_err(|source| {
                        TextPromptsError::InvalidMetadata { id: id.to_string(), source }
                    })?;
                    (meta, split.body)
                }
                None if mode == MetadataMode::Strict => {
                    return Err(TextPromptsError::MissingMetadata { id: id.to_string() });
                }
                None => (PromptMeta::default(), split.body),
            }
        }
    };

    if meta.title.as_deref().is_none_or(|t| t.trim().is_empty()) {
        meta.title = Some(fallback_title(id));
    }

    let body = dedent(body);
    let body = body.trim();
    if body.is_empty() {
        return Err(TextPromptsError::EmptyContent { id: id.to_string() });
    }

    tracing::debug!(source = id, %mode, body_len = body.len(), "parsed prompt");
    Prompt::new(id, meta, body)
}

/// Title used when the metadata has none: the file stem of `id`.
pub fn fallback_title(id: &str) -> String {
    if id.is_empty() || id == INLINE_SOURCE {
        return INLINE_TITLE.to_string();
    }
    Path::new(id)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| INLINE_TITLE.to_string())
}

/// Remove the longest run of leading spaces and tabs shared by every
/// non-blank line. Other whitespace, such as U+3000, is content.
///
/// Lines holding only spaces and tabs are emptied and do not count towards
/// the common margin.
pub fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.lines() {
        if is_blank(line) {
            continue;
        }
        let indent = &line[..line.len() - line.trim_start_matches(INDENT).len()];
        margin = Some(match margin {
            Some(m) => common_prefix(m, indent),
            None => indent,
        });
    }
    let margin = margin.unwrap_or("");

    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let (content, ending) = match line.strip_suffix('\n') {
            Some(content) => (content, "\n"),
            None => (line, ""),
        };
        if !is_blank(content) {
            out.push_str(content.strip_prefix(margin).unwrap_or(content));
        }
        out.push_str(ending);
    }
    out
}

const INDENT: [char; 2] = [' ', '\t'];

fn is_blank(line: &str) -> bool {
    line.trim_end_matches('\r').trim_start_matches(INDENT).is_empty()
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map_or(0, |((i, c), _)| i + c.len_utf8());
    &a[..len]
}
