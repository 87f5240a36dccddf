//! Splitting front matter from the prompt body.

use thiserror::Error;

/// The line that opens and closes a front matter block.
pub const DELIMITER: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontMatterError {
    #[error("missing closing delimiter '---' for front matter")]
    MissingClosingDelimiter,
}

/// Result of splitting front matter from a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatterSplit<'a> {
    /// Header text between the delimiter lines, trimmed. `None` when the
    /// document has no front matter.
    pub header: Option<&'a str>,
    /// Everything after the closing delimiter line, or the whole document.
    pub body: &'a str,
}

/// Whether the first line of `text` is exactly the delimiter.
pub fn starts_with_delimiter(text: &str) -> bool {
    opening_line_len(text).is_some()
}

/// Split front matter from `text`.
///
/// Front matter must start at offset zero:
/// ```text
/// ---
/// title = "Hello"
/// ---
/// Body
/// ```
/// Only the first later line consisting of `---` closes the header, so
/// `---` lines in the body stay in the body.
pub fn split_front_matter(text: &str) -> Result<FrontMatterSplit<'_>, FrontMatterError> {
    let Some(opening) = opening_line_len(text) else {
        return Ok(FrontMatterSplit { header: None, body: text });
    };

    let rest = &text[opening..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line_content(line) == DELIMITER {
            return Ok(FrontMatterSplit {
                header: Some(rest[..offset].trim()),
                body: &rest[offset + line.len()..],
            });
        }
        offset += line.len();
    }

    Err(FrontMatterError::MissingClosingDelimiter)
}

/// Byte length of the opening delimiter line including its line break.
fn opening_line_len(text: &str) -> Option<usize> {
    if !text.starts_with(DELIMITER) {
        return None;
    }
    let line = match text.find('\n') {
        Some(i) => &text[..=i],
        None => text,
    };
    (line_content(line) == DELIMITER).then_some(line.len())
}

fn line_content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
