//! Error taxonomy for prompt loading and formatting.
//!
//! Every failure in the crate surfaces as one [`TextPromptsError`] variant so
//! callers can branch on the kind (retry with a looser mode, fall back to a
//! default prompt, or report it).

use std::path::PathBuf;

use thiserror::Error;

pub use crate::config::mode::ParseModeError;
pub use crate::frontmatter::decoder::MetadataError;
pub use crate::frontmatter::parser::FrontMatterError;
pub use crate::frontmatter::serializer::SerializeError;
pub use crate::placeholders::formatter::FormatError;

#[derive(Debug, Error)]
pub enum TextPromptsError {
    #[error("file not found: {0}")]
    SourceMissing(String),

    #[error("prompt is empty: {id}")]
    EmptyContent { id: String },

    #[error(
        "malformed header in {id}: missing closing delimiter '---' for front matter \
         (use the ignore metadata mode if the file has no metadata and starts with '---')"
    )]
    MalformedHeader { id: String },

    #[error("invalid metadata in {id}: {source}")]
    InvalidMetadata {
        id: String,
        #[source]
        source: MetadataError,
    },

    #[error(
        "no metadata found in {id}: strict mode requires a front matter block with \
         title, description, and version"
    )]
    MissingMetadata { id: String },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("exceeded max_files limit of {limit}")]
    TooManyFiles { limit: usize },

    #[error("failed to serialize prompt for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: SerializeError,
    },
}

impl TextPromptsError {
    /// Short, stable name of the error kind, used by the CLI when reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            TextPromptsError::SourceMissing(_) => "source-missing",
            TextPromptsError::EmptyContent { .. } => "empty-content",
            TextPromptsError::MalformedHeader { .. } => "malformed-header",
            TextPromptsError::InvalidMetadata { .. } => "invalid-metadata",
            TextPromptsError::MissingMetadata { .. } => "missing-metadata",
            TextPromptsError::Format(_) => "format",
            TextPromptsError::Io { .. } => "io",
            TextPromptsError::Walk { .. } => "walk",
            TextPromptsError::InvalidPattern { .. } => "invalid-pattern",
            TextPromptsError::TooManyFiles { .. } => "too-many-files",
            TextPromptsError::Serialize { .. } => "serialize",
        }
    }
}
