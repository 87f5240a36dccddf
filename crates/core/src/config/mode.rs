//! The metadata strictness policy.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// How the front matter of a prompt file is treated while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataMode {
    /// A front matter block is required and `title`, `description`, and
    /// `version` must be present and non-blank.
    Strict,
    /// Front matter is decoded when present; missing or partial metadata is
    /// accepted.
    #[default]
    Allow,
    /// Front matter is not decoded at all. The whole file is the body and the
    /// title comes from the source name.
    Ignore,
}

impl MetadataMode {
    pub const ALL: [MetadataMode; 3] =
        [MetadataMode::Strict, MetadataMode::Allow, MetadataMode::Ignore];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataMode::Strict => "strict",
            MetadataMode::Allow => "allow",
            MetadataMode::Ignore => "ignore",
        }
    }
}

impl fmt::Display for MetadataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid metadata mode: '{0}' (expected 'strict', 'allow', or 'ignore')")]
pub struct ParseModeError(pub String);

impl FromStr for MetadataMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(MetadataMode::Strict),
            "allow" => Ok(MetadataMode::Allow),
            "ignore" => Ok(MetadataMode::Ignore),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
