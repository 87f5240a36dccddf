use std::collections::BTreeSet;
use std::fmt;
use std::ops::Deref;

use crate::placeholders::{FormatArgs, FormatError, PlaceholderInfo, extract_placeholders, format};

/// Template text paired with the placeholder names it contains.
///
/// The placeholder set is computed once from the text when the value is
/// built; there is no way to change one without the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptString {
    text: String,
    placeholders: BTreeSet<String>,
}

impl PromptString {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let placeholders = extract_placeholders(&text);
        Self { text, placeholders }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn placeholders(&self) -> &BTreeSet<String> {
        &self.placeholders
    }

    pub fn info(&self) -> PlaceholderInfo {
        PlaceholderInfo::from_names(self.placeholders.clone())
    }

    /// Substitute every placeholder, failing if any has no value.
    pub fn format(&self, args: &FormatArgs) -> Result<String, FormatError> {
        self.format_with(args, false)
    }

    /// Substitute the placeholders that have values and leave the rest as
    /// written.
    pub fn format_partial(&self, args: &FormatArgs) -> Result<String, FormatError> {
        self.format_with(args, true)
    }

    pub fn format_with(&self, args: &FormatArgs, skip_validation: bool) -> Result<String, FormatError> {
        format(&self.text, &self.placeholders, args, skip_validation)
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Deref for PromptString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for PromptString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for PromptString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for PromptString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PromptString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
