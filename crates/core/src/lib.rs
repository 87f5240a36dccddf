//! Prompt templates stored as plain text files with optional TOML front matter.
//!
//! A prompt file looks like this:
//!
//! ```text
//! ---
//! title = "Support agent"
//! description = "System prompt for the support bot"
//! version = "1.0"
//! ---
//!
//! You are {role}. Answer in {language}.
//! ```
//!
//! [`prompts::parse_str`] and [`prompts::parse_source`] turn such text into a
//! [`Prompt`], and [`Prompt::format`] substitutes the `{name}` placeholders.

#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod errors;
pub mod frontmatter;
pub mod placeholders;
pub mod prompts;

pub use config::{
    MetadataMode, default_mode, set_default_mode, set_warn_on_ignored_metadata,
    skip_metadata, warn_on_ignored_metadata,
};
pub use errors::{FormatError, TextPromptsError};
pub use frontmatter::PromptMeta;
pub use placeholders::{FormatArgs, FormatValue, PlaceholderInfo, extract_placeholders};
pub use prompts::{
    LoadOptions, Prompt, PromptString, collect_prompt_files, load_prompt, load_prompts,
    parse_source, parse_str, save_prompt, save_prompt_text,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
