//! Prompt documents: parsing, loading, and saving.

pub mod loader;
pub mod parser;
pub mod saver;
pub mod source;
pub mod string;
pub mod types;

pub use loader::{
    LoadOptions, collect_prompt_files, discover_prompt_files, load_prompt, load_prompts,
};
pub use parser::{INLINE_SOURCE, INLINE_TITLE, dedent, fallback_title, parse_source, parse_str};
pub use saver::{save_prompt, save_prompt_text};
pub use source::{FsSource, MemorySource, PromptSource};
pub use string::PromptString;
pub use types::Prompt;
