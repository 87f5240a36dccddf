//! Front matter splitting, decoding, and serialization.
//!
//! This module provides functionality to:
//! - Split a `---` delimited TOML header from the prompt body
//! - Decode the header into [`PromptMeta`] under a [`MetadataMode`](crate::MetadataMode)
//! - Serialize metadata and a body back into prompt file text

pub mod decoder;
pub mod parser;
pub mod serializer;
pub mod types;

pub use decoder::{MetadataError, decode_metadata};
pub use parser::{DELIMITER, FrontMatterError, FrontMatterSplit, split_front_matter, starts_with_delimiter};
pub use serializer::{SerializeError, serialize_prompt};
pub use types::{PromptMeta, REQUIRED_FIELDS, STANDARD_FIELDS};
