//! Serialization of prompts back to front matter text.

use thiserror::Error;
use toml::Value;

use super::parser::DELIMITER;
use super::types::PromptMeta;

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("failed to encode front matter as TOML: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Render `meta` and `body` as prompt file text.
///
/// `title`, `description`, and `version` are always written (empty when
/// absent) so the file can be filled in and loaded in strict mode. `author`
/// and `created` follow when set, then the extension keys in their order.
pub fn serialize_prompt(meta: &PromptMeta, body: &str) -> Result<String, SerializeError> {
    let header = toml::to_string(&header_table(meta))?;
    Ok(format!("{DELIMITER}\n{header}{DELIMITER}\n\n{body}"))
}

fn header_table(meta: &PromptMeta) -> toml::Table {
    let mut table = toml::Table::new();
    let text = |v: &Option<String>| Value::String(v.clone().unwrap_or_default());

    table.insert("title".into(), text(&meta.title));
    table.insert("description".into(), text(&meta.description));
    table.insert("version".into(), text(&meta.version));
    if let Some(author) = &meta.author {
        table.insert("author".into(), Value::String(author.clone()));
    }
    if let Some(created) = meta.created {
        table.insert("created".into(), Value::String(created.format("%Y-%m-%d").to_string()));
    }
    for (key, value) in &meta.extra {
        if !table.contains_key(key) {
            table.insert(key.clone(), value.clone());
        }
    }
    table
}
