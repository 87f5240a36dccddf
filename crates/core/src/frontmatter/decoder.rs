//! Decoding front matter text into [`PromptMeta`].

use chrono::{DateTime, NaiveDate};
use thiserror::Error;
use toml::Value;

use super::types::PromptMeta;
use crate::config::MetadataMode;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("invalid TOML in front matter: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error(
        "missing or empty required metadata fields: {}; strict mode requires non-empty \
         'title', 'description', and 'version' (use the allow mode for less strict validation)",
        .fields.join(", ")
    )]
    Incomplete { fields: Vec<String> },

    #[error("metadata field '{field}' must be {expected}")]
    InvalidField { field: String, expected: &'static str },
}

/// Decode a front matter header.
///
/// Standard keys map onto [`PromptMeta`] fields; scalar values are coerced to
/// strings and `created` is read as a date (an unparseable date is dropped).
/// Other keys are kept in [`PromptMeta::extra`]. In strict mode `title`,
/// `description`, and `version` must all be non-blank, and every offending
/// field is reported.
pub fn decode_metadata(text: &str, mode: MetadataMode) -> Result<PromptMeta, MetadataError> {
    let table: toml::Table = toml::from_str(text)?;
    let meta = meta_from_table(table)?;

    if mode == MetadataMode::Strict {
        let missing = meta.missing_required();
        if !missing.is_empty() {
            return Err(MetadataError::Incomplete {
                fields: missing.into_iter().map(String::from).collect(),
            });
        }
    }

    tracing::debug!(title = ?meta.title, extra = meta.extra.len(), "decoded front matter");
    Ok(meta)
}

fn meta_from_table(table: toml::Table) -> Result<PromptMeta, MetadataError> {
    let mut meta = PromptMeta::default();

    for (key, value) in table {
        match key.as_str() {
            "title" => meta.title = Some(coerce_string(&key, value)?),
            "version" => meta.version = Some(coerce_string(&key, value)?),
            "author" => meta.author = Some(coerce_string(&key, value)?),
            "description" => meta.description = Some(coerce_string(&key, value)?),
            "created" => {
                meta.created = coerce_date(&value);
                if meta.created.is_none() {
                    tracing::debug!(value = %value, "ignoring unparseable 'created' date");
                }
            }
            _ => {
                meta.extra.insert(key, value);
            }
        }
    }

    Ok(meta)
}

fn coerce_string(field: &str, value: Value) -> Result<String, MetadataError> {
    match value {
        Value::String(s) => Ok(s),
        Value::Array(_) | Value::Table(_) => Err(MetadataError::InvalidField {
            field: field.to_string(),
            expected: "a string",
        }),
        other => Ok(other.to_string()),
    }
}

fn coerce_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Datetime(dt) => {
            let date = dt.date?;
            NaiveDate::from_ymd_opt(
                i32::from(date.year),
                u32::from(date.month),
                u32::from(date.day),
            )
        }
        Value::String(s) => {
            let s = s.trim();
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        }
        _ => None,
    }
}
