//! Prompt metadata.

use chrono::NaiveDate;
use serde_json::{Map, Number, Value as JsonValue};
use toml::Value;

/// Keys with a dedicated field in [`PromptMeta`].
pub const STANDARD_FIELDS: [&str; 5] = ["title", "version", "author", "created", "description"];

/// Keys that strict mode requires to be present and non-blank, sorted.
pub const REQUIRED_FIELDS: [&str; 3] = ["description", "title", "version"];

/// Metadata decoded from a prompt's front matter.
///
/// Every field is optional here; which ones must be present depends on the
/// metadata mode and is checked while decoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptMeta {
    pub title: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub created: Option<NaiveDate>,
    pub description: Option<String>,
    /// Keys not recognized as standard fields, in header order.
    pub extra: toml::Table,
}

impl PromptMeta {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        is_blank(self.title.as_deref())
            && is_blank(self.version.as_deref())
            && is_blank(self.author.as_deref())
            && is_blank(self.description.as_deref())
            && self.created.is_none()
            && self.extra.is_empty()
    }

    /// Required fields that are absent or blank, in sorted order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .into_iter()
            .filter(|field| {
                let value = match *field {
                    "title" => self.title.as_deref(),
                    "description" => self.description.as_deref(),
                    _ => self.version.as_deref(),
                };
                is_blank(value)
            })
            .collect()
    }

    /// JSON view of the metadata. Absent standard fields are `null`; extension
    /// keys appear under `extra` when there are any.
    pub fn to_json(&self) -> JsonValue {
        let mut map = Map::new();
        map.insert("title".into(), opt_string(self.title.as_deref()));
        map.insert("version".into(), opt_string(self.version.as_deref()));
        map.insert("author".into(), opt_string(self.author.as_deref()));
        map.insert(
            "created".into(),
            self.created.map_or(JsonValue::Null, |d| JsonValue::String(d.format("%Y-%m-%d").to_string())),
        );
        map.insert("description".into(), opt_string(self.description.as_deref()));
        if !self.extra.is_empty() {
            let extra = self.extra.iter().map(|(k, v)| (k.clone(), toml_to_json(v))).collect();
            map.insert("extra".into(), JsonValue::Object(extra));
        }
        JsonValue::Object(map)
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

fn opt_string(value: Option<&str>) -> JsonValue {
    value.map_or(JsonValue::Null, |s| JsonValue::String(s.to_string()))
}

fn toml_to_json(value: &Value) -> JsonValue {
    match value {
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Integer(i) => JsonValue::Number((*i).into()),
        Value::Float(f) => Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Datetime(dt) => JsonValue::String(dt.to_string()),
        Value::Array(items) => JsonValue::Array(items.iter().map(toml_to_json).collect()),
        Value::Table(table) => JsonValue::Object(
            table.iter().map(|(k, v)| (k.clone(), toml_to_json(v))).collect(),
        ),
    }
}
