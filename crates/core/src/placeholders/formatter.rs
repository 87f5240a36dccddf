//! Placeholder substitution.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use super::extractor::{Token, tokenize};
use super::value::FormatValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Validation found placeholders with no bound value. Both lists are sorted.
    #[error("missing format variables: {missing:?}")]
    MissingVariables { missing: Vec<String>, provided: Vec<String> },

    #[error("single '{brace}' encountered at byte {position} of the format string")]
    UnmatchedBrace { brace: char, position: usize },
}

/// Positional and named arguments for a format call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatArgs {
    positional: Vec<FormatValue>,
    named: BTreeMap<String, FormatValue>,
}

impl FormatArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument; it is bound to its index (`"0"`, `"1"`, ...).
    #[must_use]
    pub fn arg(mut self, value: impl Into<FormatValue>) -> Self {
        self.positional.push(value.into());
        self
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>, value: impl Into<FormatValue>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    pub fn push_arg(&mut self, value: impl Into<FormatValue>) {
        self.positional.push(value.into());
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FormatValue>) {
        self.named.insert(name.into(), value.into());
    }

    pub fn positional(&self) -> &[FormatValue] {
        &self.positional
    }

    pub fn named_values(&self) -> &BTreeMap<String, FormatValue> {
        &self.named
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Name to value lookup used for substitution.
    ///
    /// Named arguments by key, positional arguments by index. When the
    /// template has an empty `{}` placeholder it is bound to the first
    /// positional argument.
    fn bindings(&self, placeholders: &BTreeSet<String>) -> BTreeMap<String, &FormatValue> {
        let mut map: BTreeMap<String, &FormatValue> =
            self.named.iter().map(|(k, v)| (k.clone(), v)).collect();
        for (i, value) in self.positional.iter().enumerate() {
            map.insert(i.to_string(), value);
        }
        if placeholders.contains("")
            && let Some(first) = self.positional.first()
        {
            map.insert(String::new(), first);
        }
        map
    }
}

impl<K, V> FromIterator<(K, V)> for FormatArgs
where
    K: Into<String>,
    V: Into<FormatValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = FormatArgs::new();
        for (k, v) in iter {
            args.insert(k, v);
        }
        args
    }
}

/// Substitute `args` into `text`.
///
/// `placeholders` must be the extracted placeholder set of `text`. Unless
/// `skip_validation` is set, every placeholder must be bound or the call
/// fails before any substitution. With `skip_validation`, unbound
/// placeholders are copied through verbatim (`{name}` or `{name:spec}`) for a
/// later pass. Escaped braces always render as single braces.
pub fn format(
    text: &str,
    placeholders: &BTreeSet<String>,
    args: &FormatArgs,
    skip_validation: bool,
) -> Result<String, FormatError> {
    let bindings = args.bindings(placeholders);

    if !skip_validation {
        let missing: Vec<String> =
            placeholders.iter().filter(|p| !bindings.contains_key(*p)).cloned().collect();
        if !missing.is_empty() {
            return Err(FormatError::MissingVariables {
                missing,
                provided: bindings.keys().cloned().collect(),
            });
        }
    }

    let mut out = String::with_capacity(text.len());
    for token in tokenize(text) {
        match token {
            Token::Literal(s) => out.push_str(s),
            Token::Escaped(c) => out.push(c),
            Token::Field { name, spec, raw } => match bindings.get(name) {
                Some(value) => out.push_str(&render(value, spec)),
                None => out.push_str(raw),
            },
            Token::Unmatched { brace, position } => {
                return Err(FormatError::UnmatchedBrace { brace, position });
            }
        }
    }
    Ok(out)
}

fn render(value: &FormatValue, spec: Option<&str>) -> String {
    match spec.and_then(FormatSpec::parse) {
        Some(spec) => spec.apply(value),
        None => value.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpecKind {
    Plain,
    Integer,
    Fixed,
    Text,
}

/// The supported format-spec subset: `[0][width][.precision][d|f|s]`.
///
/// `d` renders integers, `f` renders integers and floats with a fixed number
/// of decimals (6 by default). Numbers are right-aligned, text left-aligned;
/// the `0` flag pads numbers with zeros after the sign. A spec outside this
/// subset, or with a width or precision above [`MAX_SPEC_NUMBER`], does not
/// parse and the value is stringified as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    zero_pad: bool,
    width: Option<usize>,
    precision: Option<usize>,
    kind: SpecKind,
}

impl FormatSpec {
    pub fn parse(spec: &str) -> Option<Self> {
        let (zero_pad, rest) = match spec.strip_prefix('0') {
            Some(rest) => (true, rest),
            None => (false, spec),
        };
        let (width, rest) = take_number(rest)?;
        let (precision, rest) = match rest.strip_prefix('.') {
            Some(after) => match take_number(after)? {
                (Some(p), rest) => (Some(p), rest),
                (None, _) => return None,
            },
            None => (None, rest),
        };
        let kind = match rest {
            "" => SpecKind::Plain,
            "d" => SpecKind::Integer,
            "f" => SpecKind::Fixed,
            "s" => SpecKind::Text,
            _ => return None,
        };
        Some(Self { zero_pad, width, precision, kind })
    }

    pub fn apply(&self, value: &FormatValue) -> String {
        let body = match (self.kind, value) {
            (SpecKind::Integer, FormatValue::Integer(i)) => i.to_string(),
            (SpecKind::Fixed, FormatValue::Integer(i)) => {
                #[allow(clippy::cast_precision_loss)]
                let x = *i as f64;
                format!("{:.*}", self.precision.unwrap_or(6), x)
            }
            (SpecKind::Fixed, FormatValue::Float(x)) => {
                format!("{:.*}", self.precision.unwrap_or(6), x)
            }
            // Type mismatch or no type: plain stringification.
            _ => value.to_string(),
        };
        let numeric = value.is_numeric() && self.kind != SpecKind::Text;
        self.pad(body, numeric)
    }

    fn pad(&self, body: String, numeric: bool) -> String {
        let Some(width) = self.width else {
            return body;
        };
        let len = body.chars().count();
        if len >= width {
            return body;
        }
        let fill = width - len;
        if numeric && self.zero_pad {
            let (sign, digits) = match body.strip_prefix('-') {
                Some(digits) => ("-", digits),
                None => ("", body.as_str()),
            };
            format!("{sign}{}{digits}", "0".repeat(fill))
        } else if numeric {
            format!("{}{body}", " ".repeat(fill))
        } else {
            format!("{body}{}", " ".repeat(fill))
        }
    }
}

/// Largest width or precision a format spec may ask for.
pub const MAX_SPEC_NUMBER: usize = 1024;

/// Leading digits of `s` and the remainder. `None` when the number is above
/// [`MAX_SPEC_NUMBER`].
fn take_number(s: &str) -> Option<(Option<usize>, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return Some((None, s));
    }
    let n = s[..end].parse::<usize>().ok().filter(|n| *n <= MAX_SPEC_NUMBER)?;
    Some((Some(n), &s[end..]))
}
