use std::collections::BTreeSet;

/// One piece of a template, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Text copied through unchanged.
    Literal(&'a str),
    /// `{{` or `}}`, standing for a single brace.
    Escaped(char),
    /// `{name}` or `{name:spec}`; `raw` is the full source text of the token.
    Field { name: &'a str, spec: Option<&'a str>, raw: &'a str },
    /// A `{` with no closing `}`, or a `}` outside any placeholder.
    Unmatched { brace: char, position: usize },
}

/// Split a template into tokens, scanning left to right.
///
/// A doubled brace outside a placeholder is an escape. Inside a placeholder the
/// first `}` closes it, so `{{{key}}}` is an escaped `{`, the field `key`, and
/// an escaped `}`.
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b != b'{' && b != b'}' {
            i += 1;
            continue;
        }

        if literal_start < i {
            tokens.push(Token::Literal(&text[literal_start..i]));
        }

        if bytes.get(i + 1) == Some(&b) {
            tokens.push(Token::Escaped(b as char));
            i += 2;
        } else if b == b'{' {
            match text[i + 1..].find('}') {
                Some(rel) => {
                    let end = i + 1 + rel;
                    let inner = &text[i + 1..end];
                    let (name, spec) = match inner.split_once(':') {
                        Some((name, spec)) => (name, Some(spec)),
                        None => (inner, None),
                    };
                    tokens.push(Token::Field { name, spec, raw: &text[i..=end] });
                    i = end + 1;
                }
                None => {
                    tokens.push(Token::Unmatched { brace: '{', position: i });
                    i += 1;
                }
            }
        } else {
            tokens.push(Token::Unmatched { brace: '}', position: i });
            i += 1;
        }
        literal_start = i;
    }

    if literal_start < bytes.len() {
        tokens.push(Token::Literal(&text[literal_start..]));
    }
    tokens
}

/// Extract the distinct placeholder names referenced by `text`.
///
/// Escaped braces are ignored and a format spec after `:` is not part of the
/// name. `{}` contributes the empty name.
///
/// ```
/// use textprompts_core::extract_placeholders;
///
/// let names = extract_placeholders("Item {0}: {name} costs {price:.2f} {{not}}");
/// assert_eq!(names.into_iter().collect::<Vec<_>>(), ["0", "name", "price"]);
/// ```
pub fn extract_placeholders(text: &str) -> BTreeSet<String> {
    tokenize(text)
        .into_iter()
        .filter_map(|token| match token {
            Token::Field { name, .. } => Some(name.to_string()),
            _ => None,
        })
        .collect()
}

/// Summary of the placeholders in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderInfo {
    pub count: usize,
    pub names: BTreeSet<String>,
    pub has_positional: bool,
    pub has_named: bool,
    pub is_mixed: bool,
}

impl PlaceholderInfo {
    pub fn from_text(text: &str) -> Self {
        Self::from_names(extract_placeholders(text))
    }

    pub fn from_names(names: BTreeSet<String>) -> Self {
        let has_positional = names.iter().any(|n| is_positional(n));
        let has_named = names.iter().any(|n| !is_positional(n));
        Self {
            count: names.len(),
            names,
            has_positional,
            has_named,
            is_mixed: has_positional && has_named,
        }
    }
}

/// `{0}`, `{12}`: all ASCII digits. The empty name is not positional here.
fn is_positional(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<String> {
        extract_placeholders(text).into_iter().collect()
    }

    #[test]
    fn finds_named_and_positional() {
        assert_eq!(names("Hello {name}, you are {0}"), ["0", "name"]);
    }

    #[test]
    fn strips_format_spec() {
        assert_eq!(names("{count:04d} {price:.2f}"), ["count", "price"]);
    }

    #[test]
    fn escaped_braces_are_not_placeholders() {
        assert!(extract_placeholders("{{x}}").is_empty());
        assert_eq!(names("Escaped {{braces}} but {real} placeholder"), ["real"]);
    }

    #[test]
    fn triple_braces_contain_one_placeholder() {
        assert_eq!(names("{{{key}}}"), ["key"]);
    }

    #[test]
    fn empty_placeholder_is_kept() {
        assert_eq!(names("a {} b {}"), [""]);
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(names("{a} {a:>3} {a}"), ["a"]);
    }

    #[test]
    fn unmatched_braces_are_not_placeholders() {
        assert!(extract_placeholders("a } b").is_empty());
        assert!(extract_placeholders("a { b").is_empty());
    }

    #[test]
    fn no_placeholders() {
        assert!(extract_placeholders("plain text, no braces").is_empty());
        assert!(extract_placeholders("").is_empty());
    }

    #[test]
    fn tokenize_keeps_source_order() {
        let tokens = tokenize("Hi {name:>5}! {{ok}} }");
        assert_eq!(
            tokens,
            vec![
                Token::Literal("Hi "),
                Token::Field { name: "name", spec: Some(">5"), raw: "{name:>5}" },
                Token::Literal("! "),
                Token::Escaped('{'),
                Token::Literal("ok"),
                Token::Escaped('}'),
                Token::Literal(" "),
                Token::Unmatched { brace: '}', position: 21 },
            ]
        );
    }

    #[test]
    fn info_classifies_names() {
        let info = PlaceholderInfo::from_text("Hello {name}, you have {count:d} items");
        assert_eq!(info.count, 2);
        assert!(info.has_named);
        assert!(!info.has_positional);
        assert!(!info.is_mixed);

        let info = PlaceholderInfo::from_text("{0} and {who}");
        assert!(info.is_mixed);
    }
}
