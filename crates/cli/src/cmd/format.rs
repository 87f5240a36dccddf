use textprompts_core::{FormatArgs as Values, FormatValue};

use super::{fail, load_or_exit};
use crate::FormatArgs;

pub fn run(args: &FormatArgs) {
    let prompt = load_or_exit(&args.file, args.meta);

    let mut values = Values::new();
    for value in &args.args {
        values.push_arg(infer_value(value));
    }
    for (key, value) in &args.vars {
        values.insert(key.as_str(), infer_value(value));
    }

    let rendered =
        if args.partial { prompt.format_partial(&values) } else { prompt.format(&values) };
    match rendered {
        Ok(text) => println!("{text}"),
        Err(e) => fail(&e),
    }
}

/// Parse a `KEY=VALUE` pair. The value may itself contain `=`.
pub fn parse_var(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

/// Integers and decimals become numbers so numeric format specs apply.
fn infer_value(raw: &str) -> FormatValue {
    if let Ok(i) = raw.parse::<i64>() {
        return FormatValue::Integer(i);
    }
    if raw.contains('.') {
        if let Ok(x) = raw.parse::<f64>() {
            return FormatValue::Float(x);
        }
    }
    FormatValue::from(raw)
}
