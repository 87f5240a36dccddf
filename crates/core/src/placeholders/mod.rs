//! Placeholder extraction and substitution.
//!
//! Placeholders use the `{name}` / `{name:spec}` syntax. `{{` and `}}` are
//! literal braces, and `{}` is the "next positional" placeholder, recorded
//! under the empty name.

pub mod extractor;
pub mod formatter;
pub mod value;

pub use extractor::{PlaceholderInfo, extract_placeholders};
pub use formatter::{FormatArgs, FormatError, FormatSpec, MAX_SPEC_NUMBER, format};
pub use value::FormatValue;
