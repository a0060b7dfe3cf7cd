//! Default value rendering
//!
//! The page shows defaults as loosely formatted literals (`true`, `88`, `["E", "F"]`,
//! `{"a": 1}`, bare words). [`render_value`] turns one of them into the text placed after
//! `key = `. The cases are tried in a fixed order and the first match wins:
//!
//! | Case              | Example in          | Example out            |
//! |-------------------|---------------------|------------------------|
//! | `-rgx` setting    | `"^_(.*)\d$"`       | `"^_(.*)\\d$"`         |
//! | literal keyword   | `true`, `[]`, `{}`  | unchanged              |
//! | quoted string     | `"py39"`            | unchanged              |
//! | integer           | `88`                | unchanged              |
//! | list              | `["E", "F"]`        | one element per line   |
//! | mapping           | `{"a": 1}`          | `{"a" = 1}`            |
//! | anything else     | `concise`           | `"concise"`            |
//!
//! Lists and mappings are split on the literal `", "`. An element that itself contains
//! `", "` inside quotes is split too; the output is then misaligned but still rendered.

use once_cell::sync::Lazy;
use regex::Regex;

const REGEX_SUFFIX: &str = "-rgx";
const LITERALS: [&str; 4] = ["true", "false", "[]", "{}"];
const ELEMENT_SEPARATOR: &str = ", ";
const INDENT: &str = "    ";

static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+(_[0-9]+)*$").expect("integer pattern is valid"));

/// Render the raw default `value` of the setting `name` as TOML.
pub fn render_value(name: &str, value: &str) -> String {
    if name.ends_with(REGEX_SUFFIX) {
        let unquoted = strip_quotes(value).replace('\\', "\\\\");
        return format!("\"{unquoted}\"");
    }
    if LITERALS.contains(&value) || value.starts_with('"') {
        return value.to_string();
    }
    if INTEGER.is_match(value) {
        return value.to_string();
    }
    if value.starts_with('[') {
        let separator = format!(",\n{INDENT}");
        let elements = strip_enclosing(value)
            .split(ELEMENT_SEPARATOR)
            .collect::<Vec<_>>()
            .join(&separator);
        return format!("[\n{INDENT}{elements},\n]");
    }
    if value.starts_with('{') {
        return convert_key_separators(value);
    }
    format!("\"{value}\"")
}

/// Render the entries of a mapping literal as the body of a `[table]`, one entry per line.
pub fn render_table_body(value: &str) -> String {
    convert_key_separators(strip_enclosing(value))
        .split(ELEMENT_SEPARATOR)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop the first and the last character, e.g. the brackets of `[1, 2]`.
pub fn strip_enclosing(value: &str) -> &str {
    let mut chars = value.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Remove one pair of surrounding double quotes, when present.
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

/// `"key": value` → `"key" = value`
fn convert_key_separators(value: &str) -> String {
    value.replace("\":", "\" =")
}
