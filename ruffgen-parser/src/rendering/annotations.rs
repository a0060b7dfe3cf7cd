//! Inline rule descriptions
//!
//! Rule identifiers such as `"S101",` show up on their own line inside list values.
//! [`annotate`] pads such a line and appends `# <description>` so the generated file
//! explains which rule each code refers to.

use crate::text::split_lines;
use std::collections::BTreeMap;

/// Rule identifier → human readable description.
pub type RuleDescriptions = BTreeMap<String, String>;

/// Width reserved for the identifier before its description comment starts.
pub const ANNOTATION_COLUMN: usize = 9;

/// Annotate every line of `text` whose content (ignoring spaces, quotes and commas)
/// is a known rule identifier. Each resulting line ends with a newline.
pub fn annotate(text: &str, descriptions: &RuleDescriptions) -> String {
    let mut output = String::with_capacity(text.len());
    for line in split_lines(text) {
        output.push_str(&annotate_line(line, descriptions));
        output.push('\n');
    }
    output
}

fn annotate_line(line: &str, descriptions: &RuleDescriptions) -> String {
    let rule_id = line.trim_matches(|c| c == ' ' || c == '"' || c == ',');
    match descriptions.get(rule_id) {
        Some(description) => {
            let padding = ANNOTATION_COLUMN.saturating_sub(rule_id.chars().count());
            format!("{line}{}# {description}", " ".repeat(padding))
        }
        None => line.to_string(),
    }
}
