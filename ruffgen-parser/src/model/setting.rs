//! A single setting: key, raw default value and the documentation above it

use crate::rendering::render_value;
use std::fmt;

/// Raw defaults that mean "not configured".
const UNSET_VALUES: [&str; 2] = ["None", "null"];

/// One configuration key as documented on the settings page.
///
/// `default_value` keeps the text exactly as shown on the page; conversion to TOML
/// happens only when rendering. `None` means the page never gave a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub name: String,
    pub default_value: Option<String>,
    pub comments: Vec<String>,
}

impl Setting {
    pub fn new(name: impl Into<String>) -> Self {
        Setting {
            name: name.into(),
            default_value: None,
            comments: Vec::new(),
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments.extend(comments.into_iter().map(Into::into));
        self
    }

    /// True when the default is a brace-delimited mapping with at least one entry.
    pub fn is_non_empty_dict(&self) -> bool {
        match &self.default_value {
            Some(value) => value != "{}" && value.starts_with('{') && value.ends_with('}'),
            None => false,
        }
    }

    /// True when the setting has no usable default and is rendered commented out.
    pub fn is_unset(&self) -> bool {
        match &self.default_value {
            Some(value) => UNSET_VALUES.contains(&value.as_str()),
            None => true,
        }
    }

    /// The documentation lines as TOML comments.
    pub fn comment_lines(&self) -> Vec<String> {
        self.comments
            .iter()
            .map(|comment| format!("# {comment}").trim_end().to_string())
            .collect()
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.comment_lines() {
            writeln!(f, "{line}")?;
        }
        match &self.default_value {
            Some(value) if !self.is_unset() => {
                write!(f, "{} = {}", self.name, render_value(&self.name, value))
            }
            _ => write!(f, "#{} =", self.name),
        }
    }
}
