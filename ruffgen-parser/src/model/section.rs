//! A named group of settings, rendered as one TOML table

use super::Setting;
use crate::rendering::render_table_body;
use std::fmt;

/// Name of the section holding settings that live at the document root.
pub const TOP_LEVEL: &str = "Top-level";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub settings: Vec<Setting>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            settings: Vec::new(),
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.name == TOP_LEVEL
    }

    /// Header of the sub-table holding the entries of a mapping-valued setting.
    /// `Top-level` is no exception: only its own header is suppressed.
    fn table_header(&self, setting: &Setting) -> String {
        format!("[{}.{}]", self.name, setting.name)
    }
}

impl fmt::Display for Section {
    /// Settings render in document order, except non-empty mappings: those follow the
    /// plain settings as their own `[section.setting]` tables.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        if !self.is_top_level() {
            lines.push(format!("[{}]", self.name));
        }

        let (tables, plain): (Vec<&Setting>, Vec<&Setting>) = self
            .settings
            .iter()
            .partition(|setting| setting.is_non_empty_dict());
        lines.extend(plain.iter().map(|setting| setting.to_string()));

        for setting in tables {
            let Some(value) = &setting.default_value else {
                continue;
            };
            lines.push(String::new());
            lines.extend(setting.comment_lines());
            lines.push(self.table_header(setting));
            lines.push(render_table_body(value));
        }

        lines.push(String::new());
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_settings_in_order() {
        let mut section = Section::new("lint.isort");
        section.settings.push(Setting::new("force-wrap-aliases").with_default("false"));
        section.settings.push(Setting::new("lines-after-imports").with_default("-1"));
        assert_eq!(
            section.to_string(),
            "[lint.isort]\nforce-wrap-aliases = false\nlines-after-imports = -1\n"
        );
    }

    #[test]
    fn top_level_has_no_header() {
        let mut section = Section::new(TOP_LEVEL);
        section.settings.push(Setting::new("fix").with_default("false"));
        assert_eq!(section.to_string(), "fix = false\n");
    }

    #[test]
    fn empty_section_is_just_its_header() {
        assert_eq!(Section::new("format").to_string(), "[format]\n");
    }

    #[test]
    fn non_empty_mappings_are_deferred_to_sub_tables() {
        let mut section = Section::new("lint");
        section.settings.push(
            Setting::new("per-file-ignores")
                .with_default(r#"{"a": 1, "b": 2}"#)
                .with_comments(["Ignores per file."]),
        );
        section.settings.push(Setting::new("preview").with_default("false"));
        section.settings.push(Setting::new("extend-per-file-ignores").with_default("{}"));

        assert_eq!(
            section.to_string(),
            concat!(
                "[lint]\n",
                "preview = false\n",
                "extend-per-file-ignores = {}\n",
                "\n",
                "# Ignores per file.\n",
                "[lint.per-file-ignores]\n",
                "\"a\" = 1\n",
                "\"b\" = 2\n",
            )
        );
    }

    #[test]
    fn top_level_mapping_table_keeps_the_section_prefix() {
        let mut section = Section::new(TOP_LEVEL);
        section.settings.push(Setting::new("fix").with_default("false"));
        section
            .settings
            .push(Setting::new("aliases").with_default(r#"{"x": "y"}"#));
        assert_eq!(
            section.to_string(),
            "fix = false\n\n[Top-level.aliases]\n\"x\" = \"y\"\n"
        );
    }
}
