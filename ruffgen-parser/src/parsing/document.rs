//! Section/setting state machine
//!
//! Nodes are consumed strictly in document order. The latest section is the target for
//! every finished setting; at most one setting is open at a time.
//!
//! | Node                      | No open setting       | Open setting                       |
//! |---------------------------|-----------------------|------------------------------------|
//! | section heading           | start section         | error                              |
//! | setting heading           | open setting          | error                              |
//! | "Default value:" para     | ignored               | set default, attach, close         |
//! | other paragraph           | ignored               | text lines → comments              |
//! | list                      | ignored               | `- item` lines → comments          |
//! | block "Deprecated…"       | ignored               | drop setting                       |
//! | block `highlight`         | ignored               | `---`, code lines, `---` → comments |
//! | anything else             | ignored               | ignored                            |
//!
//! A setting still open when the nodes run out is dropped.

use super::nodes::ContentNode;
use crate::error::ParseError;
use crate::model::{Configuration, Setting};
use crate::text::split_lines;
use tracing::{debug, trace};

const DEFAULT_VALUE_MARKER: &str = "Default value:";
const DEPRECATION_MARKER: &str = "Deprecated";
const HIGHLIGHT_CLASS: &str = "highlight";
const CODE_DELIMITER: &str = "---";

/// Which headings open sections and which open settings.
///
/// The settings page has used two layouts over time: `h2`/`h3` sections with `h4`
/// settings (the default), and `h2` sections with `h3` settings ([`HeadingLayout::legacy`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLayout {
    /// Tag name of the element whose children are parsed.
    pub container_tag: String,
    pub section_levels: Vec<u8>,
    pub setting_level: u8,
    /// Permalink glyph trailing section headings, removed from section names.
    pub heading_suffix: String,
}

impl HeadingLayout {
    pub fn legacy() -> Self {
        HeadingLayout {
            section_levels: vec![2],
            setting_level: 3,
            ..HeadingLayout::default()
        }
    }

    fn is_section(&self, level: u8) -> bool {
        self.section_levels.contains(&level)
    }

    fn section_name(&self, text: &str) -> String {
        let text = text.trim_end();
        let text = if self.heading_suffix.is_empty() {
            text
        } else {
            text.strip_suffix(self.heading_suffix.as_str()).unwrap_or(text)
        };
        text.trim().to_string()
    }
}

impl Default for HeadingLayout {
    fn default() -> Self {
        HeadingLayout {
            container_tag: "article".to_string(),
            section_levels: vec![2, 3],
            setting_level: 4,
            heading_suffix: "¶".to_string(),
        }
    }
}

/// Builds sections and settings from [`ContentNode`]s.
pub struct DocumentParser<'a> {
    layout: &'a HeadingLayout,
}

impl<'a> DocumentParser<'a> {
    pub fn new(layout: &'a HeadingLayout) -> Self {
        DocumentParser { layout }
    }

    /// Feed every node into `config` and return it.
    pub fn parse<I>(&self, nodes: I, mut config: Configuration) -> Result<Configuration, ParseError>
    where
        I: IntoIterator<Item = ContentNode>,
    {
        let mut current: Option<Setting> = None;
        for node in nodes {
            current = self.step(node, current, &mut config)?;
        }
        if let Some(setting) = current {
            debug!(setting = %setting.name, "dropping setting without default value at end of document");
        }
        Ok(config)
    }

    /// Apply one node; returns the setting that is open afterwards.
    fn step(
        &self,
        node: ContentNode,
        current: Option<Setting>,
        config: &mut Configuration,
    ) -> Result<Option<Setting>, ParseError> {
        match node {
            ContentNode::Heading { level, text, .. } if self.layout.is_section(level) => {
                let name = self.layout.section_name(&text);
                if let Some(open) = current {
                    return Err(ParseError::UnterminatedSetting {
                        setting: open.name,
                        heading: name,
                    });
                }
                debug!(section = %name, "section");
                config.new_section(name);
                Ok(None)
            }

            ContentNode::Heading { level, text, code } if level == self.layout.setting_level => {
                let heading = text.trim().to_string();
                if let Some(open) = current {
                    return Err(ParseError::UnterminatedSetting {
                        setting: open.name,
                        heading,
                    });
                }
                let name = code.ok_or(ParseError::MissingSettingName { heading })?;
                trace!(setting = %name, "setting opened");
                Ok(Some(Setting::new(name)))
            }

            ContentNode::Paragraph { text, code } => {
                let Some(mut setting) = current else {
                    return Ok(None);
                };
                if text.starts_with(DEFAULT_VALUE_MARKER) {
                    let value = code.ok_or_else(|| ParseError::MissingDefaultValue {
                        setting: setting.name.clone(),
                    })?;
                    trace!(setting = %setting.name, %value, "setting closed");
                    setting.default_value = Some(value);
                    config.add_setting(setting)?;
                    return Ok(None);
                }
                setting.comments.extend(split_lines(&text).into_iter().map(str::to_string));
                Ok(Some(setting))
            }

            ContentNode::List { items } => {
                let Some(mut setting) = current else {
                    return Ok(None);
                };
                for item in items {
                    setting
                        .comments
                        .extend(split_lines(&format!("- {item}")).into_iter().map(str::to_string));
                }
                Ok(Some(setting))
            }

            ContentNode::Block { text, classes } => {
                let Some(mut setting) = current else {
                    return Ok(None);
                };
                if text.trim().starts_with(DEPRECATION_MARKER) {
                    debug!(setting = %setting.name, "dropping deprecated setting");
                    return Ok(None);
                }
                if !is_highlight(&classes) {
                    return Ok(Some(setting));
                }
                setting.comments.push(CODE_DELIMITER.to_string());
                setting.comments.extend(split_lines(&text).into_iter().map(str::to_string));
                setting.comments.push(CODE_DELIMITER.to_string());
                Ok(Some(setting))
            }

            ContentNode::Heading { .. } | ContentNode::Other => Ok(current),
        }
    }
}

/// Code samples carry exactly the `highlight` class.
fn is_highlight(classes: &[String]) -> bool {
    matches!(classes, [class] if class == HIGHLIGHT_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TOP_LEVEL;

    fn parse(nodes: Vec<ContentNode>) -> Result<Configuration, ParseError> {
        let layout = HeadingLayout::default();
        DocumentParser::new(&layout).parse(nodes, Configuration::new("ruff", "1.0"))
    }

    fn setting_heading(name: &str) -> ContentNode {
        ContentNode::heading(4, name, Some(name))
    }

    fn default_value(value: &str) -> ContentNode {
        ContentNode::paragraph(format!("Default value: {value}"), Some(value))
    }

    #[test]
    fn minimal_document_yields_one_setting() {
        let config = parse(vec![
            ContentNode::heading(2, "Top-level¶", None),
            setting_heading("fix"),
            ContentNode::paragraph("Enable fix behavior by-default.", None),
            default_value("true"),
        ])
        .unwrap();

        assert_eq!(config.sections.len(), 1);
        let section = &config.sections[0];
        assert_eq!(section.name, TOP_LEVEL);
        assert_eq!(section.settings.len(), 1);
        let setting = &section.settings[0];
        assert_eq!(setting.name, "fix");
        assert_eq!(setting.default_value.as_deref(), Some("true"));
        assert_eq!(setting.comments, vec!["Enable fix behavior by-default."]);
    }

    #[test]
    fn content_outside_settings_is_ignored() {
        let config = parse(vec![
            ContentNode::paragraph("Preamble", None),
            ContentNode::heading(2, "lint", None),
            ContentNode::paragraph("Section intro", None),
            ContentNode::list(["a", "b"]),
            ContentNode::block("Deprecated", &[]),
            ContentNode::block("x = 1", &["highlight"]),
            default_value("1"),
        ])
        .unwrap();
        assert_eq!(config.sections.len(), 1);
        assert!(config.sections[0].settings.is_empty());
    }

    #[test]
    fn collects_lists_and_code_samples_as_comments() {
        let config = parse(vec![
            ContentNode::heading(3, "lint.isort", None),
            setting_heading("section-order"),
            ContentNode::paragraph("Override the order.\nSecond line.", None),
            ContentNode::list(["first", "multi\nline"]),
            ContentNode::block("[tool.ruff]\nx = 1\n", &["highlight"]),
            ContentNode::block("ignored", &["admonition", "note"]),
            ContentNode::block("ignored too", &["highlight", "extra"]),
            default_value("[]"),
        ])
        .unwrap();

        let setting = config.setting("lint.isort", "section-order").unwrap();
        assert_eq!(
            setting.comments,
            vec![
                "Override the order.",
                "Second line.",
                "- first",
                "- multi",
                "line",
                "---",
                "[tool.ruff]",
                "x = 1",
                "---",
            ]
        );
    }

    #[test]
    fn comments_break_on_every_line_boundary() {
        let config = parse(vec![
            ContentNode::heading(2, "lint", None),
            setting_heading("select"),
            ContentNode::paragraph("one\rtwo\u{2028}three\x0cfour", None),
            ContentNode::list(["a\u{85}b"]),
            ContentNode::block("x = 1\r\ny = 2", &["highlight"]),
            default_value("[]"),
        ])
        .unwrap();

        let setting = config.setting("lint", "select").unwrap();
        assert_eq!(
            setting.comments,
            vec!["one", "two", "three", "four", "- a", "b", "---", "x = 1", "y = 2", "---"]
        );
    }

    #[test]
    fn deprecated_settings_are_dropped() {
        let config = parse(vec![
            ContentNode::heading(2, "lint", None),
            setting_heading("old"),
            ContentNode::paragraph("Lots of explanation.", None),
            ContentNode::list(["and", "bullets"]),
            ContentNode::block("  Deprecated\nUse new instead.", &["admonition", "warning"]),
            default_value("false"),
            setting_heading("new"),
            default_value("true"),
        ])
        .unwrap();

        let names: Vec<&str> = config.sections[0]
            .settings
            .iter()
            .map(|setting| setting.name.as_str())
            .collect();
        assert_eq!(names, vec!["new"]);
    }

    #[test]
    fn settings_follow_the_latest_section() {
        let config = parse(vec![
            ContentNode::heading(2, "Top-level", None),
            setting_heading("a"),
            default_value("1"),
            ContentNode::heading(2, "lint", None),
            ContentNode::heading(3, "lint.isort", None),
            setting_heading("b"),
            default_value("2"),
        ])
        .unwrap();

        let names: Vec<&str> = config.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Top-level", "lint", "lint.isort"]);
        assert_eq!(config.sections[1].settings.len(), 0);
        assert_eq!(config.sections[2].settings[0].name, "b");
    }

    #[test]
    fn heading_inside_open_setting_is_an_error() {
        let err = parse(vec![
            ContentNode::heading(2, "lint", None),
            setting_heading("a"),
            ContentNode::heading(2, "format", None),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::UnterminatedSetting {
                setting: "a".to_string(),
                heading: "format".to_string(),
            }
        );

        let err = parse(vec![
            ContentNode::heading(2, "lint", None),
            setting_heading("a"),
            setting_heading("b"),
        ])
        .unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedSetting { .. }));
    }

    #[test]
    fn setting_heading_without_code_is_an_error() {
        let err = parse(vec![
            ContentNode::heading(2, "lint", None),
            ContentNode::heading(4, "nameless", None),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingSettingName {
                heading: "nameless".to_string()
            }
        );
    }

    #[test]
    fn default_value_without_code_is_an_error() {
        let err = parse(vec![
            ContentNode::heading(2, "lint", None),
            setting_heading("a"),
            ContentNode::paragraph("Default value: nothing", None),
        ])
        .unwrap_err();
        assert!(matches!(err, ParseError::MissingDefaultValue { .. }));
    }

    #[test]
    fn setting_before_any_section_is_an_error() {
        let err = parse(vec![setting_heading("a"), default_value("1")]).unwrap_err();
        assert!(matches!(err, ParseError::OrphanSetting { .. }));
    }

    #[test]
    fn open_setting_at_end_is_discarded() {
        let config = parse(vec![
            ContentNode::heading(2, "lint", None),
            setting_heading("unfinished"),
            ContentNode::paragraph("No default follows.", None),
        ])
        .unwrap();
        assert!(config.sections[0].settings.is_empty());
    }

    #[test]
    fn other_heading_levels_are_ignored() {
        let config = parse(vec![
            ContentNode::heading(1, "Settings", None),
            ContentNode::heading(2, "lint", None),
            setting_heading("a"),
            ContentNode::heading(5, "Example", None),
            default_value("1"),
        ])
        .unwrap();
        assert_eq!(config.sections.len(), 1);
        assert_eq!(config.sections[0].settings.len(), 1);
    }

    #[test]
    fn legacy_layout_uses_h3_for_settings() {
        let layout = HeadingLayout::legacy();
        let config = DocumentParser::new(&layout)
            .parse(
                vec![
                    ContentNode::heading(2, "Top-level¶", None),
                    ContentNode::heading(3, "line-length", Some("line-length")),
                    default_value("88"),
                ],
                Configuration::new("ruff", "1.0"),
            )
            .unwrap();
        assert_eq!(config.sections[0].name, TOP_LEVEL);
        assert_eq!(
            config.setting(TOP_LEVEL, "line-length").unwrap().default_value.as_deref(),
            Some("88")
        );
    }

    #[test]
    fn section_names_lose_the_permalink_suffix() {
        let layout = HeadingLayout::default();
        assert_eq!(layout.section_name("lint.isort¶\n"), "lint.isort");
        assert_eq!(layout.section_name(" format "), "format");
        let bare = HeadingLayout {
            heading_suffix: String::new(),
            ..HeadingLayout::default()
        };
        assert_eq!(bare.section_name("lint¶"), "lint¶");
    }
}
