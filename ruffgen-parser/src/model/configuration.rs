//! The whole generated configuration

use super::{Section, Setting};
use crate::error::ParseError;
use crate::rendering::{annotate, RuleDescriptions};
use std::fmt;

/// All sections of the settings page, stamped with the release they were scraped for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub package: String,
    pub version: String,
    pub sections: Vec<Section>,
}

impl Configuration {
    pub fn new(package: impl Into<String>, version: impl Into<String>) -> Self {
        Configuration {
            package: package.into(),
            version: version.into().trim().to_string(),
            sections: Vec::new(),
        }
    }

    /// Start a new section; subsequent settings are added to it.
    pub fn new_section(&mut self, name: impl Into<String>) {
        self.sections.push(Section::new(name));
    }

    /// Add a setting to the latest section.
    pub fn add_setting(&mut self, setting: Setting) -> Result<(), ParseError> {
        match self.sections.last_mut() {
            Some(section) => {
                section.settings.push(setting);
                Ok(())
            }
            None => Err(ParseError::OrphanSetting {
                setting: setting.name,
            }),
        }
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    pub fn setting(&self, section: &str, name: &str) -> Option<&Setting> {
        self.section(section)?
            .settings
            .iter()
            .find(|setting| setting.name == name)
    }

    pub fn header(&self) -> String {
        format!(
            "### Configuration created for {}=={}",
            self.package, self.version
        )
    }

    /// Render the document, appending descriptions to lines naming a known rule.
    pub fn render(&self, descriptions: &RuleDescriptions) -> String {
        let mut parts = vec![self.header(), String::new()];
        parts.extend(self.sections.iter().map(|section| section.to_string()));
        annotate(&parts.join("\n"), descriptions)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RuleDescriptions::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TOP_LEVEL;

    fn sample() -> Configuration {
        let mut config = Configuration::new("ruff", "0.14.0\n");
        config.new_section(TOP_LEVEL);
        config
            .add_setting(Setting::new("line-length").with_default("88"))
            .unwrap();
        config.new_section("lint");
        config
            .add_setting(Setting::new("ignore").with_default(r#"["S101", "PT"]"#))
            .unwrap();
        config
    }

    #[test]
    fn settings_go_to_the_latest_section() {
        let config = sample();
        assert_eq!(config.sections.len(), 2);
        assert_eq!(config.sections[0].settings.len(), 1);
        assert_eq!(config.sections[1].settings[0].name, "ignore");
        assert_eq!(config.setting("lint", "ignore").map(|s| s.name.as_str()), Some("ignore"));
        assert!(config.setting("lint", "select").is_none());
    }

    #[test]
    fn setting_without_section_is_rejected() {
        let mut config = Configuration::new("ruff", "1.0");
        let err = config.add_setting(Setting::new("fix")).unwrap_err();
        assert_eq!(
            err,
            ParseError::OrphanSetting {
                setting: "fix".to_string()
            }
        );
    }

    #[test]
    fn renders_header_and_sections_separated_by_blank_lines() {
        assert_eq!(
            sample().to_string(),
            concat!(
                "### Configuration created for ruff==0.14.0\n",
                "\n",
                "line-length = 88\n",
                "\n",
                "[lint]\n",
                "ignore = [\n",
                "    \"S101\",\n",
                "    \"PT\",\n",
                "]\n",
            )
        );
    }

    #[test]
    fn render_annotates_known_rules() {
        let descriptions: RuleDescriptions =
            [("S101".to_string(), "Use of `assert` detected".to_string())]
                .into_iter()
                .collect();
        let text = sample().render(&descriptions);
        assert!(text.contains("    \"S101\",     # Use of `assert` detected\n"));
        assert!(text.contains("    \"PT\",\n"));
    }

    #[test]
    fn empty_configuration_is_only_the_header() {
        let config = Configuration::new("ruff", "1.0");
        assert_eq!(config.to_string(), "### Configuration created for ruff==1.0\n");
    }
}
