//! Shared configuration loader for the ruffgen toolchain.
//!
//! `defaults/ruffgen.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files and
//! `RUFFGEN_*` environment variables on top of those defaults via [`Loader`] before
//! deserializing into [`RuffgenConfig`].
//!
//! The override table and the rule description table are bundled data rather than
//! settings: they are parsed straight into the maps the generator consumes.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use ruffgen_parser::{HeadingLayout, Overrides, RuleDescriptions};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TOML: &str = include_str!("../defaults/ruffgen.default.toml");
const OVERRIDES_TOML: &str = include_str!("../defaults/overrides.toml");
const RULES_TOML: &str = include_str!("../defaults/rules.toml");

/// Top-level configuration consumed by ruffgen applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RuffgenConfig {
    pub source: SourceConfig,
    pub paths: PathsConfig,
    pub parser: ParserConfig,
}

/// Where the settings page and the release version come from.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub package: String,
    pub settings_url: String,
    pub registry_url: String,
    pub timeout_secs: u64,
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Intermediate and output files. Every file name is relative to `workdir`.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub workdir: PathBuf,
    pub settings_html: PathBuf,
    pub version: PathBuf,
    pub configuration: PathBuf,
    pub adjusted_configuration: PathBuf,
}

impl PathsConfig {
    pub fn settings_html_file(&self) -> PathBuf {
        self.workdir.join(&self.settings_html)
    }

    pub fn version_file(&self) -> PathBuf {
        self.workdir.join(&self.version)
    }

    pub fn configuration_file(&self) -> PathBuf {
        self.workdir.join(&self.configuration)
    }

    pub fn adjusted_configuration_file(&self) -> PathBuf {
        self.workdir.join(&self.adjusted_configuration)
    }
}

/// Mirrors the knobs exposed by the document parser.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub container_tag: String,
    pub section_levels: Vec<u8>,
    pub setting_level: u8,
    pub heading_suffix: String,
}

impl ParserConfig {
    pub fn layout(&self) -> HeadingLayout {
        HeadingLayout {
            container_tag: self.container_tag.clone(),
            section_levels: self.section_levels.clone(),
            setting_level: self.setting_level,
            heading_suffix: self.heading_suffix.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `RUFFGEN_<SECTION>__<KEY>` environment variables.
    pub fn with_environment(mut self) -> Self {
        let source = Environment::with_prefix("RUFFGEN")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RuffgenConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Failure to read or decode one of the data tables.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid table in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

fn parse_table<T: DeserializeOwned>(text: &str, origin: &str) -> Result<T, DataError> {
    toml::from_str(text).map_err(|source| DataError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// The override table shipped with the binary.
pub fn bundled_overrides() -> Result<Overrides, DataError> {
    parse_table(OVERRIDES_TOML, "bundled overrides")
}

/// The rule description table shipped with the binary.
pub fn bundled_rule_descriptions() -> Result<RuleDescriptions, DataError> {
    parse_table(RULES_TOML, "bundled rule descriptions")
}

/// Read an override table with the same `[section] setting = "value"` shape as the bundled one.
pub fn load_overrides(path: impl AsRef<Path>) -> Result<Overrides, DataError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&text, &path.display().to_string())
}
