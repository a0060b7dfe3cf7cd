//! Rendering both configuration files from the downloaded inputs

use anyhow::{Context, Result};
use ruffgen_config::{bundled_rule_descriptions, RuffgenConfig};
use ruffgen_parser::{generate, Overrides};
use std::path::Path;
use tracing::{info, warn};

pub fn run(config: &RuffgenConfig, overrides: &Overrides) -> Result<()> {
    let paths = &config.paths;
    let html = read_file(&paths.settings_html_file())?;
    let version = read_file(&paths.version_file())?;
    let descriptions = bundled_rule_descriptions()?;

    let generated = generate(
        &html,
        &config.source.package,
        &version,
        &config.parser.layout(),
        overrides,
        &descriptions,
    )
    .context("Settings page structure is not supported")?;

    write_file(&paths.configuration_file(), &generated.plain)?;
    if !generated.unmatched.is_empty() {
        warn!(
            count = generated.unmatched.len(),
            "overrides not found: {}", generated.unmatched
        );
    }
    write_file(&paths.adjusted_configuration_file(), &generated.adjusted)?;

    info!(
        version = %generated.configuration.version,
        output = %paths.configuration_file().display(),
        adjusted = %paths.adjusted_configuration_file().display(),
        "configuration generated"
    );
    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read {} (run `ruffgen download` first)",
            path.display()
        )
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
