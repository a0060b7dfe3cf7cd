//! One-shot generation of both documents
//!
//! Pipeline: HTML → Configuration → plain rendering → overrides → adjusted rendering

use crate::error::ParseError;
use crate::model::{Configuration, Overrides, UnmatchedOverrides};
use crate::parsing::{parse_configuration, HeadingLayout};
use crate::rendering::RuleDescriptions;
use tracing::info;

/// Everything produced from one settings page.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The configuration with the overrides applied.
    pub configuration: Configuration,
    /// Rendering of the scraped defaults.
    pub plain: String,
    /// Rendering after applying the overrides.
    pub adjusted: String,
    /// Override entries that matched no setting.
    pub unmatched: UnmatchedOverrides,
}

pub fn generate(
    html: &str,
    package: &str,
    version: &str,
    layout: &HeadingLayout,
    overrides: &Overrides,
    descriptions: &RuleDescriptions,
) -> Result<Generated, ParseError> {
    // Step 1: HTML → configuration tree
    let mut configuration = parse_configuration(html, package, version, layout)?;
    info!(
        sections = configuration.sections.len(),
        settings = configuration
            .sections
            .iter()
            .map(|section| section.settings.len())
            .sum::<usize>(),
        "parsed settings page"
    );

    // Step 2: render the scraped defaults
    let plain = configuration.render(descriptions);

    // Step 3: apply overrides and render again
    let unmatched = configuration.apply_overrides(overrides);
    let adjusted = configuration.render(descriptions);

    Ok(Generated {
        configuration,
        plain,
        adjusted,
        unmatched,
    })
}
