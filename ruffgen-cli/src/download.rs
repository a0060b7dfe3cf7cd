//! Fetching the settings page and the latest release version

use anyhow::{Context, Result};
use ruffgen_config::RuffgenConfig;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;
use ureq::Agent;

/// Upper bound for a downloaded page (the settings page is a few hundred kilobytes).
const MAX_RESPONSE_SIZE: u64 = 20 * 1024 * 1024;

const USER_AGENT: &str = concat!("ruffgen/", env!("CARGO_PKG_VERSION"));

/// The part of the package registry's JSON API we read.
#[derive(Debug, Deserialize)]
struct PackageMetadata {
    info: PackageInfo,
}

#[derive(Debug, Deserialize)]
struct PackageInfo {
    version: String,
}

/// Download the settings page and the release version into the workdir.
pub fn run(config: &RuffgenConfig) -> Result<()> {
    let paths = &config.paths;
    std::fs::create_dir_all(&paths.workdir)
        .with_context(|| format!("Failed to create {}", paths.workdir.display()))?;

    let agent = agent(config.source.timeout());

    let html = fetch_text(&agent, &config.source.settings_url)?;
    write_file(&paths.settings_html_file(), &html)?;

    let metadata = fetch_text(&agent, &config.source.registry_url)?;
    let version = parse_version(&metadata)
        .with_context(|| format!("Unexpected response from '{}'", config.source.registry_url))?;
    write_file(&paths.version_file(), &version)?;

    info!(%version, package = %config.source.package, "downloaded settings page");
    Ok(())
}

/// HTTP agent with a global timeout. Non-2xx responses surface as errors.
fn agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into()
}

fn fetch_text(agent: &Agent, url: &str) -> Result<String> {
    info!(%url, "downloading");
    agent
        .get(url)
        .header("User-Agent", USER_AGENT)
        .call()
        .with_context(|| format!("Failed to download '{url}'"))?
        .into_body()
        .with_config()
        .limit(MAX_RESPONSE_SIZE)
        .read_to_string()
        .with_context(|| format!("Failed to read response from '{url}'"))
}

/// Extract `info.version` from the registry's package JSON.
fn parse_version(json: &str) -> Result<String> {
    let metadata: PackageMetadata = serde_json::from_str(json)?;
    Ok(metadata.info.version)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
