//! Command-line interface for ruffgen
//! Downloads ruff's settings documentation and turns it into a commented ruff configuration.
//!
//! Usage:
//!   ruffgen download    - Fetch the settings page and the latest release version
//!   ruffgen generate    - Render config.toml and config_adjusted.toml from the downloaded files
//!   ruffgen [both]      - Download, then generate
//!
//! Options:
//!   --config `<file>`     Layer a TOML file over the built-in defaults and ./ruffgen.toml
//!   --workdir `<dir>`     Directory holding the downloaded and generated files
//!   --overrides `<file>`  Replace the bundled override table
//!   -v, --verbose       Debug logging (RUST_LOG takes precedence)

mod download;
mod generate;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command, ValueEnum};
use ruffgen_config::{bundled_overrides, load_overrides, Loader, RuffgenConfig};
use ruffgen_parser::Overrides;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Picked up from the current directory when present.
const LOCAL_CONFIG_FILE: &str = "ruffgen.toml";

/// What a run does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Fetch the settings page and the latest release version
    Download,
    /// Render the configurations from the downloaded files
    Generate,
    /// Download, then generate
    Both,
}

fn main() {
    let matches = Command::new("ruffgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates a default ruff configuration file from ruff's settings documentation")
        .arg(
            Arg::new("command")
                .help("What to do")
                .value_parser(value_parser!(Mode))
                .default_value("both")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("workdir")
                .long("workdir")
                .short('w')
                .help("Directory for downloaded and generated files")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("overrides")
                .long("overrides")
                .short('o')
                .help("TOML override table used instead of the bundled one")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let mode = matches
        .get_one::<Mode>("command")
        .copied()
        .unwrap_or(Mode::Both);
    if let Err(e) = run(mode, &matches) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(mode: Mode, matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    match mode {
        Mode::Download => download::run(&config),
        Mode::Generate => generate::run(&config, &load_override_table(matches)?),
        Mode::Both => {
            let overrides = load_override_table(matches)?;
            download::run(&config)?;
            generate::run(&config, &overrides)
        }
    }
}

fn load_config(matches: &ArgMatches) -> Result<RuffgenConfig> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    loader = loader.with_environment();
    if let Some(workdir) = matches.get_one::<PathBuf>("workdir") {
        loader = loader.set_override("paths.workdir", workdir.to_string_lossy().into_owned())?;
    }
    loader.build().context("Invalid configuration")
}

fn load_override_table(matches: &ArgMatches) -> Result<Overrides> {
    let overrides = match matches.get_one::<PathBuf>("overrides") {
        Some(path) => load_overrides(path)?,
        None => bundled_overrides()?,
    };
    Ok(overrides)
}

/// Log to stderr; stdout stays free for piping.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
