//! Scrapes ruff's settings documentation into a TOML configuration
//!
//!     This crate turns the HTML of the settings page into a tree of sections and settings
//!     and renders that tree as a commented TOML document listing every default.
//!
//! Architecture
//!
//!     raw HTML → ContentNode sequence → DocumentParser → Configuration → rendered text
//!
//!     - parsing: HTML DOM extraction (html5ever) and the section/setting state machine
//!     - model: Setting, Section and Configuration, plus override application
//!     - rendering: default value conversion and rule description annotations
//!     - pipeline: one call producing both the plain and the override-adjusted documents
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── model
//!     │   ├── setting.rs
//!     │   ├── section.rs
//!     │   ├── configuration.rs
//!     │   └── overrides.rs
//!     ├── parsing
//!     │   ├── nodes.rs        # ContentNode, the closed set of node kinds
//!     │   ├── extraction.rs   # HTML → ContentNode
//!     │   └── document.rs     # ContentNode → Configuration
//!     ├── rendering
//!     │   ├── value.rs
//!     │   └── annotations.rs
//!     ├── pipeline.rs
//!     ├── text.rs         # line splitting on every Unicode line boundary
//!     └── lib.rs
//!
//!     This is a pure lib: no network, no filesystem, no printing. The CLI downloads the page
//!     and writes the results.

pub mod error;
pub mod model;
pub mod parsing;
pub mod pipeline;
pub mod rendering;
mod text;

pub use error::ParseError;
pub use model::{Configuration, Overrides, Section, Setting, UnmatchedOverrides};
pub use parsing::{parse_configuration, ContentNode, DocumentParser, HeadingLayout};
pub use pipeline::{generate, Generated};
pub use rendering::RuleDescriptions;
