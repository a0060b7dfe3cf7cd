//! From settings page HTML to a [`Configuration`](crate::model::Configuration)
//!
//! Two stages:
//!
//! 1. `extraction` parses the HTML with html5ever and reduces the direct children of the
//!    content container to [`ContentNode`]s.
//! 2. `document` runs [`DocumentParser`] over those nodes, opening sections on headings
//!    and collecting each setting's documentation until its "Default value:" line.

mod document;
mod extraction;
mod nodes;

pub use document::{DocumentParser, HeadingLayout};
pub use extraction::extract_content_nodes;
pub use nodes::ContentNode;

use crate::error::ParseError;
use crate::model::Configuration;

/// Parse the settings page `html` into a configuration stamped with `package==version`.
pub fn parse_configuration(
    html: &str,
    package: &str,
    version: &str,
    layout: &HeadingLayout,
) -> Result<Configuration, ParseError> {
    // Step 1: HTML → content nodes
    let nodes = extract_content_nodes(html, &layout.container_tag)?;

    // Step 2: content nodes → sections and settings
    DocumentParser::new(layout).parse(nodes, Configuration::new(package, version))
}
