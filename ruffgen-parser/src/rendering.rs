//! Text rendering helpers shared by the model types
//!
//! `value` maps a raw default taken from the page into TOML syntax, `annotations`
//! appends rule descriptions to lines that name a known rule.

mod annotations;
mod value;

pub use annotations::{annotate, RuleDescriptions, ANNOTATION_COLUMN};
pub use value::{render_table_body, render_value, strip_enclosing};
