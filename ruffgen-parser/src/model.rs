//! Configuration tree built from the settings page
//!
//! A [`Configuration`] owns its [`Section`]s in document order and each section owns its
//! [`Setting`]s. All three render themselves through `Display`.

mod configuration;
mod overrides;
mod section;
mod setting;

pub use configuration::Configuration;
pub use overrides::{Overrides, UnmatchedOverrides};
pub use section::{Section, TOP_LEVEL};
pub use setting::Setting;
