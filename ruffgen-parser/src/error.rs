//! Errors raised while turning the settings page into a configuration
//!
//! Every variant means the page no longer has the structure the parser relies on,
//! so the parse is aborted rather than producing a partial document.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no <{tag}> element found in the document")]
    MissingContainer { tag: String },

    #[error("heading {heading:?} opened while setting {setting:?} was still open")]
    UnterminatedSetting { setting: String, heading: String },

    #[error("setting heading {heading:?} is not followed by a <code> element")]
    MissingSettingName { heading: String },

    #[error("default value of setting {setting:?} is not followed by a <code> element")]
    MissingDefaultValue { setting: String },

    #[error("setting {setting:?} appears before any section heading")]
    OrphanSetting { setting: String },
}
