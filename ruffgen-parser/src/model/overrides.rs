//! Replacing scraped defaults with project-specific values
//!
//! The override table is maintained by hand while the settings page keeps evolving, so
//! entries can go stale. Entries that match nothing are handed back to the caller as
//! [`UnmatchedOverrides`] instead of failing the generation.

use super::Configuration;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Section name → setting name → replacement raw default value.
pub type Overrides = BTreeMap<String, BTreeMap<String, String>>;

/// `(section, setting)` pairs of an override table that matched no setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnmatchedOverrides {
    entries: Vec<(String, String)>,
}

impl UnmatchedOverrides {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

impl fmt::Display for UnmatchedOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .entries
            .iter()
            .map(|(section, setting)| format!("[{section}] {setting}"))
            .collect();
        write!(f, "{}", names.join(", "))
    }
}

impl Configuration {
    /// Replace the default value of every setting named in `overrides`.
    ///
    /// Each override entry is consumed by the first matching setting. Whatever is left,
    /// whole sections or single settings, is returned.
    pub fn apply_overrides(&mut self, overrides: &Overrides) -> UnmatchedOverrides {
        let mut pending = overrides.clone();

        for section in &mut self.sections {
            let Some(section_pending) = pending.get_mut(&section.name) else {
                continue;
            };
            for setting in &mut section.settings {
                if let Some(value) = section_pending.remove(&setting.name) {
                    debug!(section = %section.name, setting = %setting.name, %value, "override applied");
                    setting.default_value = Some(value);
                }
            }
            if section_pending.is_empty() {
                pending.remove(&section.name);
            }
        }

        let entries = pending
            .into_iter()
            .flat_map(|(section, settings)| {
                settings
                    .into_keys()
                    .map(move |setting| (section.clone(), setting))
            })
            .collect();
        UnmatchedOverrides { entries }
    }
}
