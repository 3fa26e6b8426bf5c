//! TOML preferences handler
//!
//! Host analog of the application's shared preferences: a flat TOML table
//! loaded once. Only string values are visible through `get_string`; other
//! value types are skipped at load.

use devprops_core::{DevPropsError, PreferencesEffects, Result};
use std::collections::HashMap;
use std::path::Path;

/// Preferences handler backed by a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TomlPreferencesHandler {
    values: HashMap<String, String>,
}

impl TomlPreferencesHandler {
    /// Empty preferences store
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load preferences from `path`; a missing file is an empty store
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Preferences file absent");
                Ok(Self::empty())
            }
            Err(e) => Err(DevPropsError::storage(format!(
                "Failed to read preferences {}: {e}",
                path.display()
            ))),
        }
    }

    /// Parse preferences from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| DevPropsError::serialization(format!("Invalid preferences TOML: {e}")))?;

        let mut values = HashMap::with_capacity(table.len());
        for (key, value) in table {
            match value {
                toml::Value::String(value) => {
                    values.insert(key, value);
                }
                other => {
                    tracing::debug!(
                        key = %key,
                        kind = other.type_str(),
                        "Skipping non-string preference"
                    );
                }
            }
        }
        Ok(Self { values })
    }

    /// Number of string preferences
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no string preferences were loaded
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferencesEffects for TomlPreferencesHandler {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
