//! `devprops show [--json]`
//!
//! Walks the public vocabulary and looks each key up; the manager itself is
//! never enumerated.

use anyhow::Result;
use devprops_core::DeviceProperty;
use devprops_manager::{DeviceIdSource, PropertyManager};
use serde::Serialize;
use std::io::Write;

/// One key and its value, if resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyEntry {
    /// Logical property behind the key
    pub property: DeviceProperty,
    /// Whether `key` is the URI form
    pub uri: bool,
    /// Plain or URI key
    pub key: &'static str,
    /// Resolved value
    pub value: Option<String>,
}

/// Every known key with its value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySnapshot {
    /// Source of the device identifier
    pub device_id_source: Option<DeviceIdSource>,
    /// Plain and URI keys in vocabulary order
    pub properties: Vec<PropertyEntry>,
}

impl PropertySnapshot {
    /// Look up every vocabulary key in `manager`
    pub fn capture(manager: &PropertyManager) -> Self {
        let properties = DeviceProperty::ALL
            .iter()
            .flat_map(|&property| {
                [(property, false, property.key()), (property, true, property.uri_key())]
            })
            .map(|(property, uri, key)| PropertyEntry {
                property,
                uri,
                key,
                value: manager.get(key).map(str::to_string),
            })
            .collect();

        Self {
            device_id_source: manager.device_id_source(),
            properties,
        }
    }
}

/// Print every known key with its value
pub fn handle_show(manager: &PropertyManager, json: bool, out: &mut impl Write) -> Result<()> {
    let snapshot = PropertySnapshot::capture(manager);

    if json {
        serde_json::to_writer_pretty(&mut *out, &snapshot)?;
        writeln!(out)?;
        return Ok(());
    }

    for entry in &snapshot.properties {
        match &entry.value {
            Some(value) => writeln!(out, "{:<18} = {value}", entry.key)?,
            None => writeln!(out, "{:<18}   (absent)", entry.key)?,
        }
    }
    Ok(())
}
