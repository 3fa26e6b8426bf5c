//! `devprops get <NAME>`

use anyhow::Result;
use devprops_core::DeviceProperty;
use devprops_manager::PropertyManager;
use std::io::Write;

/// Result of a `get` lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetOutcome {
    /// Value printed
    Found,
    /// Known key whose source yielded nothing
    Absent(DeviceProperty),
    /// Name outside the property vocabulary
    Unknown,
}

/// Print the value of one property
///
/// Nothing is printed unless the property resolved.
pub fn handle_get(
    manager: &PropertyManager,
    name: &str,
    out: &mut impl Write,
) -> Result<GetOutcome> {
    let Some((property, _)) = DeviceProperty::from_key(name) else {
        tracing::debug!(name = %name, "Not a property key");
        return Ok(GetOutcome::Unknown);
    };

    match manager.get(name) {
        Some(value) => {
            writeln!(out, "{value}")?;
            Ok(GetOutcome::Found)
        }
        None => {
            tracing::debug!(property = %property, "Property absent");
            Ok(GetOutcome::Absent(property))
        }
    }
}
