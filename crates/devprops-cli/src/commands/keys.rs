//! `devprops keys`

use anyhow::Result;
use devprops_core::{DeviceProperty, IMEI_SCHEME, MAC_SCHEME};
use std::io::Write;

/// Print the property vocabulary
///
/// `secure_scheme` names the tag used when the device identifier comes from
/// the secure settings store.
pub fn handle_keys(secure_scheme: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<14} {:<14} {:<18} SCHEME", "PROPERTY", "KEY", "URI KEY")?;
    for property in DeviceProperty::ALL {
        let scheme = match property.scheme() {
            Some(scheme) => scheme.to_string(),
            None => format!("{IMEI_SCHEME}|{MAC_SCHEME}|{secure_scheme}"),
        };
        writeln!(
            out,
            "{:<14} {:<14} {:<18} {scheme}",
            property.display_name(),
            property.key(),
            property.uri_key(),
        )?;
    }
    Ok(())
}
