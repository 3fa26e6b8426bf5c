//! Sysfs WiFi handler
//!
//! Reads the hardware address of a network interface from
//! `<sysfs_root>/<iface>/address`. Without a configured interface the first
//! wireless interface (one with a `wireless` subdirectory) is used, falling
//! back to the first non-loopback interface in name order. Entries without an
//! `address` file are not interfaces and are skipped.

use crate::config::WifiConfig;
use devprops_core::{WifiConnectionInfo, WifiEffects};
use std::path::{Path, PathBuf};

const LOOPBACK_INTERFACE: &str = "lo";
const NULL_MAC_ADDRESS: &str = "00:00:00:00:00:00";

/// WiFi handler backed by Linux sysfs
#[derive(Debug, Clone)]
pub struct SysfsWifiHandler {
    root: PathBuf,
    interface: Option<String>,
}

impl SysfsWifiHandler {
    /// Create a handler from configuration
    pub fn new(config: &WifiConfig) -> Self {
        Self {
            root: config.sysfs_root.clone(),
            interface: config.interface.clone(),
        }
    }

    fn select_interface(&self) -> Option<String> {
        if let Some(interface) = &self.interface {
            return Some(interface.clone());
        }

        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(
                    root = %self.root.display(),
                    error = %e,
                    "Network interfaces unreadable"
                );
                return None;
            }
        };

        // Only directories carrying an address are interfaces; sysfs also
        // lists control files such as `bonding_masters`.
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name != LOOPBACK_INTERFACE)
            .filter(|name| self.root.join(name).join("address").is_file())
            .collect();
        names.sort();

        names
            .iter()
            .find(|name| self.root.join(name).join("wireless").is_dir())
            .or_else(|| names.first())
            .cloned()
    }

    fn read_address(path: &Path) -> Option<String> {
        let address = std::fs::read_to_string(path).ok()?;
        let address = address.trim();
        if address.is_empty() || address == NULL_MAC_ADDRESS {
            return None;
        }
        Some(address.to_string())
    }
}

impl Default for SysfsWifiHandler {
    fn default() -> Self {
        Self::new(&WifiConfig::default())
    }
}

impl WifiEffects for SysfsWifiHandler {
    fn connection_info(&self) -> Option<WifiConnectionInfo> {
        let interface = self.select_interface()?;
        let address_path = self.root.join(&interface).join("address");
        if !address_path.exists() {
            tracing::debug!(interface = %interface, "Interface has no address file");
            return None;
        }
        Some(WifiConnectionInfo::new(Self::read_address(&address_path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_interface(root: &Path, name: &str, address: &str, wireless: bool) {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("address"), format!("{address}\n")).unwrap();
        if wireless {
            std::fs::create_dir_all(dir.join("wireless")).unwrap();
        }
    }

    fn handler(root: &Path, interface: Option<&str>) -> SysfsWifiHandler {
        SysfsWifiHandler::new(&WifiConfig {
            interface: interface.map(str::to_string),
            sysfs_root: root.to_path_buf(),
        })
    }

    #[test]
    fn test_prefers_wireless_interface() {
        let dir = tempfile::tempdir().unwrap();
        add_interface(dir.path(), "lo", NULL_MAC_ADDRESS, false);
        add_interface(dir.path(), "eth0", "52:54:00:12:34:56", false);
        add_interface(dir.path(), "wlan0", "02:00:00:00:00:00", true);

        let info = handler(dir.path(), None).connection_info().unwrap();
        assert_eq!(info.mac_address(), Some("02:00:00:00:00:00"));
    }

    #[test]
    fn test_falls_back_to_first_non_loopback() {
        let dir = tempfile::tempdir().unwrap();
        add_interface(dir.path(), "lo", NULL_MAC_ADDRESS, false);
        add_interface(dir.path(), "eth1", "52:54:00:ab:cd:ef", false);
        add_interface(dir.path(), "eth0", "52:54:00:12:34:56", false);

        let info = handler(dir.path(), None).connection_info().unwrap();
        assert_eq!(info.mac_address(), Some("52:54:00:12:34:56"));
    }

    #[test]
    fn test_skips_entries_without_address() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bonding_masters"), "\n").unwrap();
        std::fs::create_dir_all(dir.path().join("bond0")).unwrap();
        add_interface(dir.path(), "eth0", "52:54:00:12:34:56", false);

        let info = handler(dir.path(), None).connection_info().unwrap();
        assert_eq!(info.mac_address(), Some("52:54:00:12:34:56"));
    }

    #[test]
    fn test_configured_interface() {
        let dir = tempfile::tempdir().unwrap();
        add_interface(dir.path(), "wlan0", "02:00:00:00:00:00", true);
        add_interface(dir.path(), "eth0", "52:54:00:12:34:56", false);

        let info = handler(dir.path(), Some("eth0")).connection_info().unwrap();
        assert_eq!(info.mac_address(), Some("52:54:00:12:34:56"));

        assert_eq!(handler(dir.path(), Some("wlan9")).connection_info(), None);
    }

    #[test]
    fn test_null_address_is_hidden() {
        let dir = tempfile::tempdir().unwrap();
        add_interface(dir.path(), "wlan0", NULL_MAC_ADDRESS, true);

        let info = handler(dir.path(), None).connection_info().unwrap();
        assert_eq!(info.mac_address(), None);
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let handler = handler(&dir.path().join("absent"), None);
        assert_eq!(handler.connection_info(), None);
    }
}
