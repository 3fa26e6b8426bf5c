//! WiFi Effects Trait Definitions

use serde::{Deserialize, Serialize};

/// Snapshot of the current WiFi connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiConnectionInfo {
    mac_address: Option<String>,
}

impl WifiConnectionInfo {
    /// Create connection info with the given hardware address
    pub fn new(mac_address: Option<String>) -> Self {
        Self { mac_address }
    }

    /// Hardware (MAC) address of the interface, if the platform exposes it
    pub fn mac_address(&self) -> Option<&str> {
        self.mac_address.as_deref()
    }
}

/// WiFi subsystem accessors
pub trait WifiEffects: Send + Sync {
    /// Current connection info, or `None` when WiFi is unavailable
    fn connection_info(&self) -> Option<WifiConnectionInfo>;
}
