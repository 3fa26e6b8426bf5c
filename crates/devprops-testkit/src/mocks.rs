//! Mock platform effect handlers for testing
//!
//! Each handler returns fixed values and counts how often it was read, so
//! tests can assert both what the property manager resolved and which
//! sources it consulted.

use devprops_core::{
    PreferencesEffects, SecureSettingsEffects, TelephonyEffects, WifiConnectionInfo, WifiEffects,
    ANDROID_ID_SCHEME,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Thread-safe read counter
#[derive(Debug, Default)]
struct CallCounter(AtomicUsize);

impl CallCounter {
    fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Mock telephony handler
#[derive(Debug, Default)]
pub struct MockTelephonyHandler {
    device_id: Option<String>,
    subscriber_id: Option<String>,
    sim_serial_number: Option<String>,
    line1_number: Option<String>,
    device_id_calls: CallCounter,
    subscriber_id_calls: CallCounter,
    sim_serial_calls: CallCounter,
    line1_calls: CallCounter,
}

impl MockTelephonyHandler {
    /// Create a handler with no SIM and no modem
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reported device identifier
    pub fn with_device_id(mut self, value: impl Into<String>) -> Self {
        self.device_id = Some(value.into());
        self
    }

    /// Set the reported subscriber identifier
    pub fn with_subscriber_id(mut self, value: impl Into<String>) -> Self {
        self.subscriber_id = Some(value.into());
        self
    }

    /// Set the reported SIM serial number
    pub fn with_sim_serial_number(mut self, value: impl Into<String>) -> Self {
        self.sim_serial_number = Some(value.into());
        self
    }

    /// Set the reported line 1 number
    pub fn with_line1_number(mut self, value: impl Into<String>) -> Self {
        self.line1_number = Some(value.into());
        self
    }

    /// Number of device identifier reads
    pub fn device_id_calls(&self) -> usize {
        self.device_id_calls.get()
    }

    /// Number of subscriber identifier reads
    pub fn subscriber_id_calls(&self) -> usize {
        self.subscriber_id_calls.get()
    }

    /// Number of SIM serial reads
    pub fn sim_serial_calls(&self) -> usize {
        self.sim_serial_calls.get()
    }

    /// Number of line 1 number reads
    pub fn line1_calls(&self) -> usize {
        self.line1_calls.get()
    }
}

impl TelephonyEffects for MockTelephonyHandler {
    fn device_id(&self) -> Option<String> {
        self.device_id_calls.hit();
        self.device_id.clone()
    }

    fn subscriber_id(&self) -> Option<String> {
        self.subscriber_id_calls.hit();
        self.subscriber_id.clone()
    }

    fn sim_serial_number(&self) -> Option<String> {
        self.sim_serial_calls.hit();
        self.sim_serial_number.clone()
    }

    fn line1_number(&self) -> Option<String> {
        self.line1_calls.hit();
        self.line1_number.clone()
    }
}

/// Mock WiFi handler
#[derive(Debug, Default)]
pub struct MockWifiHandler {
    connection_info: Option<WifiConnectionInfo>,
    calls: CallCounter,
}

impl MockWifiHandler {
    /// Create a handler with WiFi unavailable
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a connection with the given hardware address
    pub fn with_mac_address(mut self, mac: impl Into<String>) -> Self {
        self.connection_info = Some(WifiConnectionInfo::new(Some(mac.into())));
        self
    }

    /// Report a connection whose hardware address is hidden
    pub fn with_hidden_mac_address(mut self) -> Self {
        self.connection_info = Some(WifiConnectionInfo::new(None));
        self
    }

    /// Number of connection info reads
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl WifiEffects for MockWifiHandler {
    fn connection_info(&self) -> Option<WifiConnectionInfo> {
        self.calls.hit();
        self.connection_info.clone()
    }
}

/// Mock secure settings handler
#[derive(Debug)]
pub struct MockSecureSettingsHandler {
    secure_id: Option<String>,
    scheme_name: String,
    calls: CallCounter,
}

impl Default for MockSecureSettingsHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSecureSettingsHandler {
    /// Create a handler with no secure identifier
    pub fn new() -> Self {
        Self {
            secure_id: None,
            scheme_name: ANDROID_ID_SCHEME.to_string(),
            calls: CallCounter::default(),
        }
    }

    /// Set the secure identifier
    pub fn with_secure_id(mut self, value: impl Into<String>) -> Self {
        self.secure_id = Some(value.into());
        self
    }

    /// Override the scheme name
    pub fn with_scheme_name(mut self, scheme_name: impl Into<String>) -> Self {
        self.scheme_name = scheme_name.into();
        self
    }

    /// Number of secure identifier reads
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SecureSettingsEffects for MockSecureSettingsHandler {
    fn secure_id(&self) -> Option<String> {
        self.calls.hit();
        self.secure_id.clone()
    }

    fn scheme_name(&self) -> &str {
        &self.scheme_name
    }
}

/// Mock preferences handler
#[derive(Debug, Default)]
pub struct MockPreferencesHandler {
    values: HashMap<String, String>,
    calls: CallCounter,
}

impl MockPreferencesHandler {
    /// Create an empty preferences store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a preference
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Number of preference reads
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Snapshot of the stored preferences
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }
}

impl PreferencesEffects for MockPreferencesHandler {
    fn get_string(&self, key: &str) -> Option<String> {
        self.calls.hit();
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telephony_counts_reads() {
        let handler = MockTelephonyHandler::new().with_device_id("356938035643809");
        assert_eq!(handler.device_id_calls(), 0);
        assert_eq!(handler.device_id().as_deref(), Some("356938035643809"));
        assert_eq!(handler.subscriber_id(), None);
        assert_eq!(handler.device_id_calls(), 1);
        assert_eq!(handler.subscriber_id_calls(), 1);
    }

    #[test]
    fn test_wifi_hidden_mac() {
        let handler = MockWifiHandler::new().with_hidden_mac_address();
        let info = handler.connection_info().unwrap();
        assert_eq!(info.mac_address(), None);
        assert_eq!(handler.calls(), 1);
    }

    #[test]
    fn test_secure_default_scheme() {
        let handler = MockSecureSettingsHandler::new();
        assert_eq!(handler.scheme_name(), "android_id");
        assert_eq!(handler.secure_id(), None);
    }
}
