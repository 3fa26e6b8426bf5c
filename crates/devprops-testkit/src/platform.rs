//! Composed mock platform
//!
//! `MockPlatform` bundles one mock handler per effect and implements
//! `PlatformEffects` by delegation.

use crate::mocks::{
    MockPreferencesHandler, MockSecureSettingsHandler, MockTelephonyHandler, MockWifiHandler,
};
use devprops_core::{
    PreferencesEffects, SecureSettingsEffects, TelephonyEffects, WifiConnectionInfo, WifiEffects,
    PREF_KEY_ACCOUNT, PREF_KEY_USERNAME,
};

/// Mock platform exposing every effect the property manager reads
#[derive(Debug, Default)]
pub struct MockPlatform {
    telephony: MockTelephonyHandler,
    wifi: MockWifiHandler,
    secure: MockSecureSettingsHandler,
    preferences: MockPreferencesHandler,
}

impl MockPlatform {
    /// Platform where every source is empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a platform
    pub fn builder() -> MockPlatformBuilder {
        MockPlatformBuilder::default()
    }

    /// Telephony handler, for read counters
    pub fn telephony(&self) -> &MockTelephonyHandler {
        &self.telephony
    }

    /// WiFi handler, for read counters
    pub fn wifi(&self) -> &MockWifiHandler {
        &self.wifi
    }

    /// Secure settings handler, for read counters
    pub fn secure(&self) -> &MockSecureSettingsHandler {
        &self.secure
    }

    /// Preferences handler, for read counters and stored values
    pub fn preferences(&self) -> &MockPreferencesHandler {
        &self.preferences
    }
}

impl TelephonyEffects for MockPlatform {
    fn device_id(&self) -> Option<String> {
        self.telephony.device_id()
    }

    fn subscriber_id(&self) -> Option<String> {
        self.telephony.subscriber_id()
    }

    fn sim_serial_number(&self) -> Option<String> {
        self.telephony.sim_serial_number()
    }

    fn line1_number(&self) -> Option<String> {
        self.telephony.line1_number()
    }
}

impl WifiEffects for MockPlatform {
    fn connection_info(&self) -> Option<WifiConnectionInfo> {
        self.wifi.connection_info()
    }
}

impl SecureSettingsEffects for MockPlatform {
    fn secure_id(&self) -> Option<String> {
        self.secure.secure_id()
    }

    fn scheme_name(&self) -> &str {
        self.secure.scheme_name()
    }
}

impl PreferencesEffects for MockPlatform {
    fn get_string(&self, key: &str) -> Option<String> {
        self.preferences.get_string(key)
    }
}

/// Builder for [`MockPlatform`]
#[derive(Debug, Default)]
pub struct MockPlatformBuilder {
    telephony: MockTelephonyHandler,
    wifi: MockWifiHandler,
    secure: MockSecureSettingsHandler,
    preferences: MockPreferencesHandler,
}

impl MockPlatformBuilder {
    /// Telephony device identifier
    pub fn device_id(mut self, value: impl Into<String>) -> Self {
        self.telephony = self.telephony.with_device_id(value);
        self
    }

    /// Telephony subscriber identifier
    pub fn subscriber_id(mut self, value: impl Into<String>) -> Self {
        self.telephony = self.telephony.with_subscriber_id(value);
        self
    }

    /// SIM serial number
    pub fn sim_serial_number(mut self, value: impl Into<String>) -> Self {
        self.telephony = self.telephony.with_sim_serial_number(value);
        self
    }

    /// Line 1 phone number
    pub fn line1_number(mut self, value: impl Into<String>) -> Self {
        self.telephony = self.telephony.with_line1_number(value);
        self
    }

    /// WiFi connection with a hardware address
    pub fn mac_address(mut self, value: impl Into<String>) -> Self {
        self.wifi = self.wifi.with_mac_address(value);
        self
    }

    /// WiFi connection that hides its hardware address
    pub fn hidden_mac_address(mut self) -> Self {
        self.wifi = self.wifi.with_hidden_mac_address();
        self
    }

    /// Secure identifier
    pub fn secure_id(mut self, value: impl Into<String>) -> Self {
        self.secure = self.secure.with_secure_id(value);
        self
    }

    /// Secure identifier scheme name
    pub fn secure_scheme(mut self, scheme_name: impl Into<String>) -> Self {
        self.secure = self.secure.with_scheme_name(scheme_name);
        self
    }

    /// Username preference
    pub fn username(self, value: impl Into<String>) -> Self {
        self.preference(PREF_KEY_USERNAME, value)
    }

    /// Account (email) preference
    pub fn account(self, value: impl Into<String>) -> Self {
        self.preference(PREF_KEY_ACCOUNT, value)
    }

    /// Arbitrary preference
    pub fn preference(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.preferences = self.preferences.with_value(key, value);
        self
    }

    /// Finish building
    pub fn build(self) -> MockPlatform {
        MockPlatform {
            telephony: self.telephony,
            wifi: self.wifi,
            secure: self.secure,
            preferences: self.preferences,
        }
    }
}
