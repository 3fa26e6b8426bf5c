//! Host platform composition

use crate::config::DevPropsConfig;
use crate::preferences::TomlPreferencesHandler;
use crate::secure::MachineIdSecureSettingsHandler;
use crate::telephony::ConfiguredTelephonyHandler;
use crate::wifi::SysfsWifiHandler;
use devprops_core::{
    PreferencesEffects, Result, SecureSettingsEffects, TelephonyEffects, WifiConnectionInfo,
    WifiEffects,
};

/// Every host handler behind one `PlatformEffects` implementation
#[derive(Debug, Clone)]
pub struct HostPlatform {
    telephony: ConfiguredTelephonyHandler,
    wifi: SysfsWifiHandler,
    secure: MachineIdSecureSettingsHandler,
    preferences: TomlPreferencesHandler,
}

impl HostPlatform {
    /// Build the host platform from configuration
    ///
    /// Fails only if the preferences file exists but cannot be read or parsed.
    pub fn from_config(config: &DevPropsConfig) -> Result<Self> {
        let preferences = match &config.preferences.path {
            Some(path) => TomlPreferencesHandler::load(path)?,
            None => TomlPreferencesHandler::empty(),
        };

        Ok(Self {
            telephony: ConfiguredTelephonyHandler::new(config.telephony.clone()),
            wifi: SysfsWifiHandler::new(&config.wifi),
            secure: MachineIdSecureSettingsHandler::new(&config.secure),
            preferences,
        })
    }
}

impl TelephonyEffects for HostPlatform {
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

impl WifiEffects for HostPlatform {
    fn connection_info(&self) -> Option<WifiConnectionInfo> {
        self.wifi.connection_info()
    }
}

impl SecureSettingsEffects for HostPlatform {
    fn secure_id(&self) -> Option<String> {
        self.secure.secure_id()
    }

    fn scheme_name(&self) -> &str {
        self.secure.scheme_name()
    }
}

impl PreferencesEffects for HostPlatform {
    fn get_string(&self, key: &str) -> Option<String> {
        self.preferences.get_string(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devprops_core::PlatformEffects;
    use std::path::Path;

    fn assert_platform<P: PlatformEffects>(_platform: &P) {}

    fn sandbox_config(root: &Path) -> DevPropsConfig {
        let mut config = DevPropsConfig::default();
        config.wifi.sysfs_root = root.join("net");
        config.secure.machine_id_path = root.join("machine-id");
        config
    }

    #[test]
    fn test_composes_handlers() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = sandbox_config(dir.path());
        config.telephony.device_id = Some("356938035643809".to_string());
        config.preferences.path = Some(dir.path().join("prefs.toml"));
        std::fs::write(dir.path().join("machine-id"), "abc123\n").unwrap();
        std::fs::write(dir.path().join("prefs.toml"), "account = \"a@example.org\"\n").unwrap();

        let platform = HostPlatform::from_config(&config).unwrap();
        assert_platform(&platform);

        assert_eq!(platform.device_id().as_deref(), Some("356938035643809"));
        assert_eq!(platform.secure_id().as_deref(), Some("abc123"));
        assert_eq!(platform.scheme_name(), "android_id");
        assert_eq!(platform.get_string("account").as_deref(), Some("a@example.org"));
        assert_eq!(platform.connection_info(), None);
    }

    #[test]
    fn test_bad_preferences_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = sandbox_config(dir.path());
        config.preferences.path = Some(dir.path().join("prefs.toml"));
        std::fs::write(dir.path().join("prefs.toml"), "username = [").unwrap();

        assert!(HostPlatform::from_config(&config).is_err());
    }
}
