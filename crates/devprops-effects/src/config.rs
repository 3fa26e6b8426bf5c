//! Host platform configuration
//!
//! Layered the usual way: defaults, then a TOML file, then `DEVPROPS_*`
//! environment variables, then validation.
//!
//! ```toml
//! [telephony]
//! device_id = "356938035643809"
//!
//! [wifi]
//! interface = "wlan0"
//!
//! [secure]
//! machine_id_path = "/etc/machine-id"
//! scheme_name = "android_id"
//!
//! [preferences]
//! path = "/var/lib/devprops/preferences.toml"
//! ```

use devprops_core::{DevPropsError, Result, ANDROID_ID_SCHEME};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "DEVPROPS_";

/// Default sysfs directory listing network interfaces
pub const DEFAULT_SYSFS_NET_ROOT: &str = "/sys/class/net";

/// Default location of the machine identifier
pub const DEFAULT_MACHINE_ID_PATH: &str = "/etc/machine-id";

/// Dotted keys accepted by [`DevPropsConfig::set_from_string`]
pub const CONFIG_KEYS: [&str; 9] = [
    "telephony.device_id",
    "telephony.subscriber_id",
    "telephony.sim_serial_number",
    "telephony.line1_number",
    "wifi.interface",
    "wifi.sysfs_root",
    "secure.machine_id_path",
    "secure.scheme_name",
    "preferences.path",
];

/// Top-level host configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevPropsConfig {
    /// Telephony values
    pub telephony: TelephonyConfig,
    /// WiFi interface selection
    pub wifi: WifiConfig,
    /// Secure identifier source
    pub secure: SecureConfig,
    /// Preferences file
    pub preferences: PreferencesConfig,
}

/// Telephony values for hosts without a modem
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelephonyConfig {
    /// Device identifier (IMEI)
    pub device_id: Option<String>,
    /// Subscriber identifier (IMSI)
    pub subscriber_id: Option<String>,
    /// SIM serial number
    pub sim_serial_number: Option<String>,
    /// Line 1 phone number
    pub line1_number: Option<String>,
}

/// WiFi interface selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WifiConfig {
    /// Interface to read; `None` picks the first wireless, then first non-loopback
    pub interface: Option<String>,
    /// Directory listing network interfaces
    pub sysfs_root: PathBuf,
}

impl Default for WifiConfig {
    fn default() -> Self {
        Self {
            interface: None,
            sysfs_root: PathBuf::from(DEFAULT_SYSFS_NET_ROOT),
        }
    }
}

/// Secure identifier source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecureConfig {
    /// File holding the per-installation identifier
    pub machine_id_path: PathBuf,
    /// Scheme name used to tag the identifier
    pub scheme_name: String,
}

impl Default for SecureConfig {
    fn default() -> Self {
        Self {
            machine_id_path: PathBuf::from(DEFAULT_MACHINE_ID_PATH),
            scheme_name: ANDROID_ID_SCHEME.to_string(),
        }
    }
}

/// Preferences file location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreferencesConfig {
    /// TOML file of string preferences; `None` means no preferences
    pub path: Option<PathBuf>,
}

impl DevPropsConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DevPropsError::storage(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DevPropsError::serialization(format!("Invalid config TOML: {e}")))
    }

    /// Defaults, then `path` if it exists, then environment, then validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "Loading configuration file");
                Self::load_from_file(path)?
            }
            Some(path) => {
                tracing::debug!(
                    path = %path.display(),
                    "Configuration file absent, using defaults"
                );
                Self::default()
            }
            None => Self::default(),
        };
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `DEVPROPS_<SECTION>_<FIELD>` environment variables
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with_os_vars(std::env::vars_os())
    }

    /// Apply `DEVPROPS_*` pairs from a raw OS environment
    ///
    /// Variables outside the prefix are ignored whatever their encoding. A
    /// prefixed variable that is not valid UTF-8 is an error.
    pub fn merge_with_os_vars<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut decoded = Vec::new();
        for (key, value) in vars {
            if !key.to_string_lossy().starts_with(ENV_PREFIX) {
                continue;
            }
            let (Some(key), Some(value)) = (key.to_str(), value.to_str()) else {
                return Err(DevPropsError::invalid(format!(
                    "Environment variable {} is not valid UTF-8",
                    key.to_string_lossy()
                )));
            };
            decoded.push((key.to_string(), value.to_string()));
        }
        self.merge_with_vars(decoded)
    }

    /// Apply `DEVPROPS_<SECTION>_<FIELD>` pairs from an arbitrary source
    ///
    /// Prefixed names that match no configuration key are logged and skipped,
    /// so unrelated `DEVPROPS_*` variables do not stop startup.
    pub fn merge_with_vars<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let key = key.as_ref();
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let name = name.to_lowercase();
            let config_key = name
                .split_once('_')
                .map(|(section, field)| format!("{section}.{field}"));
            match config_key {
                Some(config_key) if CONFIG_KEYS.contains(&config_key.as_str()) => {
                    self.set_from_string(&config_key, value.as_ref())?;
                }
                _ => tracing::warn!(
                    variable = %key,
                    "Ignoring environment variable that names no configuration key"
                ),
            }
        }
        Ok(())
    }

    /// Set a value by dotted key, e.g. `telephony.device_id`
    ///
    /// An empty value clears optional fields.
    pub fn set_from_string(&mut self, key: &str, value: &str) -> Result<()> {
        let optional = || (!value.is_empty()).then(|| value.to_string());
        match key {
            "telephony.device_id" => self.telephony.device_id = optional(),
            "telephony.subscriber_id" => self.telephony.subscriber_id = optional(),
            "telephony.sim_serial_number" => self.telephony.sim_serial_number = optional(),
            "telephony.line1_number" => self.telephony.line1_number = optional(),
            "wifi.interface" => self.wifi.interface = optional(),
            "wifi.sysfs_root" => self.wifi.sysfs_root = PathBuf::from(value),
            "secure.machine_id_path" => self.secure.machine_id_path = PathBuf::from(value),
            "secure.scheme_name" => self.secure.scheme_name = value.to_string(),
            "preferences.path" => self.preferences.path = optional().map(PathBuf::from),
            _ => {
                return Err(DevPropsError::invalid(format!(
                    "Unknown configuration key: {key}"
                )))
            }
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let scheme = &self.secure.scheme_name;
        if scheme.is_empty() {
            return Err(DevPropsError::invalid("secure.scheme_name cannot be empty"));
        }
        if scheme.contains(':') {
            return Err(DevPropsError::invalid(format!(
                "secure.scheme_name must not contain ':': {scheme}"
            )));
        }
        if let Some(interface) = &self.wifi.interface {
            if interface.is_empty() || interface.contains('/') {
                return Err(DevPropsError::invalid(format!(
                    "wifi.interface is not an interface name: {interface:?}"
                )));
            }
        }
        Ok(())
    }
}
