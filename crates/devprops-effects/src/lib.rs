//! Layer 3: Host Effect Handlers
//!
//! Stateless implementations of the devprops effect traits for desktop and
//! server hosts, where no modem or Android settings provider exists:
//!
//! - `ConfiguredTelephonyHandler`: telephony values injected by configuration
//! - `SysfsWifiHandler`: hardware address from `/sys/class/net`
//! - `MachineIdSecureSettingsHandler`: `/etc/machine-id` as the secure identifier
//! - `TomlPreferencesHandler`: flat TOML file of string preferences
//! - `HostPlatform`: all four composed from `DevPropsConfig`
//!
//! **Layer Constraint**: NO mock handlers - those belong in devprops-testkit.

pub mod config;
pub mod platform;
pub mod preferences;
pub mod secure;
pub mod telephony;
pub mod wifi;

pub use config::{
    DevPropsConfig, PreferencesConfig, SecureConfig, TelephonyConfig, WifiConfig, CONFIG_KEYS,
    ENV_PREFIX,
};
pub use platform::HostPlatform;
pub use preferences::TomlPreferencesHandler;
pub use secure::MachineIdSecureSettingsHandler;
pub use telephony::ConfiguredTelephonyHandler;
pub use wifi::SysfsWifiHandler;
