//! Layer 1: Core Effect Trait Definitions
//!
//! Pure trait definitions for every platform read the property manager performs.
//! This module defines **what** can be read; handlers define **how**.
//!
//! # Effect Classification
//!
//! All four are infrastructure effects: OS integration with no forms-specific
//! semantics. Every accessor is synchronous and returns `Option`, since "no
//! SIM", "no WiFi", and "no stored username" are ordinary states, not errors.
//!
//! **Handlers**:
//! - Host: `devprops-effects` (config values, sysfs, machine-id, TOML preferences)
//! - Testing: `devprops-testkit` (deterministic mocks with call counters)

pub mod preferences;
pub mod secure;
pub mod supertraits;
pub mod telephony;
pub mod wifi;

pub use preferences::{PreferencesEffects, PREF_KEY_ACCOUNT, PREF_KEY_USERNAME};
pub use secure::{SecureSettingsEffects, ANDROID_ID_SCHEME};
pub use supertraits::PlatformEffects;
pub use telephony::TelephonyEffects;
pub use wifi::{WifiConnectionInfo, WifiEffects};
