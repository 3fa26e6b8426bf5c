//! devprops Core - Effect Interfaces and Property Vocabulary
//!
//! This crate provides the foundational types for resolving device and user
//! identity properties that a forms engine substitutes into form templates.
//! It contains only trait signatures and vocabulary, no platform access.
//!
//! # Architecture Layers
//!
//! ## Effect Interfaces (Pure Signatures)
//! - `TelephonyEffects`: device identifier, subscriber identifier, SIM serial, line number
//! - `WifiEffects`: current connection info and its hardware address
//! - `SecureSettingsEffects`: per-installation secure identifier and its scheme name
//! - `PreferencesEffects`: named string preferences (username, account)
//! - `PlatformEffects`: supertrait combining all four
//!
//! ## Property Vocabulary
//! - `DeviceProperty`: the six logical properties with plain and URI keys
//! - Scheme tags used to build URI-form values (`imei:`, `mac:`, `tel:`, ...)
//!
//! Handlers live in `devprops-effects` (host) and `devprops-testkit` (mocks).

#![forbid(unsafe_code)]

/// Pure effect interfaces (no implementations)
pub mod effects;

/// Unified error handling
pub mod errors;

/// Logical properties, key names, and scheme tags
pub mod property;

// === Public API Re-exports ===

pub use effects::{
    PlatformEffects, PreferencesEffects, SecureSettingsEffects, TelephonyEffects,
    WifiConnectionInfo, WifiEffects, ANDROID_ID_SCHEME, PREF_KEY_ACCOUNT, PREF_KEY_USERNAME,
};
pub use errors::{DevPropsError, Result};
pub use property::{
    canonical_key, scheme_value, DeviceProperty, DEVICE_ID_PROPERTY, EMAIL_PROPERTY,
    IMEI_SCHEME, IMSI_SCHEME, MAC_SCHEME, MAILTO_SCHEME, OR_DEVICE_ID_PROPERTY,
    OR_EMAIL_PROPERTY, OR_PHONE_NUMBER_PROPERTY, OR_SIM_SERIAL_PROPERTY,
    OR_SUBSCRIBER_ID_PROPERTY, OR_USERNAME_PROPERTY, PHONE_NUMBER_PROPERTY, SIM_SERIAL_PROPERTY,
    SIM_SERIAL_SCHEME, SUBSCRIBER_ID_PROPERTY, TEL_SCHEME, URI_KEY_PREFIX, USERNAME_PROPERTY,
    USERNAME_SCHEME,
};
