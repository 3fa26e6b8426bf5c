//! Supertraits for common effect combinations

use super::{PreferencesEffects, SecureSettingsEffects, TelephonyEffects, WifiEffects};

/// Everything the property manager reads at construction
///
/// Combines telephony, WiFi, secure settings, and preferences access. A
/// platform missing any of these cannot be passed to the property manager.
pub trait PlatformEffects:
    TelephonyEffects + WifiEffects + SecureSettingsEffects + PreferencesEffects
{
}

/// Automatic implementation for types that satisfy the required bounds
impl<T> PlatformEffects for T where
    T: TelephonyEffects + WifiEffects + SecureSettingsEffects + PreferencesEffects
{
}
