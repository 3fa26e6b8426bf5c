//! Preferences Effects Trait Definitions

/// Preference key holding the configured username
pub const PREF_KEY_USERNAME: &str = "username";

/// Preference key holding the selected account (an email address)
pub const PREF_KEY_ACCOUNT: &str = "account";

/// User preferences store accessors
pub trait PreferencesEffects: Send + Sync {
    /// String preference stored under `key`
    fn get_string(&self, key: &str) -> Option<String>;
}
