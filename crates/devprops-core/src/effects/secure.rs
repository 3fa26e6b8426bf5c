//! Secure Settings Effects Trait Definitions
//!
//! The secure settings store holds a generic per-installation identifier. It is
//! the last fallback for device identification, and its scheme name doubles as
//! the tag of the URI-form value (`<scheme>:<id>`).

/// Name of the platform's per-installation identifier setting
pub const ANDROID_ID_SCHEME: &str = "android_id";

/// Secure settings accessors
pub trait SecureSettingsEffects: Send + Sync {
    /// Platform-assigned per-installation identifier
    fn secure_id(&self) -> Option<String>;

    /// Name of the setting the identifier is read from
    fn scheme_name(&self) -> &str {
        ANDROID_ID_SCHEME
    }
}
