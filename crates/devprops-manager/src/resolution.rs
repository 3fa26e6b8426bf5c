//! Device identifier resolution
//!
//! The device identifier comes from the first source that yields a usable
//! value, in this order:
//!
//! 1. telephony device identifier (IMEI), unless it is a placeholder
//! 2. secure identifier, when the telephony identifier was a placeholder
//! 3. WiFi hardware address, when no identifier was obtained yet
//! 4. secure identifier, when still nothing was obtained
//!
//! The secure settings store is read at most once even when both rule 2 and
//! rule 4 are reached.

use devprops_core::property::{scheme_value, IMEI_SCHEME, MAC_SCHEME};
use devprops_core::PlatformEffects;
use serde::{Deserialize, Serialize};

/// Identifier some devices report in place of a real IMEI
pub const INVALID_DEVICE_ID_SENTINEL: &str = "000000000000000";

/// Source that produced the device identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceIdSource {
    /// Telephony hardware identifier
    Telephony,
    /// WiFi hardware address
    WifiMac,
    /// Platform secure identifier
    SecureSettings,
}

/// A resolved device identifier with its URI form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDeviceId {
    /// Raw identifier
    pub value: String,
    /// Identifier tagged with the scheme of its source
    pub uri_value: String,
    /// Source that produced the identifier
    pub source: DeviceIdSource,
}

impl ResolvedDeviceId {
    fn new(scheme: &str, value: String, source: DeviceIdSource) -> Self {
        Self {
            uri_value: scheme_value(scheme, &value),
            value,
            source,
        }
    }
}

/// Whether a telephony identifier is a placeholder rather than a real IMEI
///
/// Emulators and some CDMA devices report masked (`*`) or all-zero identifiers.
pub fn is_placeholder_device_id(device_id: &str) -> bool {
    device_id.contains('*') || device_id.contains(INVALID_DEVICE_ID_SENTINEL)
}

/// Resolve the device identifier from the platform
///
/// Returns `None` when no source yields a value.
pub fn resolve_device_id<P>(platform: &P) -> Option<ResolvedDeviceId>
where
    P: PlatformEffects + ?Sized,
{
    let mut secure = SecureIdLookup::new(platform);

    let mut resolved = match platform.device_id() {
        Some(device_id) if is_placeholder_device_id(&device_id) => {
            tracing::warn!(
                length = device_id.len(),
                "Telephony device identifier is a placeholder, using secure identifier"
            );
            secure.resolve()
        }
        Some(device_id) => Some(ResolvedDeviceId::new(
            IMEI_SCHEME,
            device_id,
            DeviceIdSource::Telephony,
        )),
        None => None,
    };

    if resolved.is_none() {
        // No SIM, WiFi only
        match platform.connection_info() {
            Some(info) => match info.mac_address() {
                Some(mac) => {
                    resolved = Some(ResolvedDeviceId::new(
                        MAC_SCHEME,
                        mac.to_string(),
                        DeviceIdSource::WifiMac,
                    ));
                }
                None => tracing::debug!("WiFi connection info has no hardware address"),
            },
            None => tracing::debug!("WiFi connection info unavailable"),
        }
    }

    if resolved.is_none() {
        resolved = secure.resolve();
    }

    match &resolved {
        Some(device_id) => {
            tracing::debug!(source = ?device_id.source, "Resolved device identifier");
        }
        None => tracing::warn!("No source yielded a device identifier"),
    }

    resolved
}

/// Memoized read of the secure identifier
struct SecureIdLookup<'a, P: ?Sized> {
    platform: &'a P,
    cached: Option<Option<String>>,
}

impl<'a, P> SecureIdLookup<'a, P>
where
    P: PlatformEffects + ?Sized,
{
    fn new(platform: &'a P) -> Self {
        Self {
            platform,
            cached: None,
        }
    }

    fn resolve(&mut self) -> Option<ResolvedDeviceId> {
        let platform = self.platform;
        let secure_id = self
            .cached
            .get_or_insert_with(|| platform.secure_id())
            .clone()?;
        Some(ResolvedDeviceId::new(
            platform.scheme_name(),
            secure_id,
            DeviceIdSource::SecureSettings,
        ))
    }
}
