//! Property manager
//!
//! Reads every identity source once at construction and answers lookups from
//! an immutable map afterwards. Construct a new manager to observe changed
//! preferences; instances share no state.

use crate::resolution::{resolve_device_id, DeviceIdSource};
use devprops_core::property::{canonical_key, scheme_value};
use devprops_core::{DeviceProperty, PlatformEffects, PREF_KEY_ACCOUNT, PREF_KEY_USERNAME};
use std::collections::HashMap;

/// Read-only cache of identity properties for form template substitution
///
/// Holds a plain key and a URI key for every property whose source yielded a
/// value. A property missing from the platform is missing here: both keys are
/// absent together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyManager {
    properties: HashMap<&'static str, String>,
    device_id_source: Option<DeviceIdSource>,
}

impl PropertyManager {
    /// Resolve all properties from the platform
    ///
    /// Only reads from the platform. Never fails; sources with no value leave
    /// their property absent.
    pub fn new<P>(platform: &P) -> Self
    where
        P: PlatformEffects + ?Sized,
    {
        tracing::info!("Resolving device properties");

        let mut manager = Self::default();

        if let Some(device_id) = resolve_device_id(platform) {
            manager.device_id_source = Some(device_id.source);
            manager.insert_pair(DeviceProperty::DeviceId, device_id.value, device_id.uri_value);
        }

        manager.insert_tagged(DeviceProperty::SubscriberId, platform.subscriber_id());
        manager.insert_tagged(DeviceProperty::SimSerial, platform.sim_serial_number());
        manager.insert_tagged(DeviceProperty::PhoneNumber, platform.line1_number());

        manager.insert_tagged(
            DeviceProperty::Username,
            platform.get_string(PREF_KEY_USERNAME),
        );
        manager.insert_tagged(DeviceProperty::Email, platform.get_string(PREF_KEY_ACCOUNT));

        tracing::debug!(
            resolved = manager.properties.len() / 2,
            device_id_source = ?manager.device_id_source,
            "Device properties resolved"
        );

        manager
    }

    /// Look up a property by plain or URI key
    ///
    /// The name is lower-cased before lookup, so `DEVICEID` and `deviceid`
    /// are the same key. Unknown names and absent properties yield `None`.
    pub fn get(&self, property_name: &str) -> Option<&str> {
        self.properties
            .get(canonical_key(property_name).as_str())
            .map(String::as_str)
    }

    /// Raw value of a logical property
    pub fn value(&self, property: DeviceProperty) -> Option<&str> {
        self.properties.get(property.key()).map(String::as_str)
    }

    /// Scheme-tagged value of a logical property
    pub fn uri_value(&self, property: DeviceProperty) -> Option<&str> {
        self.properties.get(property.uri_key()).map(String::as_str)
    }

    /// Whether the property resolved to a value
    pub fn contains(&self, property: DeviceProperty) -> bool {
        self.properties.contains_key(property.key())
    }

    /// Source that produced the device identifier, if any did
    pub fn device_id_source(&self) -> Option<DeviceIdSource> {
        self.device_id_source
    }

    fn insert_tagged(&mut self, property: DeviceProperty, value: Option<String>) {
        let (Some(value), Some(scheme)) = (value, property.scheme()) else {
            return;
        };
        let uri_value = scheme_value(scheme, &value);
        self.insert_pair(property, value, uri_value);
    }

    fn insert_pair(&mut self, property: DeviceProperty, value: String, uri_value: String) {
        self.properties.insert(property.key(), value);
        self.properties.insert(property.uri_key(), uri_value);
    }
}
