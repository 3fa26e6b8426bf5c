//! Logical properties and their key vocabulary
//!
//! Each logical property has a plain key (`deviceid`) holding the raw value and
//! a URI key (`uri:deviceid`) holding the value tagged with the scheme of the
//! source that produced it (`imei:356938035643809`). Form templates refer to
//! properties by these keys, so the names are part of the public contract.

use serde::Serialize;
use std::fmt;

/// Prefix distinguishing URI keys from plain keys
pub const URI_KEY_PREFIX: &str = "uri:";

/// Device identifier (IMEI, MAC address, or secure identifier)
pub const DEVICE_ID_PROPERTY: &str = "deviceid";
/// Subscriber identifier (IMSI)
pub const SUBSCRIBER_ID_PROPERTY: &str = "subscriberid";
/// SIM serial number
pub const SIM_SERIAL_PROPERTY: &str = "simserial";
/// Line 1 phone number
pub const PHONE_NUMBER_PROPERTY: &str = "phonenumber";
/// Configured username
pub const USERNAME_PROPERTY: &str = "username";
/// Selected account email
pub const EMAIL_PROPERTY: &str = "email";

/// URI form of [`DEVICE_ID_PROPERTY`]
pub const OR_DEVICE_ID_PROPERTY: &str = "uri:deviceid";
/// URI form of [`SUBSCRIBER_ID_PROPERTY`]
pub const OR_SUBSCRIBER_ID_PROPERTY: &str = "uri:subscriberid";
/// URI form of [`SIM_SERIAL_PROPERTY`]
pub const OR_SIM_SERIAL_PROPERTY: &str = "uri:simserial";
/// URI form of [`PHONE_NUMBER_PROPERTY`]
pub const OR_PHONE_NUMBER_PROPERTY: &str = "uri:phonenumber";
/// URI form of [`USERNAME_PROPERTY`]
pub const OR_USERNAME_PROPERTY: &str = "uri:username";
/// URI form of [`EMAIL_PROPERTY`]
pub const OR_EMAIL_PROPERTY: &str = "uri:email";

/// Scheme tag for a telephony hardware identifier
pub const IMEI_SCHEME: &str = "imei";
/// Scheme tag for a WiFi hardware address
pub const MAC_SCHEME: &str = "mac";
/// Scheme tag for a subscriber identifier
pub const IMSI_SCHEME: &str = "imsi";
/// Scheme tag for a SIM serial number
pub const SIM_SERIAL_SCHEME: &str = "simserial";
/// Scheme tag for a phone number
pub const TEL_SCHEME: &str = "tel";
/// Scheme tag for a username
pub const USERNAME_SCHEME: &str = "username";
/// Scheme tag for an email address
pub const MAILTO_SCHEME: &str = "mailto";

/// The six logical identity properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceProperty {
    /// Device identifier
    DeviceId,
    /// Subscriber identifier
    SubscriberId,
    /// SIM serial number
    SimSerial,
    /// Phone number
    PhoneNumber,
    /// Username
    Username,
    /// Email
    Email,
}

impl DeviceProperty {
    /// All logical properties in resolution order
    pub const ALL: [DeviceProperty; 6] = [
        DeviceProperty::DeviceId,
        DeviceProperty::SubscriberId,
        DeviceProperty::SimSerial,
        DeviceProperty::PhoneNumber,
        DeviceProperty::Username,
        DeviceProperty::Email,
    ];

    /// Plain key holding the raw value
    pub fn key(&self) -> &'static str {
        match self {
            DeviceProperty::DeviceId => DEVICE_ID_PROPERTY,
            DeviceProperty::SubscriberId => SUBSCRIBER_ID_PROPERTY,
            DeviceProperty::SimSerial => SIM_SERIAL_PROPERTY,
            DeviceProperty::PhoneNumber => PHONE_NUMBER_PROPERTY,
            DeviceProperty::Username => USERNAME_PROPERTY,
            DeviceProperty::Email => EMAIL_PROPERTY,
        }
    }

    /// URI key holding the scheme-tagged value
    pub fn uri_key(&self) -> &'static str {
        match self {
            DeviceProperty::DeviceId => OR_DEVICE_ID_PROPERTY,
            DeviceProperty::SubscriberId => OR_SUBSCRIBER_ID_PROPERTY,
            DeviceProperty::SimSerial => OR_SIM_SERIAL_PROPERTY,
            DeviceProperty::PhoneNumber => OR_PHONE_NUMBER_PROPERTY,
            DeviceProperty::Username => OR_USERNAME_PROPERTY,
            DeviceProperty::Email => OR_EMAIL_PROPERTY,
        }
    }

    /// Fixed scheme tag for this property
    ///
    /// `None` for the device identifier, whose tag depends on which source
    /// produced it.
    pub fn scheme(&self) -> Option<&'static str> {
        match self {
            DeviceProperty::DeviceId => None,
            DeviceProperty::SubscriberId => Some(IMSI_SCHEME),
            DeviceProperty::SimSerial => Some(SIM_SERIAL_SCHEME),
            DeviceProperty::PhoneNumber => Some(TEL_SCHEME),
            DeviceProperty::Username => Some(USERNAME_SCHEME),
            DeviceProperty::Email => Some(MAILTO_SCHEME),
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceProperty::DeviceId => "Device ID",
            DeviceProperty::SubscriberId => "Subscriber ID",
            DeviceProperty::SimSerial => "SIM serial",
            DeviceProperty::PhoneNumber => "Phone number",
            DeviceProperty::Username => "Username",
            DeviceProperty::Email => "Email",
        }
    }

    /// Look up the property whose plain or URI key matches `name`
    ///
    /// Matching is case-insensitive. Returns the property and whether the URI
    /// form was named.
    pub fn from_key(name: &str) -> Option<(DeviceProperty, bool)> {
        let canonical = canonical_key(name);
        Self::ALL.into_iter().find_map(|property| {
            if canonical == property.key() {
                Some((property, false))
            } else if canonical == property.uri_key() {
                Some((property, true))
            } else {
                None
            }
        })
    }
}

impl fmt::Display for DeviceProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Canonical form of a property name
///
/// Lower-cases with the locale-independent Unicode mapping, so the result is
/// the same on every host.
pub fn canonical_key(name: &str) -> String {
    name.to_lowercase()
}

/// Build a URI-form value: `<scheme>:<value>`
pub fn scheme_value(scheme: &str, value: &str) -> String {
    format!("{scheme}:{value}")
}
