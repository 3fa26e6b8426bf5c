//! Integration Tests for Property Resolution
//!
//! Tests the property manager against mock platforms:
//! - Device identifier fallback order
//! - Independent telephony and preference properties
//! - Case-insensitive lookup
//! - Read-only use of the platform

use assert_matches::assert_matches;
use devprops_core::{
    DeviceProperty, DEVICE_ID_PROPERTY, EMAIL_PROPERTY, OR_DEVICE_ID_PROPERTY, OR_EMAIL_PROPERTY,
    OR_PHONE_NUMBER_PROPERTY, OR_SIM_SERIAL_PROPERTY, OR_SUBSCRIBER_ID_PROPERTY,
    OR_USERNAME_PROPERTY, PHONE_NUMBER_PROPERTY, SIM_SERIAL_PROPERTY, SUBSCRIBER_ID_PROPERTY,
    USERNAME_PROPERTY,
};
use devprops_manager::{DeviceIdSource, PropertyManager};
use devprops_testkit::{init_test_tracing, MockPlatform};

// ============================================================================
// Device identifier fallback
// ============================================================================

#[test]
fn test_valid_imei_wins() {
    init_test_tracing();
    let platform = MockPlatform::builder()
        .device_id("356938035643809")
        .mac_address("02:00:00:00:00:00")
        .secure_id("abc123")
        .build();

    let manager = PropertyManager::new(&platform);

    assert_eq!(manager.get(DEVICE_ID_PROPERTY), Some("356938035643809"));
    assert_eq!(
        manager.get(OR_DEVICE_ID_PROPERTY),
        Some("imei:356938035643809")
    );
    assert_eq!(manager.device_id_source(), Some(DeviceIdSource::Telephony));
    assert_eq!(platform.wifi().calls(), 0);
    assert_eq!(platform.secure().calls(), 0);
}

#[test]
fn test_zero_imei_falls_back_to_secure_id() {
    let platform = MockPlatform::builder()
        .device_id("000000000000000")
        .mac_address("02:00:00:00:00:00")
        .secure_id("abc123")
        .build();

    let manager = PropertyManager::new(&platform);

    assert_eq!(manager.get(DEVICE_ID_PROPERTY), Some("abc123"));
    assert_eq!(manager.get(OR_DEVICE_ID_PROPERTY), Some("android_id:abc123"));
    assert_eq!(
        manager.device_id_source(),
        Some(DeviceIdSource::SecureSettings)
    );
    assert_eq!(platform.wifi().calls(), 0);
}

#[test]
fn test_masked_imei_falls_back_to_secure_id() {
    let platform = MockPlatform::builder()
        .device_id("35693803564****")
        .secure_id("abc123")
        .secure_scheme("installation_id")
        .build();

    let manager = PropertyManager::new(&platform);

    assert_eq!(manager.get(DEVICE_ID_PROPERTY), Some("abc123"));
    assert_eq!(
        manager.get(OR_DEVICE_ID_PROPERTY),
        Some("installation_id:abc123")
    );
}

#[test]
fn test_placeholder_imei_without_secure_id_uses_wifi() {
    let platform = MockPlatform::builder()
        .device_id("000000000000000")
        .mac_address("02:00:00:00:00:00")
        .build();

    let manager = PropertyManager::new(&platform);

    assert_eq!(manager.get(DEVICE_ID_PROPERTY), Some("02:00:00:00:00:00"));
    assert_eq!(
        manager.get(OR_DEVICE_ID_PROPERTY),
        Some("mac:02:00:00:00:00:00")
    );
    assert_eq!(manager.device_id_source(), Some(DeviceIdSource::WifiMac));
    // The secure store was consulted once, not again after WiFi
    assert_eq!(platform.secure().calls(), 1);
}

#[test]
fn test_no_sim_uses_wifi_mac() {
    let platform = MockPlatform::builder()
        .mac_address("02:00:00:00:00:00")
        .secure_id("xyz789")
        .build();

    let manager = PropertyManager::new(&platform);

    assert_eq!(manager.get(DEVICE_ID_PROPERTY), Some("02:00:00:00:00:00"));
    assert_eq!(
        manager.get(OR_DEVICE_ID_PROPERTY),
        Some("mac:02:00:00:00:00:00")
    );
    assert_eq!(platform.secure().calls(), 0);
}

#[test]
fn test_no_sim_no_wifi_uses_secure_id() {
    let platform = MockPlatform::builder().secure_id("xyz789").build();

    let manager = PropertyManager::new(&platform);

    assert_eq!(manager.get(DEVICE_ID_PROPERTY), Some("xyz789"));
    assert_eq!(manager.get(OR_DEVICE_ID_PROPERTY), Some("android_id:xyz789"));
    assert_eq!(platform.wifi().calls(), 1);
    assert_eq!(platform.secure().calls(), 1);
}

#[test]
fn test_hidden_mac_falls_through_to_secure_id() {
    let platform = MockPlatform::builder()
        .hidden_mac_address()
        .secure_id("xyz789")
        .build();

    let manager = PropertyManager::new(&platform);

    assert_eq!(manager.get(DEVICE_ID_PROPERTY), Some("xyz789"));
    assert_eq!(manager.get(OR_DEVICE_ID_PROPERTY), Some("android_id:xyz789"));
}

#[test]
fn test_no_identifier_source_leaves_both_keys_absent() {
    let platform = MockPlatform::builder().hidden_mac_address().build();

    let manager = PropertyManager::new(&platform);

    assert_eq!(manager.get(DEVICE_ID_PROPERTY), None);
    assert_eq!(manager.get(OR_DEVICE_ID_PROPERTY), None);
    assert_matches!(manager.device_id_source(), None);
}

// ============================================================================
// Independent properties
// ============================================================================

#[test]
fn test_all_properties_present() {
    let platform = MockPlatform::builder()
        .device_id("356938035643809")
        .subscriber_id("310150123456789")
        .sim_serial_number("8901260123456789012")
        .line1_number("+15555550100")
        .username("enumerator-7")
        .account("enumerator7@example.org")
        .build();

    let manager = PropertyManager::new(&platform);

    let expected = [
        (SUBSCRIBER_ID_PROPERTY, "310150123456789"),
        (OR_SUBSCRIBER_ID_PROPERTY, "imsi:310150123456789"),
        (SIM_SERIAL_PROPERTY, "8901260123456789012"),
        (OR_SIM_SERIAL_PROPERTY, "simserial:8901260123456789012"),
        (PHONE_NUMBER_PROPERTY, "+15555550100"),
        (OR_PHONE_NUMBER_PROPERTY, "tel:+15555550100"),
        (USERNAME_PROPERTY, "enumerator-7"),
        (OR_USERNAME_PROPERTY, "username:enumerator-7"),
        (EMAIL_PROPERTY, "enumerator7@example.org"),
        (OR_EMAIL_PROPERTY, "mailto:enumerator7@example.org"),
    ];
    for (key, value) in expected {
        assert_eq!(manager.get(key), Some(value), "key {key}");
    }
    for property in DeviceProperty::ALL {
        assert!(manager.contains(property), "{property} missing");
    }
}

#[test]
fn test_missing_sources_leave_properties_absent() {
    let platform = MockPlatform::builder()
        .device_id("356938035643809")
        .line1_number("+15555550100")
        .username("enumerator-7")
        .build();

    let manager = PropertyManager::new(&platform);

    for property in [
        DeviceProperty::SubscriberId,
        DeviceProperty::SimSerial,
        DeviceProperty::Email,
    ] {
        assert_eq!(manager.get(property.key()), None);
        assert_eq!(manager.get(property.uri_key()), None);
    }
    assert_eq!(manager.value(DeviceProperty::PhoneNumber), Some("+15555550100"));
    assert_eq!(
        manager.uri_value(DeviceProperty::Username),
        Some("username:enumerator-7")
    );
}

#[test]
fn test_empty_platform_constructs() {
    let platform = MockPlatform::new();
    let manager = PropertyManager::new(&platform);

    for property in DeviceProperty::ALL {
        assert!(!manager.contains(property));
    }
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_lookup_is_case_insensitive() {
    let platform = MockPlatform::builder()
        .device_id("356938035643809")
        .account("enumerator7@example.org")
        .build();

    let manager = PropertyManager::new(&platform);

    assert_eq!(manager.get("DEVICEID"), manager.get("deviceid"));
    assert_eq!(manager.get("DeviceId"), Some("356938035643809"));
    assert_eq!(
        manager.get("URI:Email"),
        Some("mailto:enumerator7@example.org")
    );
}

#[test]
fn test_unknown_property_is_absent() {
    let platform = MockPlatform::builder().device_id("356938035643809").build();
    let manager = PropertyManager::new(&platform);

    assert_eq!(manager.get("nonexistentproperty"), None);
    assert_eq!(manager.get(""), None);
    assert_eq!(manager.get("imei:356938035643809"), None);
}

// ============================================================================
// Platform access
// ============================================================================

#[test]
fn test_each_source_read_once() {
    let platform = MockPlatform::builder()
        .device_id("356938035643809")
        .subscriber_id("310150123456789")
        .build();

    let _manager = PropertyManager::new(&platform);

    let telephony = platform.telephony();
    assert_eq!(telephony.device_id_calls(), 1);
    assert_eq!(telephony.subscriber_id_calls(), 1);
    assert_eq!(telephony.sim_serial_calls(), 1);
    assert_eq!(telephony.line1_calls(), 1);
    // username and account
    assert_eq!(platform.preferences().calls(), 2);
}

#[test]
fn test_construction_leaves_preferences_untouched() {
    let platform = MockPlatform::builder()
        .username("enumerator-7")
        .preference("server_url", "https://forms.example.org")
        .build();
    let before = platform.preferences().values().clone();

    let first = PropertyManager::new(&platform);
    let second = PropertyManager::new(&platform);

    assert_eq!(platform.preferences().values(), &before);
    assert_eq!(first, second);
}

#[test]
fn test_manager_is_shareable_across_threads() {
    let platform = MockPlatform::builder().device_id("356938035643809").build();
    let manager = std::sync::Arc::new(PropertyManager::new(&platform));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let manager = std::sync::Arc::clone(&manager);
            std::thread::spawn(move || manager.get("deviceid").map(str::to_string))
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap().as_deref(),
            Some("356938035643809")
        );
    }
}
