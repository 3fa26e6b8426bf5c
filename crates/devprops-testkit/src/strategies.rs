//! Property test strategies for identity values

use proptest::prelude::*;

// Re-export proptest for convenience
pub use proptest;

/// Strategy for a real-looking 15-digit IMEI
///
/// The leading digit is non-zero, so the all-zero placeholder never appears.
pub fn arb_imei() -> impl Strategy<Value = String> {
    "[1-9][0-9]{14}"
}

/// Strategy for a placeholder telephony identifier
pub fn arb_placeholder_device_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("000000000000000".to_string()),
        "[0-9]{0,10}\\*{1,5}",
        "[0-9]{0,3}0{15}",
    ]
}

/// Strategy for a colon-separated MAC address
pub fn arb_mac_address() -> impl Strategy<Value = String> {
    proptest::array::uniform6(any::<u8>()).prop_map(|octets| {
        octets
            .iter()
            .map(|octet| format!("{octet:02x}"))
            .collect::<Vec<_>>()
            .join(":")
    })
}

/// Strategy for an opaque source value (serials, numbers, names, emails)
pub fn arb_source_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9@.+_-]{1,24}"
}

/// Strategy for an optional source value
pub fn arb_optional_value() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(arb_source_value())
}

/// Strategy that randomizes the ASCII case of `name`
pub fn arb_case_variant(name: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
        name.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}
