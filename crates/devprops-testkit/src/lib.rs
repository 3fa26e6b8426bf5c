//! devprops Testing Infrastructure
//!
//! Deterministic mock handlers for every platform effect, a composed
//! `MockPlatform`, and proptest strategies for identity values.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
//!
//! # Usage
//!
//! ```rust,no_run
//! use devprops_testkit::MockPlatform;
//!
//! let platform = MockPlatform::builder()
//!     .device_id("356938035643809")
//!     .username("enumerator-7")
//!     .build();
//! assert_eq!(platform.telephony().device_id_calls(), 0);
//! ```

pub mod mocks;
pub mod platform;
pub mod strategies;

pub use mocks::{
    MockPreferencesHandler, MockSecureSettingsHandler, MockTelephonyHandler, MockWifiHandler,
};
pub use platform::{MockPlatform, MockPlatformBuilder};

/// Install a tracing subscriber that writes through the test harness
///
/// Safe to call from every test; only the first call installs.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
