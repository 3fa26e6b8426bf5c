//! devprops Manager - Identity Property Resolution
//!
//! Resolves the six identity properties a forms engine substitutes into form
//! templates (device ID, subscriber ID, SIM serial, phone number, username,
//! email) and serves them as a case-insensitive key-value lookup.
//!
//! # Architecture
//!
//! This is a **Layer 5 (Feature)** crate that:
//! - Depends on `devprops-core` (Layer 1) for effect traits and vocabulary
//! - Is parameterized by `PlatformEffects`, so host and mock handlers plug in alike
//!
//! # Example
//!
//! ```ignore
//! use devprops_manager::PropertyManager;
//! use devprops_effects::HostPlatform;
//!
//! let platform = HostPlatform::from_config(&config)?;
//! let properties = PropertyManager::new(&platform);
//!
//! if let Some(device_id) = properties.get("DeviceID") {
//!     println!("device: {device_id}");
//! }
//! ```

pub mod manager;
pub mod resolution;

pub use manager::PropertyManager;
pub use resolution::{
    is_placeholder_device_id, resolve_device_id, DeviceIdSource, ResolvedDeviceId,
    INVALID_DEVICE_ID_SENTINEL,
};
