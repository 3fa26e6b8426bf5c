//! Telephony Effects Trait Definitions
//!
//! Read-only view of the cellular subsystem. On devices without a modem or SIM
//! every accessor returns `None`.

/// Telephony subsystem accessors
pub trait TelephonyEffects: Send + Sync {
    /// Hardware device identifier (IMEI/MEID); may be a placeholder on some devices
    fn device_id(&self) -> Option<String>;

    /// Subscriber identifier (IMSI)
    fn subscriber_id(&self) -> Option<String>;

    /// SIM card serial number (ICCID)
    fn sim_serial_number(&self) -> Option<String>;

    /// Phone number of line 1
    fn line1_number(&self) -> Option<String>;
}
