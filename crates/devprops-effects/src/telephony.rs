//! Configured telephony handler
//!
//! Hosts have no modem, so telephony values come from configuration. A
//! deployment may pin the IMEI of the phone a workstation stands in for.

use crate::config::TelephonyConfig;
use devprops_core::TelephonyEffects;

/// Telephony handler backed by configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfiguredTelephonyHandler {
    values: TelephonyConfig,
}

impl ConfiguredTelephonyHandler {
    /// Create a handler reporting the configured values
    pub fn new(values: TelephonyConfig) -> Self {
        Self { values }
    }
}

impl TelephonyEffects for ConfiguredTelephonyHandler {
    fn device_id(&self) -> Option<String> {
        self.values.device_id.clone()
    }

    fn subscriber_id(&self) -> Option<String> {
        self.values.subscriber_id.clone()
    }

    fn sim_serial_number(&self) -> Option<String> {
        self.values.sim_serial_number.clone()
    }

    fn line1_number(&self) -> Option<String> {
        self.values.line1_number.clone()
    }
}
