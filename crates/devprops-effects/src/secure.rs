//! Machine-id secure settings handler
//!
//! The OS machine identifier plays the role of the per-installation secure
//! identifier. Readable by normal user processes.

use crate::config::SecureConfig;
use devprops_core::SecureSettingsEffects;
use std::path::PathBuf;

/// Secure settings handler reading a machine identifier file
#[derive(Debug, Clone)]
pub struct MachineIdSecureSettingsHandler {
    path: PathBuf,
    scheme_name: String,
}

impl MachineIdSecureSettingsHandler {
    /// Create a handler from configuration
    pub fn new(config: &SecureConfig) -> Self {
        Self {
            path: config.machine_id_path.clone(),
            scheme_name: config.scheme_name.clone(),
        }
    }
}

impl Default for MachineIdSecureSettingsHandler {
    fn default() -> Self {
        Self::new(&SecureConfig::default())
    }
}

impl SecureSettingsEffects for MachineIdSecureSettingsHandler {
    fn secure_id(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let id = content.trim();
                (!id.is_empty()).then(|| id.to_string())
            }
            Err(e) => {
                tracing::debug!(
                    path = %self.path.display(),
                    error = %e,
                    "Machine identifier unreadable"
                );
                None
            }
        }
    }

    fn scheme_name(&self) -> &str {
        &self.scheme_name
    }
}
