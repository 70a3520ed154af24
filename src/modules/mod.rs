//! Module runners
//!
//! Each runner takes the raw module arguments, validates them before any
//! remote call, opens a client through the supplied connector and drives
//! the matching reconciler.

pub mod backup_config_settings;
pub mod options_lldp_enable;

use serde::Serialize;

use crate::error::Error;

/// Outcome reported back to the automation engine
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModuleResult {
    pub changed: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl ModuleResult {
    /// Successful run
    pub fn changed(changed: bool) -> Self {
        Self {
            changed,
            failed: false,
            msg: None,
        }
    }

    /// Failed run; nothing is reported as changed
    pub fn failure(error: &Error) -> Self {
        Self {
            changed: false,
            failed: true,
            msg: Some(error.to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }
}
