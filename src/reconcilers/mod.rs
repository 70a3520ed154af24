//! Reconcilers for the ONTAP configuration modules
//!
//! This module contains the business logic for each module.
//! Reconcilers are responsible for:
//! - Validating module parameters
//! - Reading the cluster's current configuration
//! - Applying the minimal change, unless running in check mode

pub mod backup_destination;
pub mod lldp_option;

pub use backup_destination::BackupDestinationReconciler;
pub use lldp_option::LldpOptionReconciler;

use crate::error::{Error, Result};
use crate::params::ConnectionParams;

/// Validate the connection parameters shared by all modules
pub fn validate_connection(connection: &ConnectionParams) -> Result<()> {
    if connection.hostname.trim().is_empty() {
        return Err(Error::validation("hostname must not be empty"));
    }

    if connection.username.trim().is_empty() {
        return Err(Error::validation("username must not be empty"));
    }

    if connection.hostname.contains("://") {
        return Err(Error::validation(format!(
            "hostname '{}' must not include a protocol",
            connection.hostname
        )));
    }

    Ok(())
}
