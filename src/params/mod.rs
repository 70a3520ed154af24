//! Module parameter types
//!
//! Raw arguments as the automation engine supplies them. Enumerated string
//! parameters are parsed into enums here; semantic checks happen in the
//! reconcilers' `validate` functions.

mod args;
mod backup_config;
mod connection;
mod lldp;

pub use args::*;
pub use backup_config::*;
pub use connection::*;
pub use lldp::*;

use schemars::schema_for;

use crate::error::Result;

/// Render the argument schema of every module as YAML documents
pub fn generate_param_schemas() -> Result<Vec<String>> {
    Ok(vec![
        serde_yaml::to_string(&schema_for!(BackupConfigParams))?,
        serde_yaml::to_string(&schema_for!(LldpParams))?,
    ])
}
