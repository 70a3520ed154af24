//! Arguments of the `backup_config_settings` module

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::connection::ConnectionParams;

/// Parameter names specific to `backup_config_settings`
pub const BACKUP_CONFIG_FIELDS: &[&str] = &[
    "state",
    "destination_url",
    "destination_username",
    "destination_pass",
];

/// Whether the backup destination should be configured or cleared
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Present,
    Absent,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Present => f.write_str("present"),
            State::Absent => f.write_str("absent"),
        }
    }
}

/// Set or delete the configuration backup destination URL, username and password
#[derive(Clone, Deserialize, JsonSchema)]
pub struct BackupConfigParams {
    /// Cluster connection
    #[serde(flatten)]
    pub connection: ConnectionParams,

    /// Whether the specified settings should exist or not
    #[serde(default)]
    pub state: State,

    /// Backup location URL (only ftp, http and https are supported)
    pub destination_url: String,

    /// Username used to access the destination URL
    pub destination_username: String,

    /// Password used to access the destination URL
    pub destination_pass: String,
}

impl fmt::Debug for BackupConfigParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackupConfigParams")
            .field("connection", &self.connection)
            .field("state", &self.state)
            .field("destination_url", &self.destination_url)
            .field("destination_username", &self.destination_username)
            .field("destination_pass", &"[REDACTED]")
            .finish()
    }
}
