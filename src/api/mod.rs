//! ONTAP management API client
//!
//! The reconcilers talk to the cluster through [`OntapApi`], which exposes only
//! the calls they need. [`RestClient`] implements it over the ONTAP REST API;
//! tests substitute a double.

mod rest;

pub use rest::*;

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration backup destination as reported by the cluster.
/// The password is write-only and never returned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BackupSettings {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Fields to change on the configuration backup destination.
/// `None` leaves the field untouched; an empty string clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BackupSettingsChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl BackupSettingsChange {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            username: None,
        }
    }

    pub fn username(username: impl Into<String>) -> Self {
        Self {
            url: None,
            username: Some(username.into()),
        }
    }

    pub fn url_and_username(url: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            username: Some(username.into()),
        }
    }
}

/// One record of a cluster option
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClusterOption {
    #[serde(rename = "option_name", default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Remote operations used by the modules
#[async_trait]
pub trait OntapApi: Send + Sync {
    /// get-backup-settings
    async fn get_backup_settings(&self) -> Result<BackupSettings>;

    /// modify-backup-settings
    async fn modify_backup_settings(&self, change: &BackupSettingsChange) -> Result<()>;

    /// set-backup-password
    async fn set_backup_password(&self, password: &SecretString) -> Result<()>;

    /// get-options-matching: every record of the named option
    async fn get_options(&self, name: &str) -> Result<Vec<ClusterOption>>;

    /// modify-option
    async fn modify_option(&self, name: &str, value: &str) -> Result<()>;
}
