//! Configuration backup destination reconciler
//!
//! Handles the business logic for the `backup_config_settings` module:
//! - Parameter validation
//! - Reading the current destination
//! - Deciding whether it has to change
//! - Setting or clearing URL, username and password

use reqwest::Url;
use secrecy::SecretString;
use tracing::{info, instrument};

use crate::api::{BackupSettings, BackupSettingsChange, OntapApi};
use crate::error::{Error, Result};
use crate::params::{BackupConfigParams, State};

/// Protocols ONTAP accepts for a configuration backup destination
const SUPPORTED_SCHEMES: &[&str] = &["ftp", "http", "https"];

/// Validated desired state of the backup destination
#[derive(Debug)]
pub struct DesiredBackupDestination {
    pub state: State,
    pub url: String,
    pub username: String,
    pub password: SecretString,
}

/// Backup destination currently configured on the cluster
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservedBackupDestination {
    pub url: String,
    pub username: String,
}

impl ObservedBackupDestination {
    /// A destination exists when either field is set
    fn from_settings(settings: BackupSettings) -> Option<Self> {
        let url = settings.url.unwrap_or_default();
        let username = settings.username.unwrap_or_default();

        if url.is_empty() && username.is_empty() {
            None
        } else {
            Some(Self { url, username })
        }
    }
}

/// Validate the module parameters
pub fn validate(params: &BackupConfigParams) -> Result<DesiredBackupDestination> {
    super::validate_connection(&params.connection)?;

    if params.state == State::Present {
        validate_url(&params.destination_url)?;
    }

    Ok(DesiredBackupDestination {
        state: params.state,
        url: params.destination_url.clone(),
        username: params.destination_username.clone(),
        password: SecretString::from(params.destination_pass.clone()),
    })
}

/// Validate the destination URL: it must parse, name a host and use a supported protocol
fn validate_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(Error::validation("destination_url must not be empty"));
    }

    let parsed = Url::parse(url)
        .map_err(|e| Error::validation(format!("Invalid destination_url '{}': {}", url, e)))?;

    if !SUPPORTED_SCHEMES.contains(&parsed.scheme()) {
        return Err(Error::validation(format!(
            "Invalid destination_url protocol '{}': must be one of: ftp, http, https",
            parsed.scheme()
        )));
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(Error::validation(format!(
            "Invalid destination_url '{}': missing host",
            url
        )));
    }

    Ok(())
}

/// Whether the cluster has to be changed to reach `desired`
pub fn decide(desired: &DesiredBackupDestination, observed: Option<&ObservedBackupDestination>) -> bool {
    match (desired.state, observed) {
        (State::Absent, Some(_)) => true,
        (State::Absent, None) => false,
        (State::Present, None) => true,
        (State::Present, Some(observed)) => {
            observed.url != desired.url || observed.username != desired.username
        }
    }
}

/// Converges the configuration backup destination
pub struct BackupDestinationReconciler<'a, C: OntapApi + ?Sized> {
    client: &'a C,
}

impl<'a, C: OntapApi + ?Sized> BackupDestinationReconciler<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Read the destination currently configured on the cluster
    pub async fn fetch(&self) -> Result<Option<ObservedBackupDestination>> {
        let settings = self
            .client
            .get_backup_settings()
            .await
            .map_err(|e| Error::remote_api("Error fetching configuration backup settings", e))?;

        Ok(ObservedBackupDestination::from_settings(settings))
    }

    /// Write URL and username, then the password, as two separate calls
    pub async fn set(&self, desired: &DesiredBackupDestination) -> Result<()> {
        self.client
            .modify_backup_settings(&BackupSettingsChange::url_and_username(
                desired.url.as_str(),
                desired.username.as_str(),
            ))
            .await
            .map_err(|e| {
                Error::remote_api(
                    format!("Error setting configuration settings {}", desired.url),
                    e,
                )
            })?;

        self.client
            .set_backup_password(&desired.password)
            .await
            .map_err(|e| {
                Error::remote_api(
                    format!(
                        "Error setting configuration password for username {}",
                        desired.username
                    ),
                    e,
                )
            })?;

        Ok(())
    }

    /// Clear URL and username, as two separate calls
    pub async fn delete(&self, desired: &DesiredBackupDestination) -> Result<()> {
        self.client
            .modify_backup_settings(&BackupSettingsChange::url(""))
            .await
            .map_err(|e| {
                Error::remote_api(
                    format!("Error deleting config destination url settings {}", desired.url),
                    e,
                )
            })?;

        self.client
            .modify_backup_settings(&BackupSettingsChange::username(""))
            .await
            .map_err(|e| {
                Error::remote_api(
                    format!("Error deleting config username settings {}", desired.url),
                    e,
                )
            })?;

        Ok(())
    }

    /// Bring the cluster to `desired`; returns whether anything changed (or would have)
    #[instrument(skip(self, desired), fields(state = %desired.state, url = %desired.url))]
    pub async fn apply(&self, desired: &DesiredBackupDestination, dry_run: bool) -> Result<bool> {
        let observed = self.fetch().await?;
        let changed = decide(desired, observed.as_ref());

        if !changed {
            info!("Configuration backup destination already in desired state");
            return Ok(false);
        }

        if dry_run {
            info!("Check mode, skipping configuration backup changes");
            return Ok(true);
        }

        match desired.state {
            State::Present => {
                info!(username = %desired.username, "Setting configuration backup destination");
                self.set(desired).await?;
            }
            State::Absent => {
                info!("Clearing configuration backup destination");
                self.delete(desired).await?;
            }
        }

        Ok(true)
    }
}
