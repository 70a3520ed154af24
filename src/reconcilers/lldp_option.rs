//! `lldp.enable` cluster option reconciler

use tracing::{info, instrument, warn};

use crate::api::{ClusterOption, OntapApi};
use crate::error::{Error, Result};
use crate::params::{LldpParams, LldpSetting};

/// Name of the cluster option
pub const LLDP_OPTION: &str = "lldp.enable";

/// Validate the module parameters
pub fn validate(params: &LldpParams) -> Result<LldpSetting> {
    super::validate_connection(&params.connection)?;
    Ok(params.lldp_enable)
}

/// True if any record holds something other than `desired`
fn differs(records: &[ClusterOption], desired: LldpSetting) -> bool {
    records.iter().any(|record| match record.value.parse::<LldpSetting>() {
        Ok(current) => current != desired,
        Err(_) => {
            warn!(value = %record.value, "Unrecognized lldp.enable value");
            true
        }
    })
}

/// Converges `lldp.enable` to a desired value
pub struct LldpOptionReconciler<'a, C: OntapApi + ?Sized> {
    client: &'a C,
}

impl<'a, C: OntapApi + ?Sized> LldpOptionReconciler<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Whether the option currently holds a value other than `desired`
    pub async fn needs_change(&self, desired: LldpSetting) -> Result<bool> {
        let records = self
            .client
            .get_options(LLDP_OPTION)
            .await
            .map_err(|e| Error::remote_api(format!("Error fetching options.{}", LLDP_OPTION), e))?;

        if records.is_empty() {
            return Err(Error::remote_api(
                format!("Error fetching options.{}", LLDP_OPTION),
                Error::Api {
                    status: 404,
                    message: format!("option {} not found", LLDP_OPTION),
                },
            ));
        }

        Ok(differs(&records, desired))
    }

    /// Set the option to `desired`
    pub async fn set(&self, desired: LldpSetting) -> Result<()> {
        self.client
            .modify_option(LLDP_OPTION, desired.as_str())
            .await
            .map_err(|e| {
                Error::remote_api(format!("Error setting options.{} {}", LLDP_OPTION, desired), e)
            })
    }

    /// Bring the option to `desired`; returns whether it changed (or would have)
    #[instrument(skip(self), fields(option = LLDP_OPTION))]
    pub async fn apply(&self, desired: LldpSetting, dry_run: bool) -> Result<bool> {
        if !self.needs_change(desired).await? {
            info!(value = %desired, "LLDP option already in desired state");
            return Ok(false);
        }

        if dry_run {
            info!(value = %desired, "Check mode, skipping LLDP option change");
            return Ok(true);
        }

        info!(value = %desired, "Setting LLDP option");
        self.set(desired).await?;
        Ok(true)
    }
}
