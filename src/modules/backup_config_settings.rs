//! `backup_config_settings` module
//!
//! Sets or deletes the cluster configuration backup destination URL,
//! username and password.

use tracing::{info, instrument};

use super::ModuleResult;
use crate::api::OntapApi;
use crate::error::Result;
use crate::params::{
    BackupConfigParams, ConnectionParams, ModuleArgs, BACKUP_CONFIG_FIELDS, CONNECTION_FIELDS,
};
use crate::reconcilers::backup_destination::{self, BackupDestinationReconciler};

/// Name the automation engine knows the module by
pub const MODULE_NAME: &str = "backup_config_settings";

/// Parse the module arguments
pub fn parse_params(args: &ModuleArgs) -> Result<BackupConfigParams> {
    args.parse(&[CONNECTION_FIELDS, BACKUP_CONFIG_FIELDS])
}

/// Run the module, opening the cluster session with `connect`
#[instrument(skip_all, fields(module = MODULE_NAME, check_mode = args.check_mode()))]
pub async fn run<C, F>(args: &ModuleArgs, connect: F) -> Result<ModuleResult>
where
    C: OntapApi,
    F: FnOnce(&ConnectionParams) -> Result<C>,
{
    let params = parse_params(args)?;
    let desired = backup_destination::validate(&params)?;

    info!(
        hostname = %params.connection.hostname,
        state = %desired.state,
        "Reconciling configuration backup destination"
    );

    let client = connect(&params.connection)?;
    let changed = BackupDestinationReconciler::new(&client)
        .apply(&desired, args.check_mode())
        .await?;

    Ok(ModuleResult::changed(changed))
}
