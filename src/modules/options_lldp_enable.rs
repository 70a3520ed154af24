//! `options_lldp_enable` module

use tracing::{info, instrument};

use super::ModuleResult;
use crate::api::OntapApi;
use crate::error::Result;
use crate::params::{ConnectionParams, LldpParams, ModuleArgs, CONNECTION_FIELDS, LLDP_FIELDS};
use crate::reconcilers::lldp_option::{self, LldpOptionReconciler};

pub const MODULE_NAME: &str = "options_lldp_enable";

pub fn parse_params(args: &ModuleArgs) -> Result<LldpParams> {
    args.parse(&[CONNECTION_FIELDS, LLDP_FIELDS])
}

/// Run the module, opening the cluster session with `connect`
#[instrument(skip_all, fields(module = MODULE_NAME, check_mode = args.check_mode()))]
pub async fn run<C, F>(args: &ModuleArgs, connect: F) -> Result<ModuleResult>
where
    C: OntapApi,
    F: FnOnce(&ConnectionParams) -> Result<C>,
{
    let params = parse_params(args)?;
    let desired = lldp_option::validate(&params)?;

    info!(hostname = %params.connection.hostname, lldp_enable = %desired, "Reconciling LLDP option");

    let client = connect(&params.connection)?;
    let changed = LldpOptionReconciler::new(&client)
        .apply(desired, args.check_mode())
        .await?;

    Ok(ModuleResult::changed(changed))
}
