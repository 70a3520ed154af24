//! ONTAP configuration modules
//!
//! Entry point invoked by the automation engine. Loads the module argument
//! file, runs the requested module and prints its result as JSON on stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ontap_config_modules::{
    api::RestClient,
    modules::{backup_config_settings, options_lldp_enable, ModuleResult},
    params::load_args,
};

#[derive(Debug, Parser)]
#[command(name = "ontap-config-modules", version, about)]
struct Cli {
    /// Report what would change without modifying the cluster
    #[arg(long, global = true, env = "ONTAP_CHECK_MODE")]
    check: bool,

    #[command(subcommand)]
    module: Module,
}

#[derive(Debug, Subcommand)]
enum Module {
    /// Set or delete the configuration backup destination
    BackupConfigSettings {
        /// JSON (or YAML) file with the module arguments
        args_file: PathBuf,
    },
    /// Turn options.lldp.enable on or off
    OptionsLldpEnable {
        /// JSON (or YAML) file with the module arguments
        args_file: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let result = run(cli).await;

    println!("{}", serde_json::to_string(&result)?);

    if result.is_failed() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

async fn run(cli: Cli) -> ModuleResult {
    let (name, args_file) = match &cli.module {
        Module::BackupConfigSettings { args_file } => (backup_config_settings::MODULE_NAME, args_file),
        Module::OptionsLldpEnable { args_file } => (options_lldp_enable::MODULE_NAME, args_file),
    };

    info!(module = name, args_file = %args_file.display(), "Starting module");

    let outcome = match load_args(args_file) {
        Ok(args) => {
            let args = args.with_check_mode(cli.check);
            match cli.module {
                Module::BackupConfigSettings { .. } => {
                    backup_config_settings::run(&args, RestClient::new).await
                }
                Module::OptionsLldpEnable { .. } => {
                    options_lldp_enable::run(&args, RestClient::new).await
                }
            }
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok(result) => {
            info!(module = name, changed = result.changed, "Module finished");
            result
        }
        Err(e) => {
            error!(module = name, error = %e, "Module failed");
            ModuleResult::failure(&e)
        }
    }
}

/// Initialize tracing subscriber; stdout is reserved for the module result
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
        .init();
}
