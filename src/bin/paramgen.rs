//! Module argument schema generator
//!
//! Prints the JSON schema of each module's arguments as a YAML document stream.
//!
//! Usage: cargo run --bin paramgen > docs/module-params.yaml

use ontap_config_modules::params::generate_param_schemas;

fn main() -> anyhow::Result<()> {
    for schema in generate_param_schemas()? {
        println!("---");
        print!("{}", schema);
    }
    Ok(())
}
