//! # Output Command Implementation
//!
//! Writes step outputs to the file named by `DRONE_OUTPUT`. Later steps in
//! the stage can read the values back by key.

use anyhow::Result;
use clap::Args;

use ci_plugin_env::env::ProcessEnv;
use ci_plugin_env::outputs::Outputs;

use super::KeyValueAction;

/// Manage step outputs
#[derive(Args, Debug)]
pub struct OutputArgs {
    #[command(subcommand)]
    pub action: KeyValueAction,
}

/// Execute the `output` command.
pub fn execute(args: OutputArgs) -> Result<()> {
    let outputs = Outputs::new(ProcessEnv);
    match args.action {
        KeyValueAction::Set { key, value } => outputs.set_output(&key, &value)?,
        KeyValueAction::Update { key, value } => outputs.update_output(&key, &value)?,
        KeyValueAction::Delete { key } => outputs.delete_output(&key)?,
    }
    Ok(())
}
