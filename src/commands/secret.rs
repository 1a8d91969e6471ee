//! # Secret Command Implementation
//!
//! Writes secret outputs to the file named by `HARNESS_OUTPUT_SECRET_FILE`.
//! The orchestrator masks these values in logs of later steps.

use anyhow::Result;
use clap::Args;
use log::info;

use ci_plugin_env::env::ProcessEnv;
use ci_plugin_env::outputs::Outputs;

use super::KeyValueAction;

/// Manage secret outputs
#[derive(Args, Debug)]
pub struct SecretArgs {
    #[command(subcommand)]
    pub action: KeyValueAction,
}

/// Execute the `secret` command.
///
/// Secret values are never echoed, only the key that changed.
pub fn execute(args: SecretArgs) -> Result<()> {
    let outputs = Outputs::new(ProcessEnv);
    match args.action {
        KeyValueAction::Set { key, value } => {
            outputs.set_secret(&key, &value)?;
            info!("secret {} set", key);
        }
        KeyValueAction::Update { key, value } => {
            outputs.update_secret(&key, &value)?;
            info!("secret {} updated", key);
        }
        KeyValueAction::Delete { key } => {
            outputs.delete_secret(&key)?;
            info!("secret {} deleted", key);
        }
    }
    Ok(())
}
