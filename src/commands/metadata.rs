//! # Error Metadata Command Implementation

use anyhow::{Context, Result};
use clap::Args;

use ci_plugin_env::env::ProcessEnv;
use ci_plugin_env::outputs::Outputs;

/// Record the error message, code and category of a failed step
#[derive(Args, Debug)]
pub struct MetadataArgs {
    /// Human readable error message
    pub message: String,

    /// Machine readable error code
    pub code: String,

    /// Error category used to group failures
    pub category: String,
}

/// Execute the `error-metadata` command.
pub fn execute(args: MetadataArgs) -> Result<()> {
    Outputs::new(ProcessEnv)
        .set_error_metadata(&args.message, &args.code, &args.category)
        .context("failed to record error metadata")
}
