//! # Context Command Implementation
//!
//! Prints the pipeline context the orchestrator passed to the step. Every
//! orchestrator flag is accepted on the command line and falls back to its
//! environment variables, so the output shows exactly what a plugin built
//! on this library would see.

use anyhow::Result;
use clap::Args;

use ci_plugin_env::context::Pipeline;

/// Print the pipeline context as JSON
#[derive(Args, Debug)]
pub struct ContextArgs {
    /// Print the JSON on a single line
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub pipeline: Pipeline,
}

/// Execute the `context` command.
pub fn execute(args: ContextArgs) -> Result<()> {
    let json = if args.compact {
        serde_json::to_string(&args.pipeline)?
    } else {
        serde_json::to_string_pretty(&args.pipeline)?
    };
    println!("{}", json);
    Ok(())
}
