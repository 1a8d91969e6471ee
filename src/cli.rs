//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use ci_plugin_env::logging;

use crate::commands;

/// Read CI context and write step outputs from shell-based plugins
#[derive(Parser, Debug)]
#[command(name = "ci-plugin-env")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        env = logging::LOG_LEVEL_ENV,
        default_value = "info"
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage step outputs in the file named by DRONE_OUTPUT
    Output(commands::output::OutputArgs),

    /// Manage secret outputs in the file named by HARNESS_OUTPUT_SECRET_FILE
    Secret(commands::secret::SecretArgs),

    /// Record why the step failed in the file named by ERROR_METADATA_FILE
    ErrorMetadata(commands::metadata::MetadataArgs),

    /// Print the pipeline context passed by the orchestrator as JSON
    Context(commands::context::ContextArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        logging::init(&self.log_level);

        match self.command {
            Commands::Output(args) => commands::output::execute(args),
            Commands::Secret(args) => commands::secret::execute(args),
            Commands::ErrorMetadata(args) => commands::metadata::execute(args),
            Commands::Context(args) => commands::context::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
