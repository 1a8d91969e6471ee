//! # CI Plugin Environment CLI
//!
//! This is the binary entry point for the `ci-plugin-env` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Turning errors into a logged message and the process exit code.
//!
//! The core logic lives in the library crate, so shell-based plugins and
//! Rust plugins share the same output file handling.

mod cli;
mod commands;

use clap::Parser;

use ci_plugin_env::plugin::handle_exit;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = cli.execute() {
        std::process::exit(handle_exit(&err));
    }
}
