//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `ci-plugin-env` command-line tool. Each subcommand is defined in its own
//! file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments, derived
//!   using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `ci_plugin_env` library.

pub mod completions;
pub mod context;
pub mod metadata;
pub mod output;
pub mod secret;

use clap::Subcommand;

/// Mutations shared by the `output` and `secret` commands.
#[derive(Subcommand, Debug)]
pub enum KeyValueAction {
    /// Add a key, or replace its value if it exists
    Set {
        /// Key to write
        key: String,
        /// Value to store; trailing newlines are dropped
        value: String,
    },

    /// Replace the value of a key, adding it if missing
    Update {
        /// Key to write
        key: String,
        /// Value to store; trailing newlines are dropped
        value: String,
    },

    /// Remove a key; missing keys are ignored
    Delete {
        /// Key to remove
        key: String,
    },
}
