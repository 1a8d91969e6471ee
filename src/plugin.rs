//! The contract a plugin follows and the way its failures end the process.
//!
//! A plugin validates its configuration first and then executes. Either
//! step may fail with an [`ExitError`] to pick the exit code and attach
//! structured fields to the logged message; any other error exits with 1.
//!
//! ```
//! use ci_plugin_env::plugin::{handle_exit, run_plugin, ExitError, Plugin};
//!
//! struct Publish {
//!     repo: String,
//! }
//!
//! impl Plugin for Publish {
//!     fn validate(&mut self) -> anyhow::Result<()> {
//!         if self.repo.is_empty() {
//!             return Err(ExitError::new("repo is required").with_code(2).into());
//!         }
//!         Ok(())
//!     }
//!
//!     fn execute(&mut self) -> anyhow::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let err = run_plugin(&mut Publish { repo: String::new() }).unwrap_err();
//! assert_eq!(handle_exit(&err), 2);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use anyhow::Result;
use log::error;

/// A CI plugin.
pub trait Plugin {
    /// Check the inputs before anything runs. May store derived values for
    /// [`Plugin::execute`] to use.
    fn validate(&mut self) -> Result<()>;

    /// Run the plugin. Only called after a successful [`Plugin::validate`].
    fn execute(&mut self) -> Result<()>;
}

/// Validate the plugin, then execute it.
pub fn run_plugin<P: Plugin + ?Sized>(plugin: &mut P) -> Result<()> {
    plugin.validate()?;
    plugin.execute()
}

/// An error that carries the process exit code and extra log fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitError {
    message: String,
    code: i32,
    fields: BTreeMap<String, String>,
}

impl ExitError {
    /// A new error exiting with code 1.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 1,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    /// Attach fields that are logged alongside the message.
    pub fn with_fields<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// The message followed by its fields as `key=value` pairs.
    fn log_line(&self) -> String {
        let mut line = self.message.clone();
        for (key, value) in &self.fields {
            line.push_str(&format!(" {}={:?}", key, value));
        }
        line
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExitError {}

/// Log `err` and return the exit code the process should end with.
///
/// An [`ExitError`] anywhere in the chain decides the code; an empty
/// message is not logged. Any other error is logged with its causes and
/// gives 1.
pub fn handle_exit(err: &anyhow::Error) -> i32 {
    match err.chain().find_map(|e| e.downcast_ref::<ExitError>()) {
        Some(exit) => {
            if !exit.message.is_empty() {
                error!("{}", exit.log_line());
            }
            exit.code
        }
        None => {
            error!("{:#}", err);
            1
        }
    }
}
