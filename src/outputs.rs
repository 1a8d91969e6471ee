//! Step outputs, secrets and error metadata.
//!
//! The orchestrator hands each step the paths of the files it may write to
//! through environment variables. [`Outputs`] resolves those variables on
//! every call and forwards to a [`KeyValueStore`].
//!
//! ```no_run
//! use ci_plugin_env::outputs;
//!
//! outputs::set_output("IMAGE_DIGEST", "sha256:abc")?;
//! outputs::set_secret("TOKEN", "hunter2")?;
//! # Ok::<(), ci_plugin_env::error::Error>(())
//! ```

use crate::env::{EnvSource, ProcessEnv};
use crate::error::Result;
use crate::store::KeyValueStore;

/// Key under which the error message is stored.
pub const ERROR_MESSAGE_KEY: &str = "ERROR_MESSAGE";

/// Key under which the error code is stored.
pub const ERROR_CODE_KEY: &str = "ERROR_CODE";

/// Key under which the error category is stored.
pub const ERROR_CATEGORY_KEY: &str = "ERROR_CATEGORY";

/// Variable naming the error metadata file.
pub const METADATA_FILE_VAR: &str = "ERROR_METADATA_FILE";

/// Variable naming the step output file.
pub const OUTPUT_FILE_VAR: &str = "DRONE_OUTPUT";

/// Variable naming the secret output file.
pub const SECRET_FILE_VAR: &str = "HARNESS_OUTPUT_SECRET_FILE";

/// Output files of the current step, resolved through an [`EnvSource`].
#[derive(Debug, Clone, Default)]
pub struct Outputs<E = ProcessEnv> {
    env: E,
}

impl<E: EnvSource> Outputs<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    fn store(&self, var: &str) -> Result<KeyValueStore> {
        KeyValueStore::from_env(&self.env, var)
    }

    /// The store behind `HARNESS_OUTPUT_SECRET_FILE`.
    pub fn secrets(&self) -> Result<KeyValueStore> {
        self.store(SECRET_FILE_VAR)
    }

    /// The store behind `DRONE_OUTPUT`.
    pub fn outputs(&self) -> Result<KeyValueStore> {
        self.store(OUTPUT_FILE_VAR)
    }

    /// The store behind `ERROR_METADATA_FILE`.
    pub fn metadata(&self) -> Result<KeyValueStore> {
        self.store(METADATA_FILE_VAR)
    }

    pub fn set_secret(&self, name: &str, value: &str) -> Result<()> {
        self.secrets()?.set(name, value)
    }

    pub fn update_secret(&self, name: &str, value: &str) -> Result<()> {
        self.secrets()?.update(name, value)
    }

    pub fn delete_secret(&self, name: &str) -> Result<()> {
        self.secrets()?.delete(name)
    }

    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        self.outputs()?.set(name, value)
    }

    pub fn update_output(&self, name: &str, value: &str) -> Result<()> {
        self.outputs()?.update(name, value)
    }

    pub fn delete_output(&self, name: &str) -> Result<()> {
        self.outputs()?.delete(name)
    }

    /// Record why the step failed.
    ///
    /// Writes the message, code and category in that order, each as its own
    /// transaction. The first failure is returned as-is and the remaining
    /// keys are not written; keys already written stay in the file.
    pub fn set_error_metadata(&self, message: &str, code: &str, category: &str) -> Result<()> {
        let store = self.metadata()?;
        store.set(ERROR_MESSAGE_KEY, message)?;
        store.set(ERROR_CODE_KEY, code)?;
        store.set(ERROR_CATEGORY_KEY, category)?;
        Ok(())
    }
}

/// Add a secret to `HARNESS_OUTPUT_SECRET_FILE`.
pub fn set_secret(name: &str, value: &str) -> Result<()> {
    Outputs::new(ProcessEnv).set_secret(name, value)
}

/// Overwrite an existing secret.
pub fn update_secret(name: &str, value: &str) -> Result<()> {
    Outputs::new(ProcessEnv).update_secret(name, value)
}

/// Remove a secret from the file entirely.
pub fn delete_secret(name: &str) -> Result<()> {
    Outputs::new(ProcessEnv).delete_secret(name)
}

/// Add an output to `DRONE_OUTPUT`.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    Outputs::new(ProcessEnv).set_output(name, value)
}

/// Overwrite an existing output.
pub fn update_output(name: &str, value: &str) -> Result<()> {
    Outputs::new(ProcessEnv).update_output(name, value)
}

/// Remove an output from the file entirely.
pub fn delete_output(name: &str) -> Result<()> {
    Outputs::new(ProcessEnv).delete_output(name)
}

/// Write the error message, code and category to `ERROR_METADATA_FILE`.
pub fn set_error_metadata(message: &str, code: &str, category: &str) -> Result<()> {
    Outputs::new(ProcessEnv).set_error_metadata(message, code, category)
}
