//! Environment variable providers.
//!
//! Every lookup the library makes against the process environment goes
//! through [`EnvSource`], so tests can hand in a fixed mapping instead of
//! mutating the real environment.

use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};

/// Maps an environment variable name to its value, if any.
pub trait EnvSource {
    /// Returns the value of `name`, or `None` when it is not set.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the value of `name`, treating an empty string as unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the variable when it is unset or
    /// empty.
    fn require(&self, name: &str) -> Result<String> {
        match self.var(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(Error::Config {
                var: name.to_string(),
            }),
        }
    }
}

/// Reads from the environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
