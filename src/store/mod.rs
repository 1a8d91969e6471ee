//! # Key/Value Output Files
//!
//! This module implements the read-modify-write cycle behind step outputs,
//! secrets and error metadata. A [`KeyValueStore`] points at one file and
//! every operation on it is a complete transaction:
//!
//! 1. make sure the file exists, creating it empty if needed
//! 2. read and parse the whole file
//! 3. apply the mutation to the ordered entry list
//! 4. rewrite the whole file, truncating the previous content
//!
//! No state is kept between calls and there is no locking; callers must not
//! mutate the same path from several processes at once.
//!
//! ## Example
//!
//! ```
//! use ci_plugin_env::store::KeyValueStore;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = KeyValueStore::new(dir.path().join("out.env"));
//!
//! store.set("KEY1", "value1").unwrap();
//! store.update("KEY1", "value2").unwrap();
//! assert_eq!(store.get("KEY1").unwrap().as_deref(), Some("value2"));
//!
//! store.delete("KEY1").unwrap();
//! assert!(store.entries().unwrap().is_empty());
//! ```

mod format;

pub use format::{Entry, Format};

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use log::debug;

use crate::env::EnvSource;
use crate::error::{Error, Result};

/// A flat key/value file in `.env` or `.out` format.
#[derive(Clone, Debug)]
pub struct KeyValueStore {
    path: PathBuf,
    format: Format,
}

enum Mutation<'a> {
    Upsert { key: &'a str, value: &'a str },
    Remove { key: &'a str },
}

impl KeyValueStore {
    /// Create a store for `path`. The format is derived from the extension.
    ///
    /// Nothing touches the filesystem until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = Format::from_path(&path);
        Self { path, format }
    }

    /// Create a store whose path is the value of the environment variable
    /// `var`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `var` is unset or empty.
    pub fn from_env<E: EnvSource + ?Sized>(env: &E, var: &str) -> Result<Self> {
        env.require(var).map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Read every entry in file order.
    ///
    /// Keys that appear several times are collapsed onto their first
    /// position, keeping the last value.
    pub fn entries(&self) -> Result<Vec<Entry>> {
        self.ensure_exists()?;
        self.read_entries()
    }

    /// Look up the current value of `key`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries()?
            .into_iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value))
    }

    /// Insert `key`, or replace its value in place if it already exists.
    ///
    /// Trailing newlines are stripped from `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `key` could not be read back as a
    /// single entry (see [`Format::key_problem`]), or if the value still
    /// contains a line break and the file uses the `.out` format. The file
    /// is left untouched.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let value = value.trim_end_matches('\n');
        self.check_entry(key, value)?;
        debug!("setting {} in {}", key, self.path.display());
        self.apply(Mutation::Upsert { key, value })
    }

    /// Same as [`KeyValueStore::set`].
    pub fn update(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, value)
    }

    /// Remove `key` entirely. Removing a key that is not present succeeds.
    pub fn delete(&self, key: &str) -> Result<()> {
        debug!("deleting {} from {}", key, self.path.display());
        self.apply(Mutation::Remove { key })
    }

    fn check_entry(&self, key: &str, value: &str) -> Result<()> {
        if let Some(problem) = self.format.key_problem(key) {
            return Err(Error::Validation {
                key: key.to_string(),
                message: format!("invalid key {:?}: {}", key, problem),
            });
        }
        if !self.format.allows_multiline() && value.contains(['\n', '\r']) {
            return Err(Error::Validation {
                key: key.to_string(),
                message: format!(
                    "multiline values are not allowed for key {} in .out file",
                    key
                ),
            });
        }
        Ok(())
    }

    fn apply(&self, mutation: Mutation<'_>) -> Result<()> {
        self.ensure_exists()?;
        let mut entries = self.read_entries()?;

        match mutation {
            Mutation::Upsert { key, value } => upsert(&mut entries, key, value),
            Mutation::Remove { key } => entries.retain(|entry| entry.key != key),
        }

        self.write_entries(&entries)
    }

    fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        debug!("creating {}", self.path.display());
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map(drop)
            .map_err(|e| Error::io_path("create", &self.path, e))
    }

    fn read_entries(&self) -> Result<Vec<Entry>> {
        let bytes = fs::read(&self.path).map_err(|e| Error::io_path("read", &self.path, e))?;
        let content = String::from_utf8(bytes).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            Error::Parse {
                path: self.path.clone(),
                line: valid.iter().filter(|b| **b == b'\n').count() + 1,
                message: "file is not valid UTF-8".to_string(),
            }
        })?;

        let mut entries = Vec::new();
        for entry in self.format.parse(&content, &self.path)? {
            upsert(&mut entries, &entry.key, &entry.value);
        }
        Ok(entries)
    }

    fn write_entries(&self, entries: &[Entry]) -> Result<()> {
        fs::write(&self.path, self.format.serialize(entries))
            .map_err(|e| Error::io_path("write", &self.path, e))
    }
}

fn upsert(entries: &mut Vec<Entry>, key: &str, value: &str) {
    match entries.iter_mut().find(|entry| entry.key == key) {
        Some(entry) => entry.value = value.to_string(),
        None => entries.push(Entry::new(key, value)),
    }
}
