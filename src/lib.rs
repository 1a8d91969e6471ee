//! # CI Plugin Environment Library
//!
//! This library is the glue between a CI orchestrator and the plugins it
//! runs. It reads what the orchestrator tells a plugin through environment
//! variables and flags, and writes back what the plugin wants to hand on to
//! later steps: outputs, secrets, error metadata and docker artifacts.
//!
//! ## Quick Example
//!
//! ```
//! use ci_plugin_env::store::KeyValueStore;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = KeyValueStore::new(dir.path().join("outputs.env"));
//!
//! store.set("IMAGE", "octocat/app:1.0.0").unwrap();
//! store.set("DIGEST", "sha256:abc").unwrap();
//! store.update("IMAGE", "octocat/app:1.0.1").unwrap();
//! store.delete("DIGEST").unwrap();
//!
//! let content = std::fs::read_to_string(store.path()).unwrap();
//! assert_eq!(content, "IMAGE=octocat/app:1.0.1\n");
//! ```
//!
//! ## Core Concepts
//!
//! - **Output files (`store`)**: [`store::KeyValueStore`] rewrites a flat
//!   key/value file in full on every call. `.env` files hold `KEY=VALUE`
//!   lines; everything else holds `KEY VALUE` lines and rejects multiline
//!   values.
//! - **Named outputs (`outputs`)**: the secret, output and error metadata
//!   files, each located through an environment variable.
//! - **Environment (`env`)**: [`env::EnvSource`] abstracts variable lookup
//!   so tests can pass a fixed map instead of touching the process.
//! - **Context (`context`, `flags`)**: typed build, repository, commit,
//!   stage, step, version and system information, declared as flag
//!   descriptors that work with both plain environment lookups and `clap`.
//! - **Plugins (`plugin`, `logging`, `artifact`)**: the validate/execute
//!   contract, exit code handling, log level setup and the docker artifact
//!   file.

pub mod artifact;
pub mod context;
pub mod env;
pub mod error;
pub mod flags;
pub mod logging;
pub mod outputs;
pub mod plugin;
pub mod store;

#[cfg(test)]
mod store_proptest;
