//! # CI Context
//!
//! Typed views of the information the orchestrator passes to a plugin:
//! build, repository, commit, stage, step, semantic and calendar version,
//! and the CI system itself.
//!
//! Every section declares its flags as [`FlagSpec`] constants and builds
//! itself from a [`Lookup`], so the same mapping serves plain environment
//! lookups and parsed `clap` matches:
//!
//! ```
//! use std::collections::HashMap;
//! use ci_plugin_env::context::Pipeline;
//!
//! let env: HashMap<String, String> = [
//!     ("DRONE_BRANCH", "main"),
//!     ("DRONE_BUILD_NUMBER", "42"),
//!     ("DRONE_REPO", "octocat/hello-world"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! let pipeline = Pipeline::from_env(&env);
//! assert_eq!(pipeline.build.branch, "main");
//! assert_eq!(pipeline.build.number, 42);
//! assert_eq!(pipeline.repo.slug, "octocat/hello-world");
//! ```

mod build;
mod commit;
mod repo;
mod stage;
mod step;
mod system;
mod version;

pub use build::Build;
pub use commit::Commit;
pub use repo::Repo;
pub use stage::Stage;
pub use step::Step;
pub use system::System;
pub use version::{CalVer, SemVer};

use chrono::{DateTime, Utc};
use clap::{ArgMatches, Args, Command, FromArgMatches};
use log::warn;
use serde::Serialize;

use crate::env::{EnvSource, ProcessEnv};
use crate::flags::FlagSpec;

/// Resolves the raw value of a flag.
///
/// Only [`Lookup::raw`] has to be provided; the typed readers are shared so
/// every source converts values the same way.
pub trait Lookup {
    fn raw(&self, flag: &FlagSpec) -> Option<String>;

    /// The value, or an empty string.
    fn string(&self, flag: &FlagSpec) -> String {
        self.raw(flag).unwrap_or_default()
    }

    /// The value as an integer. Missing or unparsable values read as 0.
    fn int(&self, flag: &FlagSpec) -> i64 {
        let Some(raw) = self.raw(flag) else {
            return 0;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return 0;
        }
        trimmed.parse().unwrap_or_else(|e| {
            warn!("ignoring {}={:?}: {}", flag.name, raw, e);
            0
        })
    }

    /// The value as a boolean: `true`, `1`, `yes` or `on`, in any case.
    fn bool(&self, flag: &FlagSpec) -> bool {
        self.raw(flag).is_some_and(|raw| {
            matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "true" | "1" | "yes" | "on"
            )
        })
    }

    /// The value split on commas, with blank items dropped.
    fn string_slice(&self, flag: &FlagSpec) -> Vec<String> {
        self.raw(flag)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The value as a unix timestamp in seconds. Missing values read as the
    /// epoch.
    fn timestamp(&self, flag: &FlagSpec) -> DateTime<Utc> {
        DateTime::from_timestamp(self.int(flag), 0).unwrap_or_default()
    }
}

/// Looks flags up in an [`EnvSource`], trying each variable in order.
///
/// Empty values are skipped so a later fallback variable can supply one.
#[derive(Debug, Clone)]
pub struct EnvLookup<E> {
    env: E,
}

impl<E: EnvSource> EnvLookup<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }
}

impl<E: EnvSource> Lookup for EnvLookup<E> {
    fn raw(&self, flag: &FlagSpec) -> Option<String> {
        flag.env
            .iter()
            .find_map(|var| self.env.var(var).filter(|value| !value.is_empty()))
    }
}

/// Looks flags up in `clap` matches built from [`FlagSpec::to_arg`].
///
/// `clap` only binds the first environment variable of a flag, so the
/// remaining ones are read from `env`, the process environment unless
/// [`MatchesLookup::with_env`] supplies another source.
#[derive(Debug, Clone, Copy)]
pub struct MatchesLookup<'a, E = ProcessEnv> {
    matches: &'a ArgMatches,
    env: E,
}

impl<'a> MatchesLookup<'a> {
    pub fn new(matches: &'a ArgMatches) -> Self {
        Self::with_env(matches, ProcessEnv)
    }
}

impl<'a, E: EnvSource> MatchesLookup<'a, E> {
    pub fn with_env(matches: &'a ArgMatches, env: E) -> Self {
        Self { matches, env }
    }
}

impl<E: EnvSource> Lookup for MatchesLookup<'_, E> {
    fn raw(&self, flag: &FlagSpec) -> Option<String> {
        self.matches
            .try_get_one::<String>(flag.name)
            .ok()
            .flatten()
            .cloned()
            .or_else(|| {
                flag.env
                    .iter()
                    .skip(1)
                    .find_map(|var| self.env.var(var).filter(|value| !value.is_empty()))
            })
    }
}

/// A context section that can be read through a [`Lookup`].
pub trait FromLookup: Sized {
    /// Flags read by [`FromLookup::from_lookup`].
    const FLAGS: &'static [FlagSpec];

    fn from_lookup<L: Lookup + ?Sized>(lookup: &L) -> Self;

    /// Build the section from environment variables.
    fn from_env<E: EnvSource + ?Sized>(env: &E) -> Self {
        Self::from_lookup(&EnvLookup::new(env))
    }

    /// Build the section from parsed `clap` matches.
    fn from_matches(matches: &ArgMatches) -> Self {
        Self::from_lookup(&MatchesLookup::new(matches))
    }
}

/// Everything the orchestrator tells a plugin about the running pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    pub build: Build,
    pub repo: Repo,
    pub commit: Commit,
    pub stage: Stage,
    pub step: Step,
    pub sem_ver: SemVer,
    pub cal_ver: CalVer,
    pub system: System,
}

impl Pipeline {
    pub fn from_lookup<L: Lookup + ?Sized>(lookup: &L) -> Self {
        Self {
            build: Build::from_lookup(lookup),
            repo: Repo::from_lookup(lookup),
            commit: Commit::from_lookup(lookup),
            stage: Stage::from_lookup(lookup),
            step: Step::from_lookup(lookup),
            sem_ver: SemVer::from_lookup(lookup),
            cal_ver: CalVer::from_lookup(lookup),
            system: System::from_lookup(lookup),
        }
    }

    /// Build the pipeline from environment variables.
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Self {
        Self::from_lookup(&EnvLookup::new(env))
    }

    /// Build the pipeline from the current process environment.
    pub fn from_process_env() -> Self {
        Self::from_env(&ProcessEnv)
    }

    /// Build the pipeline from matches of a command augmented with
    /// [`flags`].
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self::from_lookup(&MatchesLookup::new(matches))
    }
}

/// Every orchestrator flag, section by section.
pub fn flags() -> Vec<FlagSpec> {
    [
        Build::FLAGS,
        Repo::FLAGS,
        Commit::FLAGS,
        Stage::FLAGS,
        Step::FLAGS,
        SemVer::FLAGS,
        CalVer::FLAGS,
        System::FLAGS,
    ]
    .concat()
}

impl FromArgMatches for Pipeline {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        Ok(Self::from_matches(matches))
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        *self = Self::from_matches(matches);
        Ok(())
    }
}

impl Args for Pipeline {
    fn augment_args(cmd: Command) -> Command {
        cmd.args(flags().iter().map(FlagSpec::to_arg))
    }

    fn augment_args_for_update(cmd: Command) -> Command {
        Self::augment_args(cmd)
    }
}
