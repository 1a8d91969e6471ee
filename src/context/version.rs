//! Semantic and calendar versions derived from the build tag.
//!
//! The orchestrator only fills these in for tag builds. For semantic
//! versions that fail to parse it reports the reason in
//! [`SemVer::error`] and leaves the other fields empty.

use std::fmt;

use serde::Serialize;

use super::{FromLookup, Lookup};
use crate::error::Result;
use crate::flags::FlagSpec;

const SEMVER_VERSION: FlagSpec = FlagSpec::string("semver.version", "semver version", &["DRONE_SEMVER"]);
const SEMVER_MAJOR: FlagSpec = FlagSpec::string("semver.major", "semver major", &["DRONE_SEMVER_MAJOR"]);
const SEMVER_MINOR: FlagSpec = FlagSpec::string("semver.minor", "semver minor", &["DRONE_SEMVER_MINOR"]);
const SEMVER_PATCH: FlagSpec = FlagSpec::string("semver.patch", "semver patch", &["DRONE_SEMVER_PATCH"]);
const SEMVER_PRERELEASE: FlagSpec = FlagSpec::string(
    "semver.prerelease",
    "semver prerelease",
    &["DRONE_SEMVER_PRERELEASE"],
);
const SEMVER_BUILD: FlagSpec = FlagSpec::string("semver.build", "semver build", &["DRONE_SEMVER_BUILD"]);
const SEMVER_SHORT: FlagSpec = FlagSpec::string("semver.short", "semver short", &["DRONE_SEMVER_SHORT"]);
const SEMVER_ERROR: FlagSpec = FlagSpec::string("semver.error", "semver error", &["DRONE_SEMVER_ERROR"]);

const CALVER_VERSION: FlagSpec = FlagSpec::string("calver.version", "calver version", &["DRONE_CALVER"]);
const CALVER_MAJOR: FlagSpec = FlagSpec::string("calver.major", "calver major", &["DRONE_CALVER_MAJOR"]);
const CALVER_MINOR: FlagSpec = FlagSpec::string("calver.minor", "calver minor", &["DRONE_CALVER_MINOR"]);
const CALVER_MICRO: FlagSpec = FlagSpec::string("calver.micro", "calver micro", &["DRONE_CALVER_MICRO"]);
const CALVER_MODIFIER: FlagSpec = FlagSpec::string(
    "calver.modifier",
    "calver modifier",
    &["DRONE_CALVER_MODIFIER"],
);
const CALVER_SHORT: FlagSpec = FlagSpec::string("calver.short", "calver short", &["DRONE_CALVER_SHORT"]);

/// Semantic version of the tag being built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SemVer {
    /// The full semantic version.
    pub version: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub prerelease: String,
    /// Build metadata, the part after `+`.
    pub build: String,
    /// `major.minor.patch` without prerelease or build metadata.
    pub short: String,
    /// Why the tag could not be parsed, if it could not.
    pub error: String,
}

impl SemVer {
    /// Parse [`SemVer::version`] with the `semver` crate.
    ///
    /// A leading `v` is accepted, matching how tags are usually written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::SemVer`] if the version is empty or
    /// not a valid semantic version.
    pub fn parse(&self) -> Result<semver::Version> {
        let version = self.version.strip_prefix('v').unwrap_or(&self.version);
        Ok(semver::Version::parse(version)?)
    }
}

impl FromLookup for SemVer {
    const FLAGS: &'static [FlagSpec] = &[
        SEMVER_VERSION,
        SEMVER_MAJOR,
        SEMVER_MINOR,
        SEMVER_PATCH,
        SEMVER_PRERELEASE,
        SEMVER_BUILD,
        SEMVER_SHORT,
        SEMVER_ERROR,
    ];

    fn from_lookup<L: Lookup + ?Sized>(lookup: &L) -> Self {
        Self {
            version: lookup.string(&SEMVER_VERSION),
            major: lookup.string(&SEMVER_MAJOR),
            minor: lookup.string(&SEMVER_MINOR),
            patch: lookup.string(&SEMVER_PATCH),
            prerelease: lookup.string(&SEMVER_PRERELEASE),
            build: lookup.string(&SEMVER_BUILD),
            short: lookup.string(&SEMVER_SHORT),
            error: lookup.string(&SEMVER_ERROR),
        }
    }
}

/// Calendar version of the tag being built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalVer {
    /// The full calendar version.
    pub version: String,
    pub major: String,
    pub minor: String,
    pub micro: String,
    pub modifier: String,
    /// The version without the modifier.
    pub short: String,
}

impl fmt::Display for CalVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)
    }
}

impl FromLookup for CalVer {
    const FLAGS: &'static [FlagSpec] = &[
        CALVER_VERSION,
        CALVER_MAJOR,
        CALVER_MINOR,
        CALVER_MICRO,
        CALVER_MODIFIER,
        CALVER_SHORT,
    ];

    fn from_lookup<L: Lookup + ?Sized>(lookup: &L) -> Self {
        Self {
            version: lookup.string(&CALVER_VERSION),
            major: lookup.string(&CALVER_MAJOR),
            minor: lookup.string(&CALVER_MINOR),
            micro: lookup.string(&CALVER_MICRO),
            modifier: lookup.string(&CALVER_MODIFIER),
            short: lookup.string(&CALVER_SHORT),
        }
    }
}
