use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{FromLookup, Lookup};
use crate::flags::FlagSpec;

const KIND: FlagSpec = FlagSpec::string("stage.kind", "stage kind", &["DRONE_STAGE_KIND"]);
const TYPE: FlagSpec = FlagSpec::string("stage.type", "stage type", &["DRONE_STAGE_TYPE"]);
const NAME: FlagSpec = FlagSpec::string("stage.name", "stage name", &["DRONE_STAGE_NAME"]);
const NUMBER: FlagSpec = FlagSpec::int("stage.number", "stage number", &["DRONE_STAGE_NUMBER"]);
const MACHINE: FlagSpec = FlagSpec::string("stage.machine", "stage machine", &["DRONE_STAGE_MACHINE"]);
const OS: FlagSpec = FlagSpec::string("stage.os", "stage os", &["DRONE_STAGE_OS"]);
const ARCH: FlagSpec = FlagSpec::string("stage.arch", "stage arch", &["DRONE_STAGE_ARCH"]);
const VARIANT: FlagSpec = FlagSpec::string("stage.variant", "stage variant", &["DRONE_STAGE_VARIANT"]);
const VERSION: FlagSpec = FlagSpec::string("stage.version", "stage version", &["DRONE_STAGE_VERSION"]);
const STATUS: FlagSpec = FlagSpec::string("stage.status", "stage status", &["DRONE_STAGE_STATUS"]);
const STARTED: FlagSpec = FlagSpec::int64("stage.started", "stage started", &["DRONE_STAGE_STARTED"]);
const FINISHED: FlagSpec =
    FlagSpec::int64("stage.finished", "stage finished", &["DRONE_STAGE_FINISHED"]);
const DEPENDS_ON: FlagSpec = FlagSpec::string_slice(
    "stage.depends-on",
    "stage depends on",
    &["DRONE_STAGE_DEPENDS_ON"],
);

/// A build stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// Kind of resource being executed, from the `kind` attribute of the
    /// pipeline configuration.
    pub kind: String,
    /// Type of resource being executed.
    #[serde(rename = "type")]
    pub r#type: String,
    pub name: String,
    pub number: i64,
    /// Host machine the stage runs on.
    pub machine: String,
    /// Target operating system.
    pub os: String,
    /// Platform architecture.
    pub arch: String,
    /// Architecture variant.
    pub variant: String,
    /// Operating system version.
    pub version: String,
    /// Defaults to `success` while every step is passing.
    pub status: String,
    pub started: DateTime<Utc>,
    /// A running stage has no finish time yet; orchestrators report the
    /// current time instead.
    pub finished: DateTime<Utc>,
    pub depends_on: Vec<String>,
}

impl FromLookup for Stage {
    const FLAGS: &'static [FlagSpec] = &[
        KIND, TYPE, NAME, NUMBER, MACHINE, OS, ARCH, VARIANT, VERSION, STATUS, STARTED, FINISHED,
        DEPENDS_ON,
    ];

    fn from_lookup<L: Lookup + ?Sized>(lookup: &L) -> Self {
        Self {
            kind: lookup.string(&KIND),
            r#type: lookup.string(&TYPE),
            name: lookup.string(&NAME),
            number: lookup.int(&NUMBER),
            machine: lookup.string(&MACHINE),
            os: lookup.string(&OS),
            arch: lookup.string(&ARCH),
            variant: lookup.string(&VARIANT),
            version: lookup.string(&VERSION),
            status: lookup.string(&STATUS),
            started: lookup.timestamp(&STARTED),
            finished: lookup.timestamp(&FINISHED),
            depends_on: lookup.string_slice(&DEPENDS_ON),
        }
    }
}
