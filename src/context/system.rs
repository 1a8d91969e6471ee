use serde::Serialize;

use super::{FromLookup, Lookup};
use crate::flags::FlagSpec;

const PROTO: FlagSpec = FlagSpec::string("system.proto", "system proto", &["DRONE_SYSTEM_PROTO"]);
const HOST: FlagSpec = FlagSpec::string(
    "system.host",
    "system host",
    &["DRONE_SYSTEM_HOST", "DRONE_SYSTEM_HOSTNAME"],
);
const VERSION: FlagSpec =
    FlagSpec::string("system.version", "system version", &["DRONE_SYSTEM_VERSION"]);

/// The CI system running the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct System {
    pub proto: String,
    pub host: String,
    pub version: String,
}

impl FromLookup for System {
    const FLAGS: &'static [FlagSpec] = &[PROTO, HOST, VERSION];

    fn from_lookup<L: Lookup + ?Sized>(lookup: &L) -> Self {
        Self {
            proto: lookup.string(&PROTO),
            host: lookup.string(&HOST),
            version: lookup.string(&VERSION),
        }
    }
}
