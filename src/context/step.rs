use serde::Serialize;

use super::{FromLookup, Lookup};
use crate::flags::FlagSpec;

const NAME: FlagSpec = FlagSpec::string("step.name", "step name", &["DRONE_STEP_NAME"]);
const NUMBER: FlagSpec = FlagSpec::int("step.number", "step number", &["DRONE_STEP_NUMBER"]);

/// The step currently running within the stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Step {
    pub name: String,
    pub number: i64,
}

impl FromLookup for Step {
    const FLAGS: &'static [FlagSpec] = &[NAME, NUMBER];

    fn from_lookup<L: Lookup + ?Sized>(lookup: &L) -> Self {
        Self {
            name: lookup.string(&NAME),
            number: lookup.int(&NUMBER),
        }
    }
}
