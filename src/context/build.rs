use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{FromLookup, Lookup};
use crate::flags::FlagSpec;

const BRANCH: FlagSpec = FlagSpec::string("build.branch", "build branch", &["DRONE_BRANCH"]);
const PULL_REQUEST: FlagSpec =
    FlagSpec::int("build.pull-request", "build pull request", &["DRONE_PULL_REQUEST"]);
const TAG: FlagSpec = FlagSpec::string("build.tag", "build tag", &["DRONE_TAG"]);
const SOURCE_BRANCH: FlagSpec =
    FlagSpec::string("build.source-branch", "build source branch", &["DRONE_SOURCE_BRANCH"]);
const TARGET_BRANCH: FlagSpec =
    FlagSpec::string("build.target-branch", "build target branch", &["DRONE_TARGET_BRANCH"]);
const NUMBER: FlagSpec = FlagSpec::int("build.number", "build number", &["DRONE_BUILD_NUMBER"]);
const PARENT: FlagSpec = FlagSpec::int("build.parent", "build parent", &["DRONE_BUILD_PARENT"]);
const EVENT: FlagSpec = FlagSpec::string("build.event", "build event", &["DRONE_BUILD_EVENT"]);
const ACTION: FlagSpec = FlagSpec::string("build.action", "build action", &["DRONE_BUILD_ACTION"]);
const STATUS: FlagSpec = FlagSpec::string("build.status", "build status", &["DRONE_BUILD_STATUS"]);
const LINK: FlagSpec = FlagSpec::string("build.link", "build link", &["DRONE_BUILD_LINK"]);
const CREATED: FlagSpec =
    FlagSpec::int64("build.created", "build created", &["DRONE_BUILD_CREATED"]);
const STARTED: FlagSpec =
    FlagSpec::int64("build.started", "build started", &["DRONE_BUILD_STARTED"]);
const FINISHED: FlagSpec =
    FlagSpec::int64("build.finished", "build finished", &["DRONE_BUILD_FINISHED"]);
const DEPLOY_TO: FlagSpec = FlagSpec::string("build.deploy-to", "build deploy to", &["DRONE_DEPLOY_TO"]);
const DEPLOY_ID: FlagSpec = FlagSpec::int("build.deploy-id", "build deploy id", &["DRONE_DEPLOY_ID"]);
const FAILED_STAGES: FlagSpec = FlagSpec::string_slice(
    "build.failed-stages",
    "build failed stages",
    &["DRONE_FAILED_STAGES"],
);
const FAILED_STEPS: FlagSpec = FlagSpec::string_slice(
    "build.failed-steps",
    "build failed steps",
    &["DRONE_FAILED_STEPS"],
);

/// A build of a repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    /// Branch the build runs on.
    pub branch: String,
    /// Pull request number, 0 outside pull request builds.
    pub pull_request: i64,
    pub tag: String,
    /// Source branch of the pull request.
    pub source_branch: String,
    /// Target branch of the pull request.
    pub target_branch: String,
    pub number: i64,
    /// Number of the build this one was promoted or restarted from.
    pub parent: i64,
    /// Event that triggered the build (`push`, `pull_request`, `tag`, ...).
    pub event: String,
    /// Action that triggered the build, e.g. a pull request being opened
    /// rather than synchronized.
    pub action: String,
    pub status: String,
    pub link: String,
    pub created: DateTime<Utc>,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
    /// Environment a promotion deploys to.
    pub deploy_to: String,
    pub deploy_id: i64,
    pub failed_stages: Vec<String>,
    pub failed_steps: Vec<String>,
}

impl FromLookup for Build {
    const FLAGS: &'static [FlagSpec] = &[
        BRANCH,
        PULL_REQUEST,
        TAG,
        SOURCE_BRANCH,
        TARGET_BRANCH,
        NUMBER,
        PARENT,
        EVENT,
        ACTION,
        STATUS,
        LINK,
        CREATED,
        STARTED,
        FINISHED,
        DEPLOY_TO,
        DEPLOY_ID,
        FAILED_STAGES,
        FAILED_STEPS,
    ];

    fn from_lookup<L: Lookup + ?Sized>(lookup: &L) -> Self {
        Self {
            branch: lookup.string(&BRANCH),
            pull_request: lookup.int(&PULL_REQUEST),
            tag: lookup.string(&TAG),
            source_branch: lookup.string(&SOURCE_BRANCH),
            target_branch: lookup.string(&TARGET_BRANCH),
            number: lookup.int(&NUMBER),
            parent: lookup.int(&PARENT),
            event: lookup.string(&EVENT),
            action: lookup.string(&ACTION),
            status: lookup.string(&STATUS),
            link: lookup.string(&LINK),
            created: lookup.timestamp(&CREATED),
            started: lookup.timestamp(&STARTED),
            finished: lookup.timestamp(&FINISHED),
            deploy_to: lookup.string(&DEPLOY_TO),
            deploy_id: lookup.int(&DEPLOY_ID),
            failed_stages: lookup.string_slice(&FAILED_STAGES),
            failed_steps: lookup.string_slice(&FAILED_STEPS),
        }
    }
}
