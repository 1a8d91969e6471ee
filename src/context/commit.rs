use serde::Serialize;

use super::{FromLookup, Lookup};
use crate::flags::FlagSpec;

const SHA: FlagSpec = FlagSpec::string(
    "commit.sha",
    "commit sha",
    &["DRONE_COMMIT", "DRONE_COMMIT_SHA"],
);
const BEFORE: FlagSpec = FlagSpec::string("commit.before", "commit before", &["DRONE_COMMIT_BEFORE"]);
const AFTER: FlagSpec = FlagSpec::string("commit.after", "commit after", &["DRONE_COMMIT_AFTER"]);
const REF: FlagSpec = FlagSpec::string("commit.ref", "commit ref", &["DRONE_COMMIT_REF"]);
const BRANCH: FlagSpec = FlagSpec::string("commit.branch", "commit branch", &["DRONE_COMMIT_BRANCH"]);
const LINK: FlagSpec = FlagSpec::string("commit.link", "commit link", &["DRONE_COMMIT_LINK"]);
const MESSAGE: FlagSpec =
    FlagSpec::string("commit.message", "commit message", &["DRONE_COMMIT_MESSAGE"]);
const AUTHOR: FlagSpec = FlagSpec::string("commit.author", "commit author", &["DRONE_COMMIT_AUTHOR"]);
const AUTHOR_NAME: FlagSpec = FlagSpec::string(
    "commit.author-name",
    "commit author name",
    &["DRONE_COMMIT_AUTHOR_NAME"],
);
const AUTHOR_EMAIL: FlagSpec = FlagSpec::string(
    "commit.author-email",
    "commit author email",
    &["DRONE_COMMIT_AUTHOR_EMAIL"],
);
const AUTHOR_AVATAR: FlagSpec = FlagSpec::string(
    "commit.author-avatar",
    "commit author avatar",
    &["DRONE_COMMIT_AUTHOR_AVATAR"],
);

/// The commit being built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    pub sha: String,
    /// SHA before the patch is applied.
    pub before: String,
    /// SHA after the patch is applied.
    pub after: String,
    #[serde(rename = "ref")]
    pub r#ref: String,
    /// Target branch of the push or pull request. Empty for tag events.
    pub branch: String,
    pub link: String,
    pub message: String,
    /// Login of the author in the source control system.
    pub author: String,
    pub author_name: String,
    pub author_email: String,
    pub author_avatar: String,
}

impl FromLookup for Commit {
    const FLAGS: &'static [FlagSpec] = &[
        SHA,
        BEFORE,
        AFTER,
        REF,
        BRANCH,
        LINK,
        MESSAGE,
        AUTHOR,
        AUTHOR_NAME,
        AUTHOR_EMAIL,
        AUTHOR_AVATAR,
    ];

    fn from_lookup<L: Lookup + ?Sized>(lookup: &L) -> Self {
        Self {
            sha: lookup.string(&SHA),
            before: lookup.string(&BEFORE),
            after: lookup.string(&AFTER),
            r#ref: lookup.string(&REF),
            branch: lookup.string(&BRANCH),
            link: lookup.string(&LINK),
            message: lookup.string(&MESSAGE),
            author: lookup.string(&AUTHOR),
            author_name: lookup.string(&AUTHOR_NAME),
            author_email: lookup.string(&AUTHOR_EMAIL),
            author_avatar: lookup.string(&AUTHOR_AVATAR),
        }
    }
}

impl Commit {
    /// The first seven characters of the SHA.
    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }
}
