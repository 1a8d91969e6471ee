use serde::Serialize;

use super::{FromLookup, Lookup};
use crate::flags::FlagSpec;

const SLUG: FlagSpec = FlagSpec::string("repo.slug", "repo slug", &["DRONE_REPO"]);
const SCM: FlagSpec = FlagSpec::string("repo.scm", "repo scm", &["DRONE_REPO_SCM"]);
const OWNER: FlagSpec = FlagSpec::string(
    "repo.owner",
    "repo owner",
    &["DRONE_REPO_OWNER", "DRONE_REPO_NAMESPACE"],
);
const NAME: FlagSpec = FlagSpec::string("repo.name", "repo name", &["DRONE_REPO_NAME"]);
const LINK: FlagSpec = FlagSpec::string("repo.link", "repo link", &["DRONE_REPO_LINK"]);
const BRANCH: FlagSpec = FlagSpec::string("repo.branch", "repo branch", &["DRONE_REPO_BRANCH"]);
const HTTP_URL: FlagSpec = FlagSpec::string(
    "repo.http-url",
    "repo http url",
    &["DRONE_REMOTE_URL", "DRONE_GIT_HTTP_URL"],
);
const SSH_URL: FlagSpec = FlagSpec::string("repo.ssh-url", "repo ssh url", &["DRONE_GIT_SSH_URL"]);
const VISIBILITY: FlagSpec =
    FlagSpec::string("repo.visibility", "repo visibility", &["DRONE_REPO_VISIBILITY"]);
const PRIVATE: FlagSpec = FlagSpec::bool("repo.private", "repo private", &["DRONE_REPO_PRIVATE"]);

/// The repository being built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Repo {
    /// Full name, `owner/name`.
    pub slug: String,
    pub scm: String,
    pub owner: String,
    pub name: String,
    pub link: String,
    /// Default branch of the repository.
    pub branch: String,
    /// Clone URL over HTTP.
    pub http_url: String,
    /// Clone URL over SSH.
    pub ssh_url: String,
    pub visibility: String,
    pub private: bool,
}

impl FromLookup for Repo {
    const FLAGS: &'static [FlagSpec] = &[
        SLUG, SCM, OWNER, NAME, LINK, BRANCH, HTTP_URL, SSH_URL, VISIBILITY, PRIVATE,
    ];

    fn from_lookup<L: Lookup + ?Sized>(lookup: &L) -> Self {
        Self {
            slug: lookup.string(&SLUG),
            scm: lookup.string(&SCM),
            owner: lookup.string(&OWNER),
            name: lookup.string(&NAME),
            link: lookup.string(&LINK),
            branch: lookup.string(&BRANCH),
            http_url: lookup.string(&HTTP_URL),
            ssh_url: lookup.string(&SSH_URL),
            visibility: lookup.string(&VISIBILITY),
            private: lookup.bool(&PRIVATE),
        }
    }
}
