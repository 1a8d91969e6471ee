//! Declarative descriptions of the flags a CI orchestrator feeds a plugin.
//!
//! Each [`FlagSpec`] names a dotted flag (`build.branch`), the environment
//! variables it is read from and the type of its value. The descriptors are
//! plain data: [`crate::context`] reads typed values through them and
//! [`FlagSpec::to_arg`] turns them into `clap` arguments.
//!
//! Orchestrator flags are hidden from `--help` by default. Plugins that want
//! some of them documented (notification plugins, mostly) can flip them with
//! the `show_*` helpers before building their command:
//!
//! ```
//! use ci_plugin_env::context;
//! use ci_plugin_env::flags::{show_flags_by_type, FlagSpec};
//!
//! let mut flags = context::flags();
//! show_flags_by_type(&mut flags, &["repo."]);
//! let cmd = clap::Command::new("my-plugin").args(flags.iter().map(FlagSpec::to_arg));
//! assert!(!cmd.get_arguments().any(|a| a.get_id() == "repo.name" && a.is_hide_set()));
//! ```

use clap::{Arg, ArgAction};

/// The type a flag value is parsed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagKind {
    String,
    /// Comma separated list.
    StringSlice,
    Int,
    /// Unix timestamp in seconds.
    Int64,
    Bool,
}

/// A single orchestrator flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub usage: &'static str,
    /// Environment variables to read, in priority order.
    pub env: &'static [&'static str],
    pub kind: FlagKind,
    pub hidden: bool,
}

impl FlagSpec {
    pub const fn new(
        name: &'static str,
        usage: &'static str,
        env: &'static [&'static str],
        kind: FlagKind,
    ) -> Self {
        Self {
            name,
            usage,
            env,
            kind,
            hidden: true,
        }
    }

    pub const fn string(
        name: &'static str,
        usage: &'static str,
        env: &'static [&'static str],
    ) -> Self {
        Self::new(name, usage, env, FlagKind::String)
    }

    pub const fn string_slice(
        name: &'static str,
        usage: &'static str,
        env: &'static [&'static str],
    ) -> Self {
        Self::new(name, usage, env, FlagKind::StringSlice)
    }

    pub const fn int(
        name: &'static str,
        usage: &'static str,
        env: &'static [&'static str],
    ) -> Self {
        Self::new(name, usage, env, FlagKind::Int)
    }

    pub const fn int64(
        name: &'static str,
        usage: &'static str,
        env: &'static [&'static str],
    ) -> Self {
        Self::new(name, usage, env, FlagKind::Int64)
    }

    pub const fn bool(
        name: &'static str,
        usage: &'static str,
        env: &'static [&'static str],
    ) -> Self {
        Self::new(name, usage, env, FlagKind::Bool)
    }

    /// Build the `clap` argument for this flag.
    ///
    /// Values are kept as raw strings so command line and environment input
    /// go through the same conversions. Only the first environment variable
    /// is bound here; [`crate::context::MatchesLookup`] checks the rest.
    pub fn to_arg(&self) -> Arg {
        let arg = Arg::new(self.name)
            .long(self.name)
            .help(self.usage)
            .hide(self.hidden)
            .action(ArgAction::Set);
        let arg = match self.env.first() {
            Some(var) => arg.env(*var),
            None => arg,
        };
        match self.kind {
            FlagKind::Bool => arg
                .value_name("BOOL")
                .num_args(0..=1)
                .default_missing_value("true"),
            FlagKind::Int | FlagKind::Int64 => arg.value_name("NUMBER"),
            FlagKind::StringSlice => arg.value_name("LIST"),
            FlagKind::String => arg.value_name("VALUE"),
        }
    }
}

/// Mark every flag as visible in help output.
pub fn show_all_flags(flags: &mut [FlagSpec]) {
    for flag in flags {
        flag.hidden = false;
    }
}

/// Mark the flags with one of the given names as visible.
///
/// ```
/// use ci_plugin_env::context;
/// use ci_plugin_env::flags::show_flags_by_name;
///
/// let mut flags = context::flags();
/// show_flags_by_name(&mut flags, &["repo.name", "repo.owner"]);
/// assert_eq!(flags.iter().filter(|f| !f.hidden).count(), 2);
/// ```
pub fn show_flags_by_name(flags: &mut [FlagSpec], names: &[&str]) {
    for flag in flags.iter_mut().filter(|f| names.contains(&f.name)) {
        flag.hidden = false;
    }
}

/// Mark every flag whose name starts with one of `prefixes` as visible.
///
/// Flag names are prefixed with the section they belong to, so
/// `&["repo."]` shows every repository flag.
pub fn show_flags_by_type(flags: &mut [FlagSpec], prefixes: &[&str]) {
    for flag in flags
        .iter_mut()
        .filter(|f| prefixes.iter().any(|p| f.name.starts_with(*p)))
    {
        flag.hidden = false;
    }
}
