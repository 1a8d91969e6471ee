//! Log level handling for plugins.
//!
//! The level comes from `--log-level` or `PLUGIN_LOG_LEVEL`. Anything that
//! does not name a level falls back to `info` instead of failing the step.

use std::str::FromStr;

use log::LevelFilter;

use crate::flags::FlagSpec;

/// Environment variable holding the plugin log level.
pub const LOG_LEVEL_ENV: &str = "PLUGIN_LOG_LEVEL";

const LOG_LEVEL: FlagSpec = FlagSpec::string("log-level", "log level", &[LOG_LEVEL_ENV]);

/// The log level flag. Unlike the orchestrator flags it is visible in help.
pub fn log_level_flag() -> FlagSpec {
    FlagSpec {
        hidden: false,
        ..LOG_LEVEL
    }
}

/// Parse a level name, case-insensitively.
///
/// Accepts the `log` crate names plus `warning`, `fatal` and `panic`,
/// which orchestrator templates commonly pass. Unknown names give
/// [`LevelFilter::Info`].
pub fn parse_level(level: &str) -> LevelFilter {
    let level = level.trim().to_ascii_lowercase();
    match level.as_str() {
        "warning" => LevelFilter::Warn,
        "fatal" | "panic" => LevelFilter::Error,
        other => LevelFilter::from_str(other).unwrap_or(LevelFilter::Info),
    }
}

/// Initialise `env_logger` at the given level.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init(level: &str) -> LevelFilter {
    let filter = parse_level(level);
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .format_target(false)
        .try_init();
    log::set_max_level(filter);
    filter
}
