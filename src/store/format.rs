//! Line formats for key/value output files
//!
//! Two flat formats are supported, chosen by file extension:
//!
//! - `.env`: `KEY=VALUE`, split on the first `=`. Values that begin with a
//!   double quote may use `\n`, `\"` and `\\` escapes and may continue over
//!   several physical lines. Single-quoted values are taken literally.
//!   Blank lines, `#` comments and an `export ` prefix are accepted on read.
//! - anything else (the `.out` convention): `KEY VALUE`, split on the first
//!   run of whitespace. Values cannot contain newlines.
//!
//! A line without a separator yields the whole line as the key and an empty
//! value in both formats.
//!
//! Keys that could not be read back as the same single entry, such as keys
//! with line breaks or a `.env` key starting with `#`, are rejected before
//! anything is written.

use std::path::Path;

use log::warn;

use crate::error::{Error, Result};

/// A single key/value pair in an output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The textual layout of an output file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `KEY=VALUE` lines.
    Env,
    /// `KEY VALUE` lines.
    Out,
}

impl Format {
    /// Picks the format for a path from its extension.
    ///
    /// Only `.env` (case-insensitive, also as a bare file name) selects
    /// [`Format::Env`]. Every other extension, including none at all, falls
    /// back to [`Format::Out`].
    pub fn from_path(path: &Path) -> Self {
        let eq_part = |part: Option<&std::ffi::OsStr>, expected: &str| {
            part.and_then(|part| part.to_str())
                .is_some_and(|part| part.eq_ignore_ascii_case(expected))
        };
        if eq_part(path.extension(), "env") || eq_part(path.file_name(), ".env") {
            Format::Env
        } else {
            Format::Out
        }
    }

    /// Whether values containing newlines can be written in this format.
    pub fn allows_multiline(self) -> bool {
        matches!(self, Format::Env)
    }

    /// Why `key` would not read back as the same single entry, if it would
    /// not.
    pub fn key_problem(self, key: &str) -> Option<&'static str> {
        if key.is_empty() {
            return Some("key is empty");
        }
        if key.contains(['\n', '\r']) {
            return Some("key contains a line break");
        }
        match self {
            Format::Out if key.contains(char::is_whitespace) => {
                Some("key contains whitespace")
            }
            Format::Env if key.contains('=') => Some("key contains '='"),
            Format::Env if key.starts_with('#') => Some("key starts with '#'"),
            Format::Env if key.starts_with("export ") => Some("key starts with 'export '"),
            Format::Env if key.trim() != key => {
                Some("key has leading or trailing whitespace")
            }
            _ => None,
        }
    }

    /// Parse file content into entries in file order.
    ///
    /// `path` is only used for error reporting. Duplicate keys are kept
    /// here; the store collapses them.
    pub fn parse(self, content: &str, path: &Path) -> Result<Vec<Entry>> {
        match self {
            Format::Env => parse_env(content, path),
            Format::Out => Ok(parse_out(content)),
        }
    }

    /// Render a single entry as one logical line, without the newline.
    pub fn format_entry(self, entry: &Entry) -> String {
        match self {
            Format::Env => format!("{}={}", entry.key, encode_env_value(&entry.value)),
            Format::Out => format!("{} {}", entry.key, entry.value),
        }
    }

    /// Serialize entries, one per line, each terminated by `\n`.
    pub fn serialize(self, entries: &[Entry]) -> String {
        let mut output = String::new();
        for entry in entries {
            output.push_str(&self.format_entry(entry));
            output.push('\n');
        }
        output
    }
}

fn parse_out(content: &str) -> Vec<Entry> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(char::is_whitespace) {
            Some((key, value)) => Entry::new(key.trim(), value.trim()),
            None => Entry::new(line, ""),
        })
        .collect()
}

fn parse_env(content: &str, path: &Path) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut lines = content.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let trimmed = trimmed
            .strip_prefix("export ")
            .map(str::trim_start)
            .unwrap_or(trimmed);

        let Some((key, raw)) = trimmed.split_once('=') else {
            warn!(
                "{}:{}: no '=' in line, storing '{}' with an empty value",
                path.display(),
                index + 1,
                trimmed
            );
            entries.push(Entry::new(trimmed, ""));
            continue;
        };

        let key = key.trim();
        let raw = raw.trim();
        let value = if let Some(rest) = raw.strip_prefix('"') {
            read_quoted(rest, &mut lines).ok_or_else(|| Error::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                message: format!("unterminated quoted value for key {}", key),
            })?
        } else if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
            raw[1..raw.len() - 1].to_string()
        } else {
            raw.to_string()
        };

        entries.push(Entry::new(key, value));
    }

    Ok(entries)
}

/// Read a double-quoted value whose opening quote has been consumed.
///
/// Pulls further lines from `lines` until the closing quote. Returns `None`
/// when the input ends first.
fn read_quoted<'a, I>(first: &'a str, lines: &mut I) -> Option<String>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut value = String::new();
    let mut current = first;

    loop {
        let mut chars = current.chars();
        while let Some(ch) = chars.next() {
            match ch {
                '"' => return Some(value),
                '\\' => match chars.next() {
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('t') => value.push('\t'),
                    Some('"') => value.push('"'),
                    Some('\\') => value.push('\\'),
                    Some(other) => {
                        value.push('\\');
                        value.push(other);
                    }
                    None => value.push('\\'),
                },
                other => value.push(other),
            }
        }

        let (_, next) = lines.next()?;
        value.push('\n');
        current = next;
    }
}

fn needs_quotes(value: &str) -> bool {
    value.contains(['\n', '\r'])
        || value.starts_with(['"', '\''])
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace)
}

fn encode_env_value(value: &str) -> String {
    if !needs_quotes(value) {
        return value.to_string();
    }

    let mut encoded = String::with_capacity(value.len() + 2);
    encoded.push('"');
    for ch in value.chars() {
        match ch {
            '\n' => encoded.push_str("\\n"),
            '\r' => encoded.push_str("\\r"),
            '"' => encoded.push_str("\\\""),
            '\\' => encoded.push_str("\\\\"),
            other => encoded.push(other),
        }
    }
    encoded.push('"');
    encoded
}
