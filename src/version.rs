//! Version triples for the client binary and the live cluster.

use anyhow::{Result, anyhow};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A (major, minor, micro) triple plus an optional qualifier such as `-rc1`,
/// displayed exactly as reported.
///
/// Ordering and equality only consider the triple; the qualifier is kept
/// for display.
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
    pub additional: String,
}

impl Version {
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            additional: String::new(),
        }
    }

    pub fn with_additional(mut self, additional: impl Into<String>) -> Self {
        self.additional = additional.into();
        self
    }

    /// `major.minor.micro` with the qualifier stripped
    pub fn pretty_no_additional(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.micro)
    }

    fn triple(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.micro)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty_no_additional())?;
        write!(f, "{}", self.additional)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.triple() == other.triple()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triple().cmp(&other.triple())
    }
}

impl FromStr for Version {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let raw = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let parsed = semver::Version::parse(raw)
            .map_err(|e| anyhow!("Failed to parse version '{}': {}", s, e))?;
        Ok(parsed.into())
    }
}

impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        let mut additional = String::new();
        if !v.pre.is_empty() {
            additional.push('-');
            additional.push_str(v.pre.as_str());
        }
        if !v.build.is_empty() {
            additional.push('+');
            additional.push_str(v.build.as_str());
        }

        Self {
            major: v.major as u32,
            minor: v.minor as u32,
            micro: v.patch as u32,
            additional,
        }
    }
}

/// The version this binary was built as.
pub fn client_version() -> Version {
    // CARGO_PKG_VERSION is always valid semver
    env!("CARGO_PKG_VERSION").parse().unwrap_or_default()
}
