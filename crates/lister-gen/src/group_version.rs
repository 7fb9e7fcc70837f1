//! API group and version identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Name used on the command line for the legacy group, which is empty on the wire.
pub const CORE_GROUP: &str = "core";

/// An API group name. The empty group is the legacy core group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Group(String);

impl Group {
    /// Create a group, folding the `core` alias into the empty legacy group.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == CORE_GROUP {
            Group(String::new())
        } else {
            Group(name)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_core(&self) -> bool {
        self.0.is_empty()
    }

    /// The group name, or `core` for the legacy group.
    pub fn non_empty(&self) -> &str {
        if self.is_core() { CORE_GROUP } else { &self.0 }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.non_empty())
    }
}

/// An API version string such as `v1` or `v1beta2`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(String);

impl Version {
    pub fn new(version: impl Into<String>) -> Self {
        Version(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key scoping type inclusion rules to one API group and version.
///
/// The textual form is `group/version`; `core/v1` and `/v1` name the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupVersion {
    pub group: Group,
    pub version: Version,
}

impl GroupVersion {
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        GroupVersion {
            group: Group::new(group),
            version: Version::new(version),
        }
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.version)
    }
}

impl FromStr for GroupVersion {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigError::InvalidGroupVersion {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (group, version) = input
            .split_once('/')
            .ok_or_else(|| invalid("expected `group/version`"))?;
        if version.contains('/') {
            return Err(invalid("expected exactly one `/`"));
        }

        let version = version.trim();
        if version.is_empty() {
            return Err(invalid("version must not be empty"));
        }

        Ok(GroupVersion::new(group.trim(), version))
    }
}
