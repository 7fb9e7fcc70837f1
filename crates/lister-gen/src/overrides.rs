//! Per group/version overrides of which types receive a lister.
//!
//! By default a lister is generated for every type the schema scanner marks as
//! a client-generation candidate. An override for a group/version replaces that
//! rule entirely: only the types it names are eligible, and the scanner's signal
//! is ignored for that group/version. Group/versions without an override keep
//! the default rule.
//!
//! Overrides are written as `group/version=Type1,Type2,...`.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::group_version::GroupVersion;

/// Mapping from group/version to the ordered list of types eligible for generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeInclusionOverrides(IndexMap<GroupVersion, Vec<String>>);

impl TypeInclusionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type list for `gv`, returning the list it replaces.
    pub fn insert(&mut self, gv: GroupVersion, types: Vec<String>) -> Option<Vec<String>> {
        self.0.insert(gv, types)
    }

    pub fn get(&self, gv: &GroupVersion) -> Option<&[String]> {
        self.0.get(gv).map(Vec::as_slice)
    }

    pub fn contains(&self, gv: &GroupVersion) -> bool {
        self.0.contains_key(gv)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over overrides in the order their group/versions were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupVersion, &[String])> {
        self.0.iter().map(|(gv, types)| (gv, types.as_slice()))
    }

    /// Decide whether `type_name` in `gv` receives a lister.
    ///
    /// `default_signal` is the scanner's own verdict and only matters when `gv`
    /// has no override. Names are compared exactly and case-sensitively.
    pub fn includes(&self, gv: &GroupVersion, type_name: &str, default_signal: bool) -> bool {
        match self.0.get(gv) {
            Some(types) => types.iter().any(|t| t == type_name),
            None => default_signal,
        }
    }

    /// Parse one token and store it, replacing any earlier list for the same group/version.
    pub fn add_token(&mut self, token: &str) -> Result<(), ConfigError> {
        let (gv, types) = parse_override(token)?;
        debug!(group_version = %gv, ?types, "parsed included types override");
        if let Some(previous) = self.insert(gv.clone(), types) {
            warn!(
                group_version = %gv,
                ?previous,
                "included types override given more than once; keeping the last one"
            );
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TypeInclusionOverrides {
    type Item = (&'a GroupVersion, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, GroupVersion, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parse a single `group/version=Type1,Type2,...` token.
pub fn parse_override(token: &str) -> Result<(GroupVersion, Vec<String>), ConfigError> {
    let malformed = |reason: String| ConfigError::MalformedOverride {
        token: token.to_string(),
        reason,
    };

    let (gv, types) = token
        .split_once('=')
        .ok_or_else(|| malformed("expected `group/version=Type,...`".to_string()))?;
    let gv: GroupVersion = gv.parse().map_err(|e| match e {
        ConfigError::InvalidGroupVersion { reason, .. } => malformed(reason),
        other => other,
    })?;

    if types.trim().is_empty() {
        return Err(malformed("no types listed".to_string()));
    }
    let types = types
        .split(',')
        .map(str::trim)
        .map(|name| {
            if name.is_empty() {
                Err(malformed("empty type name".to_string()))
            } else if name.contains(['=', '/']) {
                Err(malformed(format!("invalid type name {name:?}")))
            } else {
                Ok(name.to_string())
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((gv, types))
}

/// Parse override tokens in order. A later token for the same group/version wins.
pub fn parse_overrides<I, S>(tokens: I) -> Result<TypeInclusionOverrides, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut overrides = TypeInclusionOverrides::new();
    for token in tokens {
        overrides.add_token(token.as_ref())?;
    }
    Ok(overrides)
}
