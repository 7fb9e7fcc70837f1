//! Plural exceptions and the namer that consumes them.
//!
//! Generated identifiers use the plural of each type name (`PodLister` lists
//! `Pods`). The default English rules get irregular names wrong, so callers can
//! supply `Singular:Plural` exceptions such as `Endpoints:Endpoints`.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::ConfigError;

/// Manual pluralizations keyed by singular type name, in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralExceptions(IndexMap<String, String>);

impl PluralExceptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, singular: &str) -> Option<&str> {
        self.0.get(singular).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(s, p)| (s.as_str(), p.as_str()))
    }

    /// Parse one `Singular:Plural` entry and store it.
    ///
    /// A singular form may only be given once.
    pub fn add_entry(&mut self, entry: &str) -> Result<(), ConfigError> {
        let (singular, plural) = parse_plural_exception(entry)?;
        if self.0.contains_key(&singular) {
            return Err(ConfigError::DuplicatePluralException { singular });
        }
        debug!(%singular, %plural, "registered plural exception");
        self.0.insert(singular, plural);
        Ok(())
    }
}

/// Split a `Singular:Plural` entry into its two halves.
pub fn parse_plural_exception(entry: &str) -> Result<(String, String), ConfigError> {
    let malformed = || ConfigError::MalformedPluralException {
        entry: entry.to_string(),
    };

    let (singular, plural) = entry.split_once(':').ok_or_else(malformed)?;
    let (singular, plural) = (singular.trim(), plural.trim());
    if singular.is_empty() || plural.is_empty() || plural.contains(':') {
        return Err(malformed());
    }
    Ok((singular.to_string(), plural.to_string()))
}

/// Parse every entry, rejecting malformed pairs and repeated singulars.
pub fn parse_plural_exceptions<I, S>(entries: I) -> Result<PluralExceptions, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut exceptions = PluralExceptions::new();
    for entry in entries {
        exceptions.add_entry(entry.as_ref())?;
    }
    Ok(exceptions)
}

/// Pluralizes type names, preferring exceptions over the default rules.
#[derive(Debug, Clone, Copy)]
pub struct PluralNamer<'a> {
    exceptions: &'a PluralExceptions,
}

impl<'a> PluralNamer<'a> {
    pub fn new(exceptions: &'a PluralExceptions) -> Self {
        PluralNamer { exceptions }
    }

    /// Plural of `singular`, e.g. `Policy` -> `Policies`, `Endpoints:Endpoints` -> `Endpoints`.
    pub fn pluralize(&self, singular: &str) -> String {
        if let Some(plural) = self.exceptions.get(singular) {
            return plural.to_string();
        }

        let mut tail = singular.chars().rev();
        let (Some(last), Some(prev)) = (tail.next(), tail.next()) else {
            return singular.to_string();
        };
        // `last` and `prev` are ASCII in every arm that slices.
        match last {
            's' | 'x' | 'z' => format!("{singular}es"),
            'y' if is_consonant(prev) => format!("{}ies", &singular[..singular.len() - 1]),
            'h' if prev == 'c' || prev == 's' => format!("{singular}es"),
            'e' if prev == 'f' => format!("{}ves", &singular[..singular.len() - 2]),
            'f' => format!("{}ves", &singular[..singular.len() - 1]),
            _ => format!("{singular}s"),
        }
    }

    /// Plural with an upper-case first letter, for exported identifiers.
    pub fn public_name(&self, singular: &str) -> String {
        recase_first(&self.pluralize(singular), true)
    }

    /// Plural with a lower-case first letter, for unexported identifiers.
    pub fn private_name(&self, singular: &str) -> String {
        recase_first(&self.pluralize(singular), false)
    }
}

/// Only lower-case ASCII consonants count; digits, `_` and capitals do not.
fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn recase_first(name: &str, upper: bool) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if upper => first.to_uppercase().chain(chars).collect(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
