//! Configuration for lister generation.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::group_version::GroupVersion;
use crate::overrides::TypeInclusionOverrides;
use crate::plural::{PluralExceptions, PluralNamer};

/// Configuration for lister generation.
///
/// Built once per invocation, validated once, then handed to the generator
/// unchanged. Use the builder pattern to construct it programmatically:
///
/// ```
/// use lister_gen::GenerationConfig;
///
/// let config = GenerationConfig::builder()
///     .output_dir("pkg/client/listers")
///     .output_pkg("example.com/project/pkg/client/listers")
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct GenerationConfig {
    /// Base directory under which to generate results.
    #[builder(default, into)]
    pub output_dir: PathBuf,

    /// Base import path under which to generate results.
    #[builder(default, into)]
    pub output_pkg: String,

    /// File holding boilerplate header text. Empty means no header.
    ///
    /// The emitter replaces the literal `YEAR` in its contents with the current
    /// year, so the path is kept exactly as given.
    #[builder(default, into)]
    pub header_file: PathBuf,

    /// Exceptions to the default pluralization rules.
    #[builder(default)]
    pub plural_exceptions: PluralExceptions,

    /// Group/versions whose eligible types are listed explicitly.
    #[builder(default)]
    pub included_types_overrides: TypeInclusionOverrides,
}

impl GenerationConfig {
    /// An empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the required fields are set.
    ///
    /// Reports only the first problem found. Plural exceptions and type overrides
    /// are not checked against the scanned types here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingOutputDirectory);
        }
        if self.output_pkg.is_empty() {
            return Err(ConfigError::MissingOutputPackage);
        }
        Ok(())
    }

    pub fn header_file(&self) -> Option<&Path> {
        if self.header_file.as_os_str().is_empty() {
            None
        } else {
            Some(self.header_file.as_path())
        }
    }

    /// Whether `type_name` in `gv` receives a lister.
    ///
    /// See [`TypeInclusionOverrides::includes`].
    pub fn includes_type(
        &self,
        gv: &GroupVersion,
        type_name: &str,
        default_signal: bool,
    ) -> bool {
        self.included_types_overrides.includes(gv, type_name, default_signal)
    }

    pub fn plural_namer(&self) -> PluralNamer<'_> {
        PluralNamer::new(&self.plural_exceptions)
    }
}
