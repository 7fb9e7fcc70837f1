//! Generator flags.

use std::path::PathBuf;

use lister_gen::{ConfigError, GenerationConfig, parse_overrides, parse_plural_exceptions};

/// Flags consumed by the lister generator.
///
/// Can be embedded in other command Args using `#[command(flatten)]`.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct GeneratorArgs {
    /// The base directory under which to generate results
    #[arg(long)]
    pub output_dir: Option<String>,

    /// The base Go import-path under which to generate results
    #[arg(long)]
    pub output_pkg: Option<String>,

    /// The path to a file containing boilerplate header text; the string "YEAR" will be
    /// replaced with the current 4-digit year
    #[arg(long)]
    pub go_header_file: Option<String>,

    /// List of comma separated plural exception definitions in Type:PluralizedType format
    #[arg(long, value_delimiter = ',')]
    pub plural_exceptions: Vec<String>,

    /// Types to generate listers for, as group/version=Type,Type,... (repeatable).
    /// By default a lister is generated for every type marked for client generation.
    /// For each group/version given here, only the listed types are included; other
    /// group/versions keep the default.
    #[arg(long, value_name = "GROUP/VERSION=TYPES")]
    pub included_types_overrides: Vec<String>,
}

impl GeneratorArgs {
    /// Build the configuration from the raw flag values.
    ///
    /// Path flags are bound as plain strings so an empty value reaches the
    /// configuration as an empty path: no header, or a missing output directory.
    ///
    /// Malformed plural exceptions or overrides are rejected here, before
    /// [`GenerationConfig::validate`] runs.
    pub fn to_generation_config(&self) -> Result<GenerationConfig, ConfigError> {
        Ok(GenerationConfig {
            output_dir: PathBuf::from(self.output_dir.clone().unwrap_or_default()),
            output_pkg: self.output_pkg.clone().unwrap_or_default(),
            header_file: PathBuf::from(self.go_header_file.clone().unwrap_or_default()),
            plural_exceptions: parse_plural_exceptions(&self.plural_exceptions)?,
            included_types_overrides: parse_overrides(&self.included_types_overrides)?,
        })
    }
}
