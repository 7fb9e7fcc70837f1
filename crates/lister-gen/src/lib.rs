//! Configuration for lister code generation.
//!
//! This crate decides, for each API group/version, which resource types get a
//! generated lister, and validates the generator inputs before any code is
//! emitted.
//!
//! # Types
//!
//! ## Configuration
//!
//! - [`GenerationConfig`] - Generator inputs and their validation
//! - [`ConfigError`] - Configuration defects
//!
//! ## Type Selection
//!
//! - [`GroupVersion`] - API group and version key
//! - [`TypeInclusionOverrides`] - Per group/version lists of eligible types
//!
//! ## Naming
//!
//! - [`PluralExceptions`] - Manual `Singular:Plural` overrides
//! - [`PluralNamer`] - Pluralizes type names for generated identifiers

mod config;
mod error;
mod group_version;
mod overrides;
mod plural;

pub use config::*;
pub use error::*;
pub use group_version::*;
pub use overrides::*;
pub use plural::*;
