//! Errors raised while populating or validating a [`GenerationConfig`](crate::GenerationConfig).

/// A static configuration defect. Every variant is fatal to the run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("--output-dir must be specified")]
    MissingOutputDirectory,
    #[error("--output-pkg must be specified")]
    MissingOutputPackage,
    #[error("invalid group/version {input:?}: {reason}")]
    InvalidGroupVersion { input: String, reason: String },
    #[error("invalid included types override {token:?}: {reason}")]
    MalformedOverride { token: String, reason: String },
    #[error("invalid plural exception {entry:?}: expected `Type:PluralizedType`")]
    MalformedPluralException { entry: String },
    #[error("plural exception for {singular:?} is defined more than once")]
    DuplicatePluralException { singular: String },
}
