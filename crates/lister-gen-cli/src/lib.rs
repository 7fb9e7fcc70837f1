pub mod args;

use clap::Parser;
use lister_gen::{ConfigError, GenerationConfig};

pub use args::GeneratorArgs;

#[derive(Parser, Debug)]
#[command(name = "lister-gen")]
#[command(about = "Generate listers for API resource types", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build and validate the configuration. The first defect found is returned.
    pub fn generation_config(&self) -> Result<GenerationConfig, ConfigError> {
        let config = self.generator.to_generation_config()?;
        config.validate()?;
        Ok(config)
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
