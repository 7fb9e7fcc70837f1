use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lister_gen_cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.generation_config()?;

    info!(
        output_dir = %config.output_dir.display(),
        output_pkg = %config.output_pkg,
        header_file = ?config.header_file(),
        plural_exceptions = config.plural_exceptions.len(),
        overrides = config.included_types_overrides.len(),
        "configuration validated"
    );
    for (gv, types) in &config.included_types_overrides {
        debug!(group_version = %gv, ?types, "only listed types will get listers");
    }

    Ok(())
}
