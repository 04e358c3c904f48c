use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use workout_stats::commands::Cli;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let config = cli.load_config()?;

    // Initialize logging; stdout is reserved for reports
    let default_level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.execute(config)
}
