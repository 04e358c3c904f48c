mod batch;
mod calc;
mod config_cmd;
mod demo;
pub mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, OutputFormat};

pub use batch::{load_packages, BatchCommand};
pub use calc::CalcCommand;
pub use demo::DemoCommand;

#[derive(Parser)]
#[command(name = "workout-stats")]
#[command(about = "Workout statistics from running, walking and swimming sensor data", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(long, global = true, env = "WORKOUT_STATS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the built-in sample packages (default)
    Demo(DemoCommand),

    /// Report a single package given on the command line
    Calc(CalcCommand),

    /// Report every package in a JSON file
    Batch(BatchCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Load the configuration this invocation runs with.
    ///
    /// `config init` starts from defaults so it can create a missing file.
    pub fn load_config(&self) -> Result<Config> {
        if self.is_config_init() {
            return Ok(Config::default());
        }
        Config::load(self.config.as_deref())
    }

    fn is_config_init(&self) -> bool {
        matches!(
            self.command,
            Some(Commands::Config(ConfigSubcommands::Init { .. }))
        )
    }

    pub fn execute(self, config: Config) -> Result<()> {
        if self.verbose {
            tracing::info!("Verbose mode enabled");
        }

        match &config.loaded_from {
            Some(path) => tracing::debug!("Loaded config from {}", path.display()),
            None if self.config.is_none() && !self.is_config_init() => {
                tracing::info!("Config file not found, using defaults")
            }
            None => {}
        }

        let format = self.format.unwrap_or(config.output.format);

        match self.command.unwrap_or(Commands::Demo(DemoCommand::default())) {
            Commands::Demo(cmd) => cmd.execute(format),
            Commands::Calc(cmd) => cmd.execute(format),
            Commands::Batch(cmd) => cmd.execute(format),
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(&config),
                ConfigSubcommands::Init { force } => {
                    config_cmd::init_config(self.config.as_deref(), force)
                }
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
