use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;

pub fn show_config(config: &Config) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

    println!("Current Configuration");
    println!();
    print!("{}", contents);

    Ok(())
}

pub fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let config_file = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_file()?,
    };

    if config_file.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            config_file.display()
        );
    }

    let written = Config::default().save(Some(&config_file))?;
    println!("✓ Configuration written to {}", written.display());

    Ok(())
}
