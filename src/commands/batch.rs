use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use super::report;
use crate::config::OutputFormat;
use crate::package::Package;

#[derive(Args)]
pub struct BatchCommand {
    /// JSON file holding an array of {"code": ..., "data": [...]} packages
    file: PathBuf,
}

impl BatchCommand {
    pub fn execute(self, format: OutputFormat) -> Result<()> {
        let packages = load_packages(&self.file)?;
        tracing::info!("Loaded {} packages from {}", packages.len(), self.file.display());

        report::run_packages(&packages, format)
    }
}

/// Read a batch of sensor packages from a JSON file
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;

    serde_json::from_str(&contents).context("Failed to parse batch file")
}
