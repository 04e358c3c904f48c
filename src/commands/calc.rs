use anyhow::{Context, Result};
use clap::Args;

use super::report;
use crate::config::OutputFormat;
use crate::package::read_package;

#[derive(Args)]
pub struct CalcCommand {
    /// Activity code (RUN, WLK or SWM)
    code: String,

    /// Sensor values in order: action, duration, weight, then height (WLK)
    /// or pool length and lap count (SWM)
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,
}

impl CalcCommand {
    pub fn execute(self, format: OutputFormat) -> Result<()> {
        let training = read_package(&self.code, &self.values)
            .with_context(|| format!("Package ({}) rejected", self.code))?;

        report::print_trainings(&[training], format)
    }
}
