use anyhow::Result;
use clap::Args;

use super::report;
use crate::config::OutputFormat;
use crate::package::Package;

#[derive(Args, Default)]
pub struct DemoCommand {}

impl DemoCommand {
    pub fn execute(self, format: OutputFormat) -> Result<()> {
        report::run_packages(&Package::samples(), format)
    }
}
