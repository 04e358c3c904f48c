use anyhow::{Context, Result};

use crate::config::OutputFormat;
use crate::models::Training;
use crate::package::Package;

/// Render one training as a single output line
pub fn render(training: &dyn Training, format: OutputFormat) -> Result<String> {
    let info = training
        .show_training_info()
        .with_context(|| format!("Failed to summarise {} workout", training.code()))?;

    match format {
        OutputFormat::Text => Ok(info.message()),
        OutputFormat::Json => {
            serde_json::to_string(&info).context("Failed to serialize workout summary")
        }
    }
}

/// Dispatch and render every package, in input order.
///
/// Nothing is printed unless all packages succeed.
pub fn run_packages(packages: &[Package], format: OutputFormat) -> Result<()> {
    let trainings = packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            package
                .read()
                .with_context(|| format!("Package #{} ({}) rejected", index + 1, package.code))
        })
        .collect::<Result<Vec<_>>>()?;

    print_trainings(&trainings, format)
}

/// Render every training, then print them all
pub fn print_trainings(trainings: &[Box<dyn Training>], format: OutputFormat) -> Result<()> {
    let lines = trainings
        .iter()
        .map(|training| render(training.as_ref(), format))
        .collect::<Result<Vec<_>>>()?;

    for line in lines {
        println!("{}", line);
    }

    tracing::debug!("Reported {} workouts", trainings.len());

    Ok(())
}
