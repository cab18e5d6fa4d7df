use super::OutputFormat;
use super::report::{self, ProjectReport};
use crate::core::yields::ProjectInputs;
use anyhow::Result;
use tracing::info;

/// Evaluates a single project given directly on the command line.
pub fn run(
    name: &str,
    inputs: &ProjectInputs,
    currency: &str,
    offsets: &[i32],
    format: OutputFormat,
) -> Result<()> {
    inputs.validate()?;
    info!(project = name, "Calculating development yield");

    let report = ProjectReport::new(name, currency, inputs, offsets);
    match format {
        OutputFormat::Table => report::display(&report),
        OutputFormat::Json => report::print_json(&report)?,
    }
    Ok(())
}
