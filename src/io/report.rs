//! JSON calculation reports.
//!
//! A report captures one calculation: the inputs, the derived figures and
//! the formatted readout, plus the scenario name when one was used.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::readout::Readout;
use crate::wind::{Scenario, WindLoadInputs, WindLoadResult, compute_wind_load};

/// One calculation, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<Scenario>,
    pub inputs: WindLoadInputs,
    pub result: WindLoadResult,
    pub readout: Readout,
}

impl Report {
    /// Runs the calculation for `inputs` and wraps it in a report.
    pub fn new(inputs: WindLoadInputs, scenario: Option<Scenario>) -> Self {
        let result = compute_wind_load(&inputs);
        Self {
            scenario,
            inputs,
            readout: Readout::from_result(&result),
            result,
        }
    }
}

/// Writes a report to a JSON file.
///
/// # Example
/// ```no_run
/// use windload::io::{Report, write_report};
/// use windload::WindLoadInputs;
/// use std::path::Path;
///
/// let report = Report::new(WindLoadInputs::default(), None);
/// write_report(Path::new("report.json"), &report).unwrap();
/// ```
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report)
        .with_context(|| format!("Failed to serialize report to: {}", path.display()))?;

    Ok(())
}

/// Reads a report from a JSON file.
pub fn read_report(path: &Path) -> Result<Report> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let report: Report = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize report from: {}", path.display()))?;

    Ok(report)
}

/// Serializes a report to a pretty JSON string.
pub fn to_report_string(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report to string")
}
