//! Calculator configuration.
//!
//! Stored as JSON. Every field is optional in the file; missing fields take
//! their default value.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::wind::WindLoadInputs;

/// Start-up values, slider ranges and validation mode of the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Control values at start-up.
    pub defaults: WindLoadInputs,
    /// Reject negative or non-numeric inputs instead of computing with them.
    pub strict: bool,
    /// Wind speed slider range [m/s].
    pub wind_speed_range: (f64, f64),
    /// Panel area slider range [m²].
    pub panel_area_range: (f64, f64),
    /// Installation angle slider range [°].
    pub install_angle_range: (f64, f64),
}

impl CalculatorConfig {
    pub fn new() -> Self {
        Self {
            defaults: WindLoadInputs::default(),
            strict: false,
            wind_speed_range: (0.0, 80.0),
            panel_area_range: (0.5, 5.0),
            install_angle_range: (0.0, 90.0),
        }
    }

    /// Checks that every slider range is ordered.
    pub fn validate(&self) -> Result<()> {
        for (name, (lo, hi)) in [
            ("wind_speed_range", self.wind_speed_range),
            ("panel_area_range", self.panel_area_range),
            ("install_angle_range", self.install_angle_range),
        ] {
            ensure!(lo <= hi, "Invalid {name}: min {lo} is above max {hi}");
        }
        if self.strict {
            self.defaults
                .validate()
                .context("Invalid default inputs in strict mode")?;
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a configuration from a JSON file.
pub fn read_config(path: &Path) -> Result<CalculatorConfig> {
    let file =
        File::open(path).with_context(|| format!("Failed to open config: {}", path.display()))?;
    let reader = BufReader::new(file);

    let config: CalculatorConfig = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    config.validate()?;

    Ok(config)
}

/// Parses a configuration from a JSON string.
pub fn config_from_str(json: &str) -> Result<CalculatorConfig> {
    let config: CalculatorConfig =
        serde_json::from_str(json).context("Failed to parse config from string")?;
    config.validate()?;
    Ok(config)
}
