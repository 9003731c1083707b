use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use super::inputs::WindLoadInputs;

/// Named installation scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Residential,
    Commercial,
    Typhoon,
    #[serde(rename = "flatroof")]
    FlatRoof,
}

/// Wind speed, panel area and angle set together by a scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioPreset {
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Panel area in m².
    pub panel_area: f64,
    /// Installation angle in degrees.
    pub install_angle: f64,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Residential,
        Scenario::Commercial,
        Scenario::Typhoon,
        Scenario::FlatRoof,
    ];

    /// Lookup key of the scenario.
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Residential => "residential",
            Scenario::Commercial => "commercial",
            Scenario::Typhoon => "typhoon",
            Scenario::FlatRoof => "flatroof",
        }
    }

    /// Finds a scenario by its lookup key. Keys are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn preset(&self) -> ScenarioPreset {
        let (wind_speed, panel_area, install_angle) = match self {
            Scenario::Residential => (30.0, 1.65, 30.0),
            Scenario::Commercial => (30.0, 2.0, 30.0),
            Scenario::Typhoon => (50.0, 1.65, 30.0),
            Scenario::FlatRoof => (30.0, 1.65, 10.0),
        };
        ScenarioPreset {
            wind_speed,
            panel_area,
            install_angle,
        }
    }

    /// Full input set for this scenario. Air density is not part of a
    /// scenario and is passed through.
    pub fn inputs(&self, air_density: f64) -> WindLoadInputs {
        let p = self.preset();
        WindLoadInputs::new(p.wind_speed, air_density, p.panel_area, p.install_angle)
    }
}

impl FromStr for Scenario {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match Self::from_name(s) {
            Some(scenario) => Ok(scenario),
            None => bail!(
                "Unknown scenario '{s}', expected one of: {}",
                Self::ALL.map(|s| s.name()).join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
