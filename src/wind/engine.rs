use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::inputs::WindLoadInputs;
use super::safety::{SafetyBand, classify_safety};

/// Conversion factor from m/s to km/h.
pub const MS_TO_KMH: f64 = 3.6;
/// Conversion factor from m/s to mph, as displayed by the calculator.
pub const MS_TO_MPH: f64 = 2.237;

/// Figures derived from a [`WindLoadInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindLoadResult {
    /// Dynamic pressure `0.5 * rho * v^2` [Pa].
    #[serde(with = "crate::numutils::nonfinite")]
    pub dynamic_pressure: f64,
    /// Panel area projected into the wind, `A * sin(theta)` [m²].
    #[serde(with = "crate::numutils::nonfinite")]
    pub effective_area: f64,
    /// Load used for the safety classification [Pa].
    #[serde(with = "crate::numutils::nonfinite")]
    pub wind_load: f64,
    /// Effective area as a share of the panel area [%].
    #[serde(with = "crate::numutils::nonfinite")]
    pub area_percentage: f64,
    /// Wind speed in km/h.
    #[serde(with = "crate::numutils::nonfinite")]
    pub wind_speed_kmh: f64,
    /// Wind speed in mph.
    #[serde(with = "crate::numutils::nonfinite")]
    pub wind_speed_mph: f64,
    /// Safety band of `wind_load`.
    pub safety_level: SafetyBand,
}

/// Computes the wind load figures.
///
/// No validation is done. A NaN in any input shows up as NaN in every output
/// that depends on it.
///
/// The load is taken equal to the dynamic pressure. The effective area is
/// reported but does not scale the load.
pub fn compute_wind_load(inputs: &WindLoadInputs) -> WindLoadResult {
    let angle_rad = inputs.angle_rad();

    let dynamic_pressure = 0.5 * inputs.air_density * inputs.wind_speed.powi(2);
    let effective_area = inputs.panel_area * angle_rad.sin();
    let wind_load = dynamic_pressure;

    let wind_speed_kmh = inputs.wind_speed * MS_TO_KMH;
    let wind_speed_mph = inputs.wind_speed * MS_TO_MPH;

    let area_percentage = (effective_area / inputs.panel_area) * 100.0;

    WindLoadResult {
        dynamic_pressure,
        effective_area,
        wind_load,
        area_percentage,
        wind_speed_kmh,
        wind_speed_mph,
        safety_level: classify_safety(wind_load),
    }
}

/// Validates the inputs, then computes the wind load figures.
pub fn compute_wind_load_strict(inputs: &WindLoadInputs) -> Result<WindLoadResult> {
    inputs.validate()?;
    Ok(compute_wind_load(inputs))
}
