//! Display strings and gauge positions for a wind load result.
//!
//! Pressure and load use 2 decimals, effective area 4, the area share and
//! speed conversions 1. Gauge fills are percentages capped at 100.

use serde::{Deserialize, Serialize};

use crate::numutils::percent_of;
use crate::wind::{SafetyBand, WindLoadResult, safety::CRITICAL_THRESHOLD};

/// Dynamic pressure at which the pressure bar is full [Pa].
pub const PRESSURE_BAR_FULL_SCALE: f64 = 3000.0;

/// Wind load at which the safety pointer reaches the end of the gauge [Pa].
pub const SAFETY_GAUGE_FULL_SCALE: f64 = CRITICAL_THRESHOLD;

/// Text and gauge state shown for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    pub wind_speed_kmh: String,
    pub wind_speed_mph: String,
    pub dynamic_pressure: String,
    pub effective_area: String,
    pub area_percentage: String,
    pub wind_load: String,
    /// Width of the dynamic pressure bar [%].
    #[serde(with = "crate::numutils::nonfinite")]
    pub pressure_bar_percent: f64,
    pub safety_band: SafetyBand,
    pub safety_label: String,
    pub safety_class: String,
    /// Left offset of the safety pointer on the gauge [%].
    #[serde(with = "crate::numutils::nonfinite")]
    pub safety_pointer_percent: f64,
}

impl Readout {
    pub fn from_result(result: &WindLoadResult) -> Self {
        let band = result.safety_level;
        Self {
            wind_speed_kmh: format!("= {:.1} km/h", result.wind_speed_kmh),
            wind_speed_mph: format!("= {:.1} mph", result.wind_speed_mph),
            dynamic_pressure: format!("{:.2}", result.dynamic_pressure),
            effective_area: format!("{:.4}", result.effective_area),
            area_percentage: format!("{:.1}", result.area_percentage),
            wind_load: format!("{:.2}", result.wind_load),
            pressure_bar_percent: pressure_bar_percent(result.dynamic_pressure),
            safety_band: band,
            safety_label: band.label().to_string(),
            safety_class: format!("safety-status {}", band.css_class()),
            safety_pointer_percent: safety_pointer_percent(result.wind_load),
        }
    }
}

/// Fill of the dynamic pressure bar [%].
pub fn pressure_bar_percent(dynamic_pressure: f64) -> f64 {
    percent_of(dynamic_pressure, PRESSURE_BAR_FULL_SCALE)
}

/// Position of the safety pointer along the gauge [%].
pub fn safety_pointer_percent(wind_load: f64) -> f64 {
    percent_of(wind_load, SAFETY_GAUGE_FULL_SCALE)
}

impl std::fmt::Display for Readout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Wind speed        {} ({})", self.wind_speed_kmh, self.wind_speed_mph)?;
        writeln!(
            f,
            "Dynamic pressure  {} Pa  [{:.1}%]",
            self.dynamic_pressure, self.pressure_bar_percent
        )?;
        writeln!(
            f,
            "Effective area    {} m²  ({}%)",
            self.effective_area, self.area_percentage
        )?;
        writeln!(f, "Wind load         {} Pa", self.wind_load)?;
        write!(
            f,
            "Safety            {}  [gauge {:.1}%]",
            self.safety_label, self.safety_pointer_percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wind::{WindLoadInputs, compute_wind_load};

    fn readout(ws: f64, rho: f64, area: f64, angle: f64) -> Readout {
        Readout::from_result(&compute_wind_load(&WindLoadInputs::new(ws, rho, area, angle)))
    }

    #[test]
    fn test_residential_readout() {
        let r = readout(30.0, 1.225, 1.65, 30.0);
        assert_eq!(r.wind_speed_kmh, "= 108.0 km/h");
        assert_eq!(r.wind_speed_mph, "= 67.1 mph");
        assert_eq!(r.dynamic_pressure, "551.25");
        assert_eq!(r.wind_load, "551.25");
        assert_eq!(r.effective_area, "0.8250");
        assert_eq!(r.area_percentage, "50.0");
        assert_eq!(r.safety_band, SafetyBand::Caution);
        assert_eq!(r.safety_class, "safety-status caution");
    }

    #[test]
    fn test_gauge_positions() {
        let r = readout(30.0, 1.225, 1.65, 30.0);
        assert!((r.pressure_bar_percent - 551.25 / 3000.0 * 100.0).abs() < 1e-9);
        assert!((r.safety_pointer_percent - 551.25 / 2400.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_pressure_bar_clamps() {
        assert_eq!(pressure_bar_percent(3000.0), 100.0);
        assert_eq!(pressure_bar_percent(12345.0), 100.0);
        // 80 m/s gives 3920 Pa
        let r = readout(80.0, 1.225, 1.65, 30.0);
        assert_eq!(r.pressure_bar_percent, 100.0);
        assert_eq!(r.safety_pointer_percent, 100.0);
        assert_eq!(r.safety_band, SafetyBand::Critical);
    }

    #[test]
    fn test_nan_readout() {
        let r = readout(f64::NAN, 1.225, 1.65, 30.0);
        assert_eq!(r.dynamic_pressure, "NaN");
        assert_eq!(r.wind_load, "NaN");
        assert_eq!(r.wind_speed_kmh, "= NaN km/h");
        assert!(r.pressure_bar_percent.is_nan());
        assert!(r.safety_pointer_percent.is_nan());
        assert_eq!(r.effective_area, "0.8250");
    }

    #[test]
    fn test_display_mentions_band() {
        let text = readout(50.0, 1.225, 1.65, 30.0).to_string();
        assert!(text.contains("1531.25 Pa"));
        assert!(text.contains("Dangerous"));
    }
}
