use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Standard sea-level air density [kg/m³].
pub const STANDARD_AIR_DENSITY: f64 = 1.225;

/// Reference panel area of a typical residential module [m²].
pub const REFERENCE_PANEL_AREA: f64 = 1.65;

/// The four scalar inputs of a wind load calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindLoadInputs {
    /// Wind speed in m/s.
    #[serde(with = "crate::numutils::nonfinite")]
    pub wind_speed: f64,
    /// Air density in kg/m³.
    #[serde(with = "crate::numutils::nonfinite")]
    pub air_density: f64,
    /// Panel area in m².
    #[serde(with = "crate::numutils::nonfinite")]
    pub panel_area: f64,
    /// Installation (tilt) angle in degrees from horizontal.
    #[serde(with = "crate::numutils::nonfinite")]
    pub install_angle: f64,
}

impl WindLoadInputs {
    pub fn new(wind_speed: f64, air_density: f64, panel_area: f64, install_angle: f64) -> Self {
        Self {
            wind_speed,
            air_density,
            panel_area,
            install_angle,
        }
    }

    /// Installation angle in radians.
    pub fn angle_rad(&self) -> f64 {
        self.install_angle * std::f64::consts::PI / 180.0
    }

    /// Rejects inputs that have no physical meaning.
    ///
    /// The engine itself accepts anything and lets NaN propagate. This check
    /// is only applied in strict mode.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.wind_speed.is_finite(),
            "Wind speed is not a number: {}",
            self.wind_speed
        );
        ensure!(
            self.air_density.is_finite(),
            "Air density is not a number: {}",
            self.air_density
        );
        ensure!(
            self.panel_area.is_finite(),
            "Panel area is not a number: {}",
            self.panel_area
        );
        ensure!(
            self.install_angle.is_finite(),
            "Install angle is not a number: {}",
            self.install_angle
        );
        ensure!(
            self.wind_speed >= 0.0,
            "Wind speed must be non-negative, got {} m/s",
            self.wind_speed
        );
        ensure!(
            self.air_density >= 0.0,
            "Air density must be non-negative, got {} kg/m³",
            self.air_density
        );
        ensure!(
            self.panel_area > 0.0,
            "Panel area must be positive, got {} m²",
            self.panel_area
        );
        Ok(())
    }
}

impl Default for WindLoadInputs {
    fn default() -> Self {
        Self::new(30.0, STANDARD_AIR_DENSITY, REFERENCE_PANEL_AREA, 30.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let inputs = WindLoadInputs::default();
        assert_eq!(inputs.wind_speed, 30.0);
        assert_eq!(inputs.air_density, 1.225);
        assert_eq!(inputs.panel_area, 1.65);
        assert_eq!(inputs.install_angle, 30.0);
    }

    #[test]
    fn test_angle_rad() {
        let inputs = WindLoadInputs::new(0.0, 1.225, 1.0, 90.0);
        assert!((inputs.angle_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_validate_accepts_typical_inputs() {
        assert!(WindLoadInputs::default().validate().is_ok());
        assert!(WindLoadInputs::new(0.0, 0.0, 0.1, 400.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_speed() {
        let err = WindLoadInputs::new(-1.0, 1.225, 1.65, 30.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("Wind speed"));
    }

    #[test]
    fn test_validate_rejects_bad_area() {
        assert!(WindLoadInputs::new(10.0, 1.225, 0.0, 30.0).validate().is_err());
        assert!(WindLoadInputs::new(10.0, 1.225, -2.0, 30.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(WindLoadInputs::new(f64::NAN, 1.225, 1.65, 30.0).validate().is_err());
        assert!(WindLoadInputs::new(10.0, 1.225, 1.65, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_density() {
        assert!(WindLoadInputs::new(10.0, -0.1, 1.65, 30.0).validate().is_err());
    }
}
