use serde::{Deserialize, Serialize};

/// Lower bound of the Caution band [Pa].
pub const CAUTION_THRESHOLD: f64 = 500.0;
/// Lower bound of the Dangerous band [Pa].
pub const DANGEROUS_THRESHOLD: f64 = 1200.0;
/// Lower bound of the Critical band [Pa]. Also the full scale of the gauge.
pub const CRITICAL_THRESHOLD: f64 = 2400.0;

/// Ordered risk category derived from the wind load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyBand {
    Safe,
    Caution,
    Dangerous,
    Critical,
}

impl SafetyBand {
    /// All bands in ascending order of risk.
    pub const ALL: [SafetyBand; 4] = [
        SafetyBand::Safe,
        SafetyBand::Caution,
        SafetyBand::Dangerous,
        SafetyBand::Critical,
    ];

    /// Status label shown on the gauge.
    pub fn label(&self) -> &'static str {
        match self {
            SafetyBand::Safe => "✓ 안전 (Safe)",
            SafetyBand::Caution => "⚠️ 주의 필요 (Caution)",
            SafetyBand::Dangerous => "⚠️ 위험 (Dangerous)",
            SafetyBand::Critical => "🚨 매우 위험 (Critical)",
        }
    }

    /// Style class of the status element.
    pub fn css_class(&self) -> &'static str {
        match self {
            SafetyBand::Safe => "safe",
            SafetyBand::Caution => "caution",
            SafetyBand::Dangerous => "danger",
            SafetyBand::Critical => "critical",
        }
    }

    /// Hex color of the band.
    pub fn color(&self) -> &'static str {
        match self {
            SafetyBand::Safe => "#10b981",
            SafetyBand::Caution => "#f59e0b",
            SafetyBand::Dangerous => "#f97316",
            SafetyBand::Critical => "#ef4444",
        }
    }
}

impl std::fmt::Display for SafetyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SafetyBand::Safe => "Safe",
            SafetyBand::Caution => "Caution",
            SafetyBand::Dangerous => "Dangerous",
            SafetyBand::Critical => "Critical",
        };
        write!(f, "{name}")
    }
}

/// Classifies a wind load [Pa] into a safety band.
///
/// The bands are half-open: `[0, 500)` Safe, `[500, 1200)` Caution,
/// `[1200, 2400)` Dangerous, `[2400, ∞)` Critical. Negative loads are Safe.
/// NaN fails every comparison and ends up Critical.
pub fn classify_safety(wind_load: f64) -> SafetyBand {
    if wind_load < CAUTION_THRESHOLD {
        SafetyBand::Safe
    } else if wind_load < DANGEROUS_THRESHOLD {
        SafetyBand::Caution
    } else if wind_load < CRITICAL_THRESHOLD {
        SafetyBand::Dangerous
    } else {
        SafetyBand::Critical
    }
}
