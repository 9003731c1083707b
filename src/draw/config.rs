/// Configuration for the panel schematic.
///
/// Controls the canvas size, the reference panel footprint and the colors
/// used by the SVG renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct VizConfig {
    // Canvas
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Pivot of the panel group in canvas coordinates.
    pub panel_origin: (f64, f64),

    // Panel footprint
    /// Drawn width of a panel of `reference_area` m².
    pub base_panel_width: f64,
    /// Drawn height of a panel of `reference_area` m².
    pub base_panel_height: f64,
    pub reference_area: f64,

    // Gauges
    /// Wind speed at which the wind bar is full [m/s].
    pub max_wind_speed: f64,

    // Colors
    pub background_color: String,
    pub panel_color: String,
    pub frame_color: String,
    pub grid_color: String,
    pub ground_color: String,
    pub arrow_color: String,
    pub text_color: String,
    pub angle_color: String,
}

impl VizConfig {
    pub fn new() -> Self {
        Self {
            canvas_width: 400.0,
            canvas_height: 300.0,
            panel_origin: (230.0, 220.0),

            base_panel_width: 90.0,
            base_panel_height: 60.0,
            reference_area: 1.65,

            max_wind_speed: 80.0,

            background_color: "#f8fafc".to_string(),
            panel_color: "#1e3a8a".to_string(),
            frame_color: "#94a3b8".to_string(),
            grid_color: "#60a5fa".to_string(),
            ground_color: "#64748b".to_string(),
            arrow_color: "#2563eb".to_string(),
            text_color: "#475569".to_string(),
            angle_color: "#f59e0b".to_string(),
        }
    }
}

impl Default for VizConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VizConfig::new();
        assert_eq!(config.base_panel_width, 90.0);
        assert_eq!(config.base_panel_height, 60.0);
        assert_eq!(config.reference_area, 1.65);
        assert_eq!(config.max_wind_speed, 80.0);
    }

    #[test]
    fn test_default_trait() {
        assert_eq!(VizConfig::default(), VizConfig::new());
    }
}
