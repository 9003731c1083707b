use rand::Rng;
use serde::Serialize;

use super::config::VizConfig;
use crate::numutils::{self, format_number, percent_of};
use crate::wind::WindLoadInputs;

/// Fewest wind arrows drawn, even in calm air.
pub const MIN_WIND_ARROWS: usize = 3;
/// Most wind arrows drawn.
pub const MAX_WIND_ARROWS: usize = 12;

/// Wind speed readout and bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindIndicator {
    pub label: String,
    /// Bar width [%].
    pub bar_percent: f64,
}

/// Angle label, marker line and arc of one angle widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngleIndicator {
    pub label: String,
    /// End of the marker line, if the widget has one.
    pub line_end: Option<(f64, f64)>,
    /// SVG path data of the arc.
    pub arc_path: String,
}

/// A straight SVG line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Panel rectangle in panel-group coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelShape {
    pub scale: f64,
    pub width: f64,
    pub height: f64,
    /// Left edge; the panel is centered on the pivot.
    pub x: f64,
    /// Two horizontal lines, then two vertical lines, splitting the panel 3×3.
    pub grid: Vec<Line>,
}

/// One animated wind arrow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindArrow {
    pub y: f64,
    /// Animation delay [s].
    pub delay: f64,
    /// Animation duration [s].
    pub duration: f64,
}

/// Everything the schematic needs for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub wind: WindIndicator,
    /// Rotation applied to the panel group.
    pub panel_transform: String,
    pub small_angle: AngleIndicator,
    pub main_angle: AngleIndicator,
    pub panel: PanelShape,
    pub arrows: Vec<WindArrow>,
}

impl Scene {
    pub fn new(inputs: &WindLoadInputs, config: &VizConfig, rng: &mut impl Rng) -> Self {
        Self {
            wind: wind_indicator(inputs.wind_speed, config.max_wind_speed),
            panel_transform: panel_transform(inputs.install_angle),
            small_angle: small_angle_indicator(inputs.install_angle),
            main_angle: main_angle_indicator(inputs.install_angle),
            panel: panel_shape(inputs.panel_area, config),
            arrows: wind_arrows(inputs.wind_speed, rng),
        }
    }
}

pub fn wind_indicator(wind_speed: f64, max_wind_speed: f64) -> WindIndicator {
    WindIndicator {
        label: format!("{wind_speed:.1}"),
        bar_percent: percent_of(wind_speed, max_wind_speed),
    }
}

/// Rotation of the panel group. The angle is written as given.
pub fn panel_transform(angle_deg: f64) -> String {
    format!("rotate(-{})", format_number(angle_deg))
}

fn large_arc_flag(angle_deg: f64) -> u8 {
    if angle_deg > 180.0 { 1 } else { 0 }
}

/// Angle widget next to the angle input.
///
/// The marker line starts at (10, 30) with length 25. The arc of radius 15
/// starts on the horizontal at (25, 30).
pub fn small_angle_indicator(angle_deg: f64) -> AngleIndicator {
    let rad = angle_deg * std::f64::consts::PI / 180.0;
    let end_x = 10.0 + 25.0 * rad.cos();
    let end_y = 30.0 - 25.0 * rad.sin();
    let arc_end_x = 10.0 + 15.0 * rad.cos();
    let arc_end_y = 30.0 - 15.0 * rad.sin();

    AngleIndicator {
        label: format!("{}°", format_number(angle_deg)),
        line_end: Some((end_x, end_y)),
        arc_path: format!(
            "M 25 30 A 15 15 0 {} 0 {} {}",
            large_arc_flag(angle_deg),
            format_number(arc_end_x),
            format_number(arc_end_y)
        ),
    }
}

/// Angle arc drawn on the schematic, radius 30 around (-50, 0).
pub fn main_angle_indicator(angle_deg: f64) -> AngleIndicator {
    let rad = angle_deg * std::f64::consts::PI / 180.0;
    let arc_end_x = -50.0 + 30.0 * rad.cos();
    let arc_end_y = -30.0 * rad.sin();

    AngleIndicator {
        label: format!("θ = {}°", format_number(angle_deg)),
        line_end: None,
        arc_path: format!(
            "M -20 0 A 30 30 0 {} 0 {} {}",
            large_arc_flag(angle_deg),
            format_number(arc_end_x),
            format_number(arc_end_y)
        ),
    }
}

/// Panel rectangle and grid, scaled so the drawn area tracks the panel area.
pub fn panel_shape(panel_area: f64, config: &VizConfig) -> PanelShape {
    let scale = (panel_area / config.reference_area).sqrt();
    let w = config.base_panel_width * scale;
    let h = config.base_panel_height * scale;

    let mut grid = Vec::with_capacity(4);
    for i in 0..2 {
        let y = -3.0 + (h / 3.0) * (i + 1) as f64;
        grid.push(Line {
            x1: -w / 2.0,
            y1: y,
            x2: w / 2.0,
            y2: y,
        });
    }
    for i in 2..4 {
        let x = -w / 2.0 + (w / 3.0) * (i - 1) as f64;
        grid.push(Line {
            x1: x,
            y1: -3.0,
            x2: x,
            y2: h - 3.0,
        });
    }

    PanelShape {
        scale,
        width: w,
        height: h,
        x: -w / 2.0,
        grid,
    }
}

/// Number of wind arrows: one per 5 m/s, clamped to 3..=12.
///
/// A NaN speed draws no arrows.
pub fn wind_arrow_count(wind_speed: f64) -> usize {
    if wind_speed.is_nan() {
        return 0;
    }
    (wind_speed / 5.0)
        .floor()
        .clamp(MIN_WIND_ARROWS as f64, MAX_WIND_ARROWS as f64) as usize
}

/// Animation duration of a wind arrow [s]. Faster wind, faster arrows,
/// never below 1 s.
pub fn wind_arrow_duration(wind_speed: f64) -> f64 {
    numutils::max(1.0, 3.0 - wind_speed / 30.0)
}

/// Wind arrows stacked from y = 80 in 15 px rows, with up to 10 px vertical
/// and 0.5 s timing jitter.
pub fn wind_arrows(wind_speed: f64, rng: &mut impl Rng) -> Vec<WindArrow> {
    let n = wind_arrow_count(wind_speed);
    let duration = wind_arrow_duration(wind_speed);

    (0..n)
        .map(|i| {
            let i = i as f64;
            WindArrow {
                y: 80.0 + i * 15.0 + rng.gen_range(0.0..10.0),
                delay: i * 0.3 + rng.gen_range(0.0..0.5),
                duration,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numutils::almost_equal;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_wind_indicator() {
        let w = wind_indicator(40.0, 80.0);
        assert_eq!(w.label, "40.0");
        assert!(almost_equal(w.bar_percent, 50.0, EPS));
        assert_eq!(wind_indicator(120.0, 80.0).bar_percent, 100.0);
    }

    #[test]
    fn test_panel_transform() {
        assert_eq!(panel_transform(30.0), "rotate(-30)");
        assert_eq!(panel_transform(12.5), "rotate(-12.5)");
    }

    #[test]
    fn test_small_angle_indicator() {
        let ind = small_angle_indicator(90.0);
        assert_eq!(ind.label, "90°");
        let (x, y) = ind.line_end.unwrap();
        assert!(almost_equal(x, 10.0, 1e-9));
        assert!(almost_equal(y, 5.0, 1e-9));
        assert!(ind.arc_path.starts_with("M 25 30 A 15 15 0 0 0 "));

        let ind = small_angle_indicator(0.0);
        assert_eq!(ind.arc_path, "M 25 30 A 15 15 0 0 0 25 30");
        assert_eq!(ind.line_end, Some((35.0, 30.0)));
    }

    #[test]
    fn test_main_angle_indicator() {
        let ind = main_angle_indicator(0.0);
        assert_eq!(ind.label, "θ = 0°");
        assert_eq!(ind.arc_path, "M -20 0 A 30 30 0 0 0 -20 0");
        assert!(ind.line_end.is_none());
    }

    #[test]
    fn test_large_arc_flag() {
        assert!(main_angle_indicator(180.0).arc_path.contains(" 0 0 0 "));
        assert!(main_angle_indicator(200.0).arc_path.contains(" 0 1 0 "));
        assert!(small_angle_indicator(270.0).arc_path.contains(" 0 1 0 "));
    }

    #[test]
    fn test_panel_shape_reference() {
        let shape = panel_shape(1.65, &VizConfig::new());
        assert!(almost_equal(shape.scale, 1.0, EPS));
        assert!(almost_equal(shape.width, 90.0, EPS));
        assert!(almost_equal(shape.height, 60.0, EPS));
        assert!(almost_equal(shape.x, -45.0, EPS));

        assert_eq!(shape.grid.len(), 4);
        assert!(almost_equal(shape.grid[0].y1, 17.0, EPS));
        assert!(almost_equal(shape.grid[1].y1, 37.0, EPS));
        assert!(almost_equal(shape.grid[2].x1, -15.0, EPS));
        assert!(almost_equal(shape.grid[3].x1, 15.0, EPS));
        assert!(almost_equal(shape.grid[3].y2, 57.0, EPS));
    }

    #[test]
    fn test_panel_shape_scales_with_sqrt_area() {
        let shape = panel_shape(1.65 * 4.0, &VizConfig::new());
        assert!(almost_equal(shape.scale, 2.0, EPS));
        assert!(almost_equal(shape.width, 180.0, EPS));
        assert!(almost_equal(shape.height, 120.0, EPS));
    }

    #[test]
    fn test_wind_arrow_count() {
        assert_eq!(wind_arrow_count(0.0), 3);
        assert_eq!(wind_arrow_count(14.9), 3);
        assert_eq!(wind_arrow_count(20.0), 4);
        assert_eq!(wind_arrow_count(30.0), 6);
        assert_eq!(wind_arrow_count(59.9), 11);
        assert_eq!(wind_arrow_count(60.0), 12);
        assert_eq!(wind_arrow_count(500.0), 12);
        assert_eq!(wind_arrow_count(-10.0), 3);
        assert_eq!(wind_arrow_count(f64::NAN), 0);
    }

    #[test]
    fn test_wind_arrow_duration() {
        assert!(almost_equal(wind_arrow_duration(0.0), 3.0, EPS));
        assert!(almost_equal(wind_arrow_duration(30.0), 2.0, EPS));
        assert_eq!(wind_arrow_duration(60.0), 1.0);
        assert_eq!(wind_arrow_duration(80.0), 1.0);
        assert!(wind_arrow_duration(f64::NAN).is_nan());
    }

    #[test]
    fn test_wind_arrows_jitter_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let arrows = wind_arrows(50.0, &mut rng);
        assert_eq!(arrows.len(), 10);
        for (i, a) in arrows.iter().enumerate() {
            let base_y = 80.0 + i as f64 * 15.0;
            assert!(a.y >= base_y && a.y < base_y + 10.0);
            let base_delay = i as f64 * 0.3;
            assert!(a.delay >= base_delay && a.delay < base_delay + 0.5);
            assert!((a.duration - (3.0 - 50.0 / 30.0)).abs() < EPS);
        }
    }

    #[test]
    fn test_scene_is_reproducible_with_seed() {
        let inputs = WindLoadInputs::default();
        let config = VizConfig::new();
        let a = Scene::new(&inputs, &config, &mut StdRng::seed_from_u64(1));
        let b = Scene::new(&inputs, &config, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
        assert_eq!(a.panel_transform, "rotate(-30)");
        assert_eq!(a.arrows.len(), 6);
    }
}
