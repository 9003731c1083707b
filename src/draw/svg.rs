//! SVG rendering of the panel schematic.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;

use super::config::VizConfig;
use super::geometry::{AngleIndicator, Scene};
use crate::numutils::format_number;
use crate::wind::{WindLoadInputs, WindLoadResult};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Arrowhead marker shared by all wind arrows.
fn write_defs(out: &mut String, config: &VizConfig) -> Result<()> {
    writeln!(out, "  <defs>")?;
    writeln!(
        out,
        r#"    <marker id="arrowhead" markerWidth="10" markerHeight="7" refX="9" refY="3.5" orient="auto">"#
    )?;
    writeln!(
        out,
        r#"      <polygon points="0 0, 10 3.5, 0 7" fill="{}"/>"#,
        config.arrow_color
    )?;
    writeln!(out, "    </marker>")?;
    writeln!(out, "  </defs>")?;
    Ok(())
}

fn write_wind_arrows(out: &mut String, scene: &Scene, config: &VizConfig) -> Result<()> {
    writeln!(out, r#"  <g id="windArrows">"#)?;
    for arrow in &scene.arrows {
        let y = format_number(arrow.y);
        writeln!(
            out,
            r#"    <g class="wind-particle" style="animation-delay: {}s; animation-duration: {}s">"#,
            format_number(arrow.delay),
            format_number(arrow.duration)
        )?;
        writeln!(
            out,
            r#"      <line x1="0" y1="{y}" x2="30" y2="{y}" stroke="{}" stroke-width="2" marker-end="url(#arrowhead)"/>"#,
            config.arrow_color
        )?;
        writeln!(
            out,
            r#"      <text x="35" y="{}" fill="{}" font-size="10">→</text>"#,
            format_number(arrow.y + 4.0),
            config.text_color
        )?;
        writeln!(out, "    </g>")?;
    }
    writeln!(out, "  </g>")?;
    Ok(())
}

fn write_panel(out: &mut String, scene: &Scene, config: &VizConfig) -> Result<()> {
    let (ox, oy) = config.panel_origin;
    let panel = &scene.panel;
    writeln!(
        out,
        r#"  <g id="panelGroup" transform="translate({} {})">"#,
        format_number(ox),
        format_number(oy)
    )?;
    writeln!(
        out,
        r#"    <g transform="{}">"#,
        scene.panel_transform
    )?;
    writeln!(
        out,
        r#"      <rect id="solarPanel" x="{}" y="-3" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="2"/>"#,
        format_number(panel.x),
        format_number(panel.width),
        format_number(panel.height),
        config.panel_color,
        config.frame_color
    )?;
    writeln!(out, r#"      <g id="panelGrid">"#)?;
    for line in &panel.grid {
        writeln!(
            out,
            r#"        <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
            format_number(line.x1),
            format_number(line.y1),
            format_number(line.x2),
            format_number(line.y2),
            config.grid_color
        )?;
    }
    writeln!(out, "      </g>")?;
    writeln!(out, "    </g>")?;
    write_angle_arc(out, &scene.main_angle, config, "vizAngle", (-45.0, -8.0))?;
    writeln!(out, "  </g>")?;
    Ok(())
}

fn write_angle_arc(
    out: &mut String,
    indicator: &AngleIndicator,
    config: &VizConfig,
    id: &str,
    label_at: (f64, f64),
) -> Result<()> {
    if let Some((x2, y2)) = indicator.line_end {
        writeln!(
            out,
            r#"    <line id="{id}Line" x1="10" y1="30" x2="{}" y2="{}" stroke="{}" stroke-width="2"/>"#,
            format_number(x2),
            format_number(y2),
            config.angle_color
        )?;
    }
    writeln!(
        out,
        r#"    <path id="{id}Arc" d="{}" fill="none" stroke="{}" stroke-width="1.5"/>"#,
        indicator.arc_path, config.angle_color
    )?;
    writeln!(
        out,
        r#"    <text id="{id}Text" x="{}" y="{}" fill="{}" font-size="11">{}</text>"#,
        format_number(label_at.0),
        format_number(label_at.1),
        config.text_color,
        indicator.label
    )?;
    Ok(())
}

fn write_legend(
    out: &mut String,
    scene: &Scene,
    result: &WindLoadResult,
    config: &VizConfig,
) -> Result<()> {
    let bar_width = 100.0;
    let fill = (scene.wind.bar_percent / 100.0 * bar_width).max(0.0);
    writeln!(
        out,
        r#"  <text x="10" y="20" fill="{}" font-size="12">Wind <tspan id="vizWindSpeed">{}</tspan> m/s</text>"#,
        config.text_color, scene.wind.label
    )?;
    writeln!(
        out,
        r#"  <rect x="10" y="28" width="{}" height="6" fill="none" stroke="{}"/>"#,
        format_number(bar_width),
        config.frame_color
    )?;
    writeln!(
        out,
        r#"  <rect id="windSpeedBar" x="10" y="28" width="{}" height="6" fill="{}"/>"#,
        format_number(fill),
        config.arrow_color
    )?;

    let band = result.safety_level;
    writeln!(
        out,
        r#"  <text id="safetyStatus" class="safety-status {}" x="{}" y="20" text-anchor="end" fill="{}" font-size="12">{}</text>"#,
        band.css_class(),
        format_number(config.canvas_width - 10.0),
        band.color(),
        band.label()
    )?;

    // Inset angle widget
    writeln!(
        out,
        r#"  <g id="angleIndicator" transform="translate(10 {})">"#,
        format_number(config.canvas_height - 50.0)
    )?;
    write_angle_arc(out, &scene.small_angle, config, "angle", (40.0, 34.0))?;
    writeln!(out, "  </g>")?;
    Ok(())
}

/// Renders the schematic for `inputs` as a standalone SVG document.
pub fn render_svg(
    inputs: &WindLoadInputs,
    result: &WindLoadResult,
    config: &VizConfig,
    rng: &mut impl Rng,
) -> Result<String> {
    let scene = Scene::new(inputs, config, rng);
    let w = format_number(config.canvas_width);
    let h = format_number(config.canvas_height);

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg id="solarPanelViz" xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    write_defs(&mut out, config)?;
    writeln!(
        out,
        r#"  <rect width="{w}" height="{h}" fill="{}"/>"#,
        config.background_color
    )?;
    writeln!(
        out,
        r#"  <line x1="0" y1="{y}" x2="{w}" y2="{y}" stroke="{}" stroke-width="3"/>"#,
        config.ground_color,
        y = format_number(config.panel_origin.1 + 40.0)
    )?;
    write_wind_arrows(&mut out, &scene, config)?;
    write_panel(&mut out, &scene, config)?;
    write_legend(&mut out, &scene, result, config)?;
    writeln!(out, "</svg>")?;

    Ok(out)
}

/// Renders the schematic and writes it to `path`.
pub fn write_svg(
    path: &Path,
    inputs: &WindLoadInputs,
    result: &WindLoadResult,
    config: &VizConfig,
    rng: &mut impl Rng,
) -> Result<()> {
    let svg = render_svg(inputs, result, config, rng)?;
    fs::write(path, svg).with_context(|| format!("Failed to write SVG: {}", path.display()))?;
    log::info!("Wrote schematic to {}", path.display());
    Ok(())
}
