//! Control state of the calculator and the change handlers that drive it.
//!
//! Wind speed, panel area and installation angle each have a slider and a
//! number field. A change to either copies the value to its sibling and
//! recomputes once; the sibling's own handler is not triggered. A slider
//! change copies its clamped value, so after it both controls agree. A field
//! keeps what was typed while the slider clamps it, and calculation reads the
//! sliders, so an out-of-range field value is computed at the nearest slider
//! bound. Air density has a single field.

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::config::CalculatorConfig;
use crate::draw::{Scene, VizConfig};
use crate::numutils::{format_number, parse_float};
use crate::readout::Readout;
use crate::wind::{Scenario, WindLoadInputs, WindLoadResult, compute_wind_load};

/// Quantities that have a slider/field pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    WindSpeed,
    PanelArea,
    InstallAngle,
}

/// A change event coming from one control.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Slider(Quantity, String),
    Field(Quantity, String),
    AirDensity(String),
    /// Panel-size button carrying an area value.
    PanelPreset(String),
    /// Scenario button carrying a scenario name.
    Scenario(String),
}

/// A slider and a number field bound to the same quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedControl {
    slider: String,
    field: String,
    range: (f64, f64),
}

impl PairedControl {
    fn new(value: f64, range: (f64, f64)) -> Self {
        let mut control = Self {
            slider: String::new(),
            field: format_number(value),
            range,
        };
        control.write_slider(&format_number(value));
        control
    }

    /// Current slider value.
    pub fn slider(&self) -> &str {
        &self.slider
    }

    /// Current number field value.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Value used by the calculation.
    pub fn value(&self) -> f64 {
        parse_float(&self.slider)
    }

    /// Sliders keep numeric values inside their range. Non-numeric text is
    /// stored as is and reads back as NaN.
    fn write_slider(&mut self, raw: &str) {
        let v = parse_float(raw);
        self.slider = if v.is_nan() {
            raw.to_string()
        } else {
            format_number(v.clamp(self.range.0, self.range.1))
        };
    }

    fn set_both(&mut self, raw: &str) {
        self.field = raw.to_string();
        self.write_slider(raw);
    }
}

/// State shown after the last recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub inputs: WindLoadInputs,
    pub result: WindLoadResult,
    pub readout: Readout,
    pub scene: Scene,
}

/// The calculator: controls, last frame and the handlers between them.
pub struct Calculator {
    config: CalculatorConfig,
    viz: VizConfig,
    wind_speed: PairedControl,
    panel_area: PairedControl,
    install_angle: PairedControl,
    air_density: String,
    rng: StdRng,
    frame: Frame,
    recomputations: usize,
}

impl Calculator {
    /// Creates the calculator with its default control values and runs the
    /// start-up calculation.
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        Self::with_rng(config, VizConfig::new(), StdRng::from_entropy())
    }

    /// Same as [`Calculator::new`] with reproducible wind arrow jitter.
    pub fn with_seed(config: CalculatorConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, VizConfig::new(), StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: CalculatorConfig, viz: VizConfig, mut rng: StdRng) -> Result<Self> {
        config.validate()?;
        let d = config.defaults;
        let wind_speed = PairedControl::new(d.wind_speed, config.wind_speed_range);
        let panel_area = PairedControl::new(d.panel_area, config.panel_area_range);
        let install_angle = PairedControl::new(d.install_angle, config.install_angle_range);
        let air_density = format_number(d.air_density);

        let inputs = WindLoadInputs::new(
            wind_speed.value(),
            parse_float(&air_density),
            panel_area.value(),
            install_angle.value(),
        );
        let frame = Self::build_frame(&config, &viz, &inputs, &mut rng)?;
        log::debug!("Start-up calculation: {:?}", frame.result);

        Ok(Self {
            config,
            viz,
            wind_speed,
            panel_area,
            install_angle,
            air_density,
            rng,
            frame,
            recomputations: 1,
        })
    }

    fn build_frame(
        config: &CalculatorConfig,
        viz: &VizConfig,
        inputs: &WindLoadInputs,
        rng: &mut StdRng,
    ) -> Result<Frame> {
        if config.strict {
            inputs.validate()?;
        }
        let result = compute_wind_load(inputs);
        Ok(Frame {
            inputs: *inputs,
            result,
            readout: Readout::from_result(&result),
            scene: Scene::new(inputs, viz, rng),
        })
    }

    pub fn control(&self, quantity: Quantity) -> &PairedControl {
        match quantity {
            Quantity::WindSpeed => &self.wind_speed,
            Quantity::PanelArea => &self.panel_area,
            Quantity::InstallAngle => &self.install_angle,
        }
    }

    fn control_mut(&mut self, quantity: Quantity) -> &mut PairedControl {
        match quantity {
            Quantity::WindSpeed => &mut self.wind_speed,
            Quantity::PanelArea => &mut self.panel_area,
            Quantity::InstallAngle => &mut self.install_angle,
        }
    }

    pub fn air_density(&self) -> &str {
        &self.air_density
    }

    /// Current control values as calculation inputs.
    pub fn inputs(&self) -> WindLoadInputs {
        WindLoadInputs::new(
            self.wind_speed.value(),
            parse_float(&self.air_density),
            self.panel_area.value(),
            self.install_angle.value(),
        )
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Number of calculations run so far, the start-up one included.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Applies one change event and recomputes.
    ///
    /// In strict mode invalid inputs return an error and the previous frame
    /// stays on display. The control values keep what was typed.
    pub fn handle(&mut self, event: InputEvent) -> Result<&Frame> {
        match event {
            InputEvent::Slider(q, raw) => {
                // The field shows the slider's value after range clamping
                let control = self.control_mut(q);
                control.write_slider(&raw);
                control.field = control.slider.clone();
            }
            InputEvent::Field(q, raw) => {
                let control = self.control_mut(q);
                control.write_slider(&raw);
                control.field = raw;
            }
            InputEvent::AirDensity(raw) => {
                self.air_density = raw;
                // Density does not change the schematic
                return self.recompute_figures();
            }
            InputEvent::PanelPreset(area) => {
                self.panel_area.set_both(&area);
            }
            InputEvent::Scenario(name) => match Scenario::from_name(&name) {
                Some(scenario) => self.apply_scenario(scenario),
                None => {
                    log::warn!("Ignoring unknown scenario '{name}'");
                    return Ok(&self.frame);
                }
            },
        }
        self.recompute()
    }

    /// Sets wind speed, area and angle from a scenario in one step.
    fn apply_scenario(&mut self, scenario: Scenario) {
        let p = scenario.preset();
        self.wind_speed.set_both(&format_number(p.wind_speed));
        self.panel_area.set_both(&format_number(p.panel_area));
        self.install_angle.set_both(&format_number(p.install_angle));
        log::debug!("Loaded scenario {scenario}");
    }

    fn recompute(&mut self) -> Result<&Frame> {
        let inputs = self.inputs();
        let frame = Self::build_frame(&self.config, &self.viz, &inputs, &mut self.rng)
            .inspect_err(|e| log::warn!("Rejected inputs: {e}"))?;
        self.frame = frame;
        self.recomputations += 1;
        log::debug!("Recomputed: {:?}", self.frame.result);
        Ok(&self.frame)
    }

    fn recompute_figures(&mut self) -> Result<&Frame> {
        let inputs = self.inputs();
        if self.config.strict {
            inputs
                .validate()
                .inspect_err(|e| log::warn!("Rejected inputs: {e}"))?;
        }
        let result = compute_wind_load(&inputs);
        self.frame.inputs = inputs;
        self.frame.result = result;
        self.frame.readout = Readout::from_result(&result);
        self.recomputations += 1;
        log::debug!("Recomputed: {:?}", self.frame.result);
        Ok(&self.frame)
    }
}
