pub mod calculator;
pub mod config;
pub mod draw;
pub mod io;
pub mod logger;
pub mod numutils;
pub mod readout;
pub mod wind;

// Prelude
pub use calculator::{Calculator, Frame, InputEvent, Quantity};
pub use config::CalculatorConfig;
pub use readout::Readout;
pub use wind::{
    SafetyBand, Scenario, WindLoadInputs, WindLoadResult, classify_safety, compute_wind_load,
    compute_wind_load_strict,
};
