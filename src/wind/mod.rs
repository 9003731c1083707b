//! Wind load on a tilted solar panel.
//!
//! The engine is a set of pure functions: [`compute_wind_load`] maps the four
//! scalar inputs to the derived figures and [`classify_safety`] bands the
//! resulting load. Nothing here holds state.

pub mod engine;
pub mod inputs;
pub mod safety;
pub mod scenario;

pub use engine::{WindLoadResult, compute_wind_load, compute_wind_load_strict};
pub use inputs::WindLoadInputs;
pub use safety::{SafetyBand, classify_safety};
pub use scenario::{Scenario, ScenarioPreset};
