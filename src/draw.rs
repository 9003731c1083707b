//! Schematic of the panel and the wind flow.
//!
//! [`geometry`] derives the drawing parameters from the raw inputs and
//! [`svg`] turns them into a standalone SVG document. None of this feeds back
//! into the physics.

pub mod config;
pub mod geometry;
pub mod svg;

pub use config::VizConfig;
pub use geometry::{Scene, wind_arrow_count, wind_arrow_duration};
pub use svg::{render_svg, write_svg};
