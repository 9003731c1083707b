//! File I/O for calculation reports.
//!
//! This module provides functions for reading and writing a single
//! calculation as JSON.

pub mod report;

pub use report::{Report, read_report, write_report};
