//! Historical stress-scenario replay.
//!
//! - [`windows`] - the fixed crisis windows and their policy dates
//! - [`replay`] - per-window performance replay and the overall worst day

pub mod replay;
pub mod windows;

pub use replay::{run_stress_windows, worst_day_overall, StressPeriodResult, WorstDay};
pub use windows::{standard, StressWindow};
