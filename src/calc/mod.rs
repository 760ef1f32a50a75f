//! Calculation core
//!
//! Pure unit-conversion and solver functions shared by the TUI and the
//! plain prompt interface.

pub mod solver;
pub mod units;

pub use solver::{calculate, CalcMode};
pub use units::{SizeUnit, SpeedUnit, TimeUnit};
