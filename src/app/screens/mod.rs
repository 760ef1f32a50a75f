//! Screen components for the TUI

pub mod calculator;
pub mod help;

pub use calculator::CalculatorScreen;
pub use help::HelpScreen;
