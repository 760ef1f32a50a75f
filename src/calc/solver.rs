//! Three-way relation solver
//!
//! Derives the missing one of {size, speed, time} from the other two
//! over base units, using the identity `time = size / speed`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calc::units::{self, SizeUnit, SpeedUnit, TimeUnit};
use crate::{CalcError, Result};

/// Which quantity is being solved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcMode {
    /// Derive transfer time from size and speed
    SolveTime,
    /// Derive file size from speed and time
    SolveSize,
    /// Derive link speed from size and time
    SolveSpeed,
}

impl CalcMode {
    /// All calculation modes, in menu order
    pub fn all() -> Vec<Self> {
        vec![Self::SolveTime, Self::SolveSize, Self::SolveSpeed]
    }

    /// Display label for the solved quantity
    pub fn label(self) -> &'static str {
        match self {
            Self::SolveTime => "Transfer Time",
            Self::SolveSize => "File Size",
            Self::SolveSpeed => "Link Speed",
        }
    }
}

impl fmt::Display for CalcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn require_positive(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput(format!(
            "{} must be a positive number",
            what
        )))
    }
}

fn require_present<T>(input: Option<T>, what: &str) -> Result<T> {
    input.ok_or_else(|| CalcError::InvalidInput(format!("{} is required", what)))
}

/// Transfer time in seconds from size (megabits) and speed (Mbps)
pub fn solve_time_secs(size_megabits: f64, speed_mbps: f64) -> Result<f64> {
    let size = require_positive(size_megabits, "file size")?;
    let speed = require_positive(speed_mbps, "link speed")?;
    Ok(size / speed)
}

/// File size in megabits from speed (Mbps) and time (seconds)
pub fn solve_size_megabits(speed_mbps: f64, time_secs: f64) -> Result<f64> {
    let speed = require_positive(speed_mbps, "link speed")?;
    let time = require_positive(time_secs, "transfer time")?;
    Ok(speed * time)
}

/// Link speed in Mbps from size (megabits) and time (seconds)
pub fn solve_speed_mbps(size_megabits: f64, time_secs: f64) -> Result<f64> {
    let size = require_positive(size_megabits, "file size")?;
    let time = require_positive(time_secs, "transfer time")?;
    Ok(size / time)
}

/// Normalize the two supplied quantities, solve for the third, and
/// format the answer for display.
///
/// This is the single entry point shared by the TUI form and the plain
/// prompt interface. The quantities not needed by `mode` are ignored.
///
/// # Examples
/// ```
/// use xfercalc::calc::{calculate, CalcMode, SizeUnit, SpeedUnit};
///
/// let time = calculate(
///     CalcMode::SolveTime,
///     Some((100.0, SizeUnit::Megabytes)),
///     Some((10.0, SpeedUnit::Mbps)),
///     None,
/// )
/// .unwrap();
/// assert_eq!(time, "1 minutes 20 seconds");
/// ```
pub fn calculate(
    mode: CalcMode,
    size: Option<(f64, SizeUnit)>,
    speed: Option<(f64, SpeedUnit)>,
    time: Option<(f64, TimeUnit)>,
) -> Result<String> {
    match mode {
        CalcMode::SolveTime => {
            let (size_value, size_unit) = require_present(size, "file size")?;
            let (speed_value, speed_unit) = require_present(speed, "link speed")?;
            let secs = solve_time_secs(
                size_unit.to_megabits(require_positive(size_value, "file size")?),
                speed_unit.to_mbps(require_positive(speed_value, "link speed")?),
            )?;
            Ok(units::format_time(secs))
        }
        CalcMode::SolveSize => {
            let (speed_value, speed_unit) = require_present(speed, "link speed")?;
            let (time_value, time_unit) = require_present(time, "transfer time")?;
            let megabits = solve_size_megabits(
                speed_unit.to_mbps(require_positive(speed_value, "link speed")?),
                time_unit.to_seconds(require_positive(time_value, "transfer time")?),
            )?;
            Ok(units::format_size(megabits))
        }
        CalcMode::SolveSpeed => {
            let (size_value, size_unit) = require_present(size, "file size")?;
            let (time_value, time_unit) = require_present(time, "transfer time")?;
            let mbps = solve_speed_mbps(
                size_unit.to_megabits(require_positive(size_value, "file size")?),
                time_unit.to_seconds(require_positive(time_value, "transfer time")?),
            )?;
            Ok(units::format_speed(mbps))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_time() {
        // 100 MB at 10 Mbps: 800 megabits / 10 = 80 seconds
        let secs = solve_time_secs(800.0, 10.0).unwrap();
        assert!((secs - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_solve_size() {
        // 8 Mbps for 60 seconds: 480 megabits = 60 MB
        let megabits = solve_size_megabits(8.0, 60.0).unwrap();
        assert!((megabits - 480.0).abs() < 1e-9);
    }

    #[test]
    fn test_solve_speed() {
        let mbps = solve_speed_mbps(800.0, 80.0).unwrap();
        assert!((mbps - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(matches!(
            solve_time_secs(-800.0, 10.0),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(matches!(
            solve_time_secs(800.0, 0.0),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(matches!(
            solve_size_megabits(f64::NAN, 60.0),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(matches!(
            solve_speed_mbps(f64::INFINITY, 80.0),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_calculate_time() {
        let result = calculate(
            CalcMode::SolveTime,
            Some((100.0, SizeUnit::Megabytes)),
            Some((10.0, SpeedUnit::Mbps)),
            None,
        )
        .unwrap();
        assert_eq!(result, "1 minutes 20 seconds");
    }

    #[test]
    fn test_calculate_size() {
        let result = calculate(
            CalcMode::SolveSize,
            None,
            Some((8.0, SpeedUnit::Mbps)),
            Some((60.0, TimeUnit::Seconds)),
        )
        .unwrap();
        assert_eq!(result, "60.00 MB");
    }

    #[test]
    fn test_calculate_speed_steps_up_to_gbps() {
        // 100 GB in 2 minutes: 819200 megabits / 120 s = 6826.67 Mbps
        let result = calculate(
            CalcMode::SolveSpeed,
            Some((100.0, SizeUnit::Gigabytes)),
            None,
            Some((2.0, TimeUnit::Minutes)),
        )
        .unwrap();
        assert_eq!(result, "6.83 Gbps");
    }

    #[test]
    fn test_calculate_missing_input() {
        let err = calculate(
            CalcMode::SolveTime,
            Some((100.0, SizeUnit::Megabytes)),
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(_)));
        assert!(err.to_string().contains("link speed"));
    }

    #[test]
    fn test_calculate_rejects_zero() {
        let err = calculate(
            CalcMode::SolveSize,
            None,
            Some((0.0, SpeedUnit::Mbps)),
            Some((60.0, TimeUnit::Seconds)),
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(_)));
    }
}
