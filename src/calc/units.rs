//! Unit normalization and display formatting
//!
//! Each quantity family has a canonical base unit: megabits for size,
//! megabits per second for speed, seconds for time. Conversion in and
//! out of base is a fixed linear factor per unit, so `from_*` is the
//! exact inverse of `to_*` up to floating-point rounding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CalcError;

/// Megabits per megabyte (1 byte = 8 bits)
pub const MEGABITS_PER_MEGABYTE: f64 = 8.0;
/// Megabytes per gigabyte
pub const MEGABYTES_PER_GIGABYTE: f64 = 1024.0;
/// Megabits per second per gigabit per second
pub const MBPS_PER_GBPS: f64 = 1000.0;
/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// File size units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeUnit {
    /// Megabytes (MB)
    Megabytes,
    /// Gigabytes (GB), 1 GB = 1024 MB
    Gigabytes,
}

impl SizeUnit {
    /// All supported size units, in menu order
    pub fn all() -> Vec<Self> {
        vec![Self::Megabytes, Self::Gigabytes]
    }

    /// Display label for the unit
    pub fn label(self) -> &'static str {
        match self {
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
        }
    }

    fn megabits_per_unit(self) -> f64 {
        match self {
            Self::Megabytes => MEGABITS_PER_MEGABYTE,
            Self::Gigabytes => MEGABITS_PER_MEGABYTE * MEGABYTES_PER_GIGABYTE,
        }
    }

    /// Convert a size in this unit to base megabits
    pub fn to_megabits(self, value: f64) -> f64 {
        value * self.megabits_per_unit()
    }

    /// Convert base megabits back into this unit
    pub fn from_megabits(self, megabits: f64) -> f64 {
        megabits / self.megabits_per_unit()
    }
}

/// Transfer speed units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    /// Megabits per second (Mbps)
    Mbps,
    /// Megabytes per second (MB/s), 1 MB/s = 8 Mbps
    MegabytesPerSec,
    /// Gigabits per second (Gbps), 1 Gbps = 1000 Mbps
    Gbps,
    /// Gigabytes per second (GB/s), 1 GB/s = 8192 Mbps
    GigabytesPerSec,
}

impl SpeedUnit {
    /// All supported speed units, in menu order
    pub fn all() -> Vec<Self> {
        vec![
            Self::Mbps,
            Self::MegabytesPerSec,
            Self::Gbps,
            Self::GigabytesPerSec,
        ]
    }

    /// Display label for the unit
    pub fn label(self) -> &'static str {
        match self {
            Self::Mbps => "Mbps",
            Self::MegabytesPerSec => "MB/s",
            Self::Gbps => "Gbps",
            Self::GigabytesPerSec => "GB/s",
        }
    }

    fn mbps_per_unit(self) -> f64 {
        match self {
            Self::Mbps => 1.0,
            Self::MegabytesPerSec => MEGABITS_PER_MEGABYTE,
            Self::Gbps => MBPS_PER_GBPS,
            Self::GigabytesPerSec => MEGABITS_PER_MEGABYTE * MEGABYTES_PER_GIGABYTE,
        }
    }

    /// Convert a speed in this unit to base megabits per second
    pub fn to_mbps(self, value: f64) -> f64 {
        value * self.mbps_per_unit()
    }

    /// Convert base megabits per second back into this unit
    pub fn from_mbps(self, mbps: f64) -> f64 {
        mbps / self.mbps_per_unit()
    }
}

/// Duration units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Seconds,
    Minutes,
}

impl TimeUnit {
    /// All supported time units, in menu order
    pub fn all() -> Vec<Self> {
        vec![Self::Seconds, Self::Minutes]
    }

    /// Display label for the unit
    pub fn label(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
        }
    }

    fn seconds_per_unit(self) -> f64 {
        match self {
            Self::Seconds => 1.0,
            Self::Minutes => SECONDS_PER_MINUTE,
        }
    }

    /// Convert a duration in this unit to base seconds
    pub fn to_seconds(self, value: f64) -> f64 {
        value * self.seconds_per_unit()
    }

    /// Convert base seconds back into this unit
    pub fn from_seconds(self, seconds: f64) -> f64 {
        seconds / self.seconds_per_unit()
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SizeUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|u| u.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::InvalidUnit(s.trim().to_string()))
    }
}

impl FromStr for SpeedUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|u| u.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::InvalidUnit(s.trim().to_string()))
    }
}

impl FromStr for TimeUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|u| u.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::InvalidUnit(s.trim().to_string()))
    }
}

/// Format a base-unit size for display
///
/// Two decimal places, stepping up from MB to GB at 1024 MB.
///
/// # Examples
/// ```
/// use xfercalc::calc::units::format_size;
///
/// assert_eq!(format_size(480.0), "60.00 MB");
/// assert_eq!(format_size(16384.0), "2.00 GB");
/// ```
pub fn format_size(megabits: f64) -> String {
    let megabytes = megabits / MEGABITS_PER_MEGABYTE;
    if megabytes >= MEGABYTES_PER_GIGABYTE {
        format!("{:.2} GB", megabytes / MEGABYTES_PER_GIGABYTE)
    } else {
        format!("{:.2} MB", megabytes)
    }
}

/// Format a base-unit speed for display
///
/// Two decimal places, stepping up from Mbps to Gbps at 1000 Mbps.
///
/// # Examples
/// ```
/// use xfercalc::calc::units::format_speed;
///
/// assert_eq!(format_speed(80.0), "80.00 Mbps");
/// assert_eq!(format_speed(2500.0), "2.50 Gbps");
/// ```
pub fn format_speed(mbps: f64) -> String {
    if mbps >= MBPS_PER_GBPS {
        format!("{:.2} Gbps", mbps / MBPS_PER_GBPS)
    } else {
        format!("{:.2} Mbps", mbps)
    }
}

/// Format a base-unit duration as whole minutes and seconds
///
/// The total is rounded to whole seconds before splitting, so a value
/// just under a minute boundary never renders as "60 seconds".
///
/// # Examples
/// ```
/// use xfercalc::calc::units::format_time;
///
/// assert_eq!(format_time(80.0), "1 minutes 20 seconds");
/// assert_eq!(format_time(45.4), "0 minutes 45 seconds");
/// ```
pub fn format_time(seconds: f64) -> String {
    let total = seconds.round() as u64;
    format!("{} minutes {} seconds", total / 60, total % 60)
}
