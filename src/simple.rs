//! Plain prompt interface
//!
//! Line-based fallback for terminals or scripts where the TUI cannot
//! run. Collects the same inputs as the form screen and prints the
//! formatted result or validation error.

use std::io::{self, Write};

use crate::calc::{solver, CalcMode, SizeUnit, SpeedUnit, TimeUnit};
use crate::{CalcError, Result};

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(CalcError::IoError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(input.trim().to_string())
}

fn read_value(label: &str) -> Result<f64> {
    let input = prompt(label)?;
    input
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidInput(format!("{} must be a number", label)))
}

fn read_size() -> Result<(f64, SizeUnit)> {
    let value = read_value("File size")?;
    let unit: SizeUnit = prompt("Size unit (MB/GB)")?.parse()?;
    Ok((value, unit))
}

fn read_speed() -> Result<(f64, SpeedUnit)> {
    let value = read_value("Link speed")?;
    let unit: SpeedUnit = prompt("Speed unit (Mbps, MB/s, Gbps, GB/s)")?.parse()?;
    Ok((value, unit))
}

fn read_time() -> Result<(f64, TimeUnit)> {
    let value = read_value("Transfer time")?;
    let unit: TimeUnit = prompt("Time unit (seconds/minutes)")?.parse()?;
    Ok((value, unit))
}

fn solve_once(mode: CalcMode) -> Result<String> {
    match mode {
        CalcMode::SolveTime => {
            let size = read_size()?;
            let speed = read_speed()?;
            solver::calculate(mode, Some(size), Some(speed), None)
        }
        CalcMode::SolveSize => {
            let speed = read_speed()?;
            let time = read_time()?;
            solver::calculate(mode, None, Some(speed), Some(time))
        }
        CalcMode::SolveSpeed => {
            let size = read_size()?;
            let time = read_time()?;
            solver::calculate(mode, Some(size), None, Some(time))
        }
    }
}

/// Run the plain prompt loop until the user declines another round
pub fn run() -> Result<()> {
    loop {
        println!("What do you want to solve for?");
        for (i, mode) in CalcMode::all().iter().enumerate() {
            println!("  {}: {}", i + 1, mode.label());
        }

        let choice = prompt("Enter choice")?;
        let mode = match choice.as_str() {
            "1" => CalcMode::SolveTime,
            "2" => CalcMode::SolveSize,
            "3" => CalcMode::SolveSpeed,
            _ => {
                println!("Pick 1, 2, or 3.\n");
                continue;
            }
        };

        // Validation problems are shown, not escalated
        match solve_once(mode) {
            Ok(text) => println!("\n{}: {}\n", mode.label(), text),
            Err(err @ (CalcError::InvalidInput(_) | CalcError::InvalidUnit(_))) => {
                println!("\n{}\n", err)
            }
            Err(err) => return Err(err),
        }

        let again = prompt("Calculate another? [y/N]")?;
        if !again.eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}
