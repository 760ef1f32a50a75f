use xfercalc::calc::units::{self, SizeUnit, SpeedUnit, TimeUnit};
use xfercalc::calc::{calculate, CalcMode};
use xfercalc::CalcError;

const TOLERANCE: f64 = 1e-9;

#[test]
fn conversion_round_trips_preserve_value() {
    let values = [0.001, 1.0, 42.5, 100.0, 8192.0];
    for &value in &values {
        for unit in SizeUnit::all() {
            let back = unit.from_megabits(unit.to_megabits(value));
            assert!((back - value).abs() < TOLERANCE, "{value} via {unit}");
        }
        for unit in SpeedUnit::all() {
            let back = unit.from_mbps(unit.to_mbps(value));
            assert!((back - value).abs() < TOLERANCE, "{value} via {unit}");
        }
        for unit in TimeUnit::all() {
            let back = unit.from_seconds(unit.to_seconds(value));
            assert!((back - value).abs() < TOLERANCE, "{value} via {unit}");
        }
    }
}

#[test]
fn gigabytes_per_second_round_trip_through_base() {
    let original = 2.5;
    let mbps = SpeedUnit::GigabytesPerSec.to_mbps(original);
    assert!((mbps - 20480.0).abs() < TOLERANCE);
    let back = SpeedUnit::GigabytesPerSec.from_mbps(mbps);
    assert!((back - original).abs() < TOLERANCE);
}

#[test]
fn hundred_megabytes_at_ten_mbps_takes_eighty_seconds() {
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
fn eight_mbps_for_a_minute_moves_sixty_megabytes() {
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
fn solved_speed_matches_across_unit_choices() {
    // 1 GB in 1 minute, regardless of how the inputs are expressed
    let from_gb = calculate(
        CalcMode::SolveSpeed,
        Some((1.0, SizeUnit::Gigabytes)),
        None,
        Some((1.0, TimeUnit::Minutes)),
    )
    .unwrap();
    let from_mb = calculate(
        CalcMode::SolveSpeed,
        Some((1024.0, SizeUnit::Megabytes)),
        None,
        Some((60.0, TimeUnit::Seconds)),
    )
    .unwrap();
    assert_eq!(from_gb, from_mb);
    assert_eq!(from_gb, "136.53 Mbps");
}

#[test]
fn non_positive_inputs_always_fail_validation() {
    let bad_values = [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
    for &value in &bad_values {
        let err = calculate(
            CalcMode::SolveTime,
            Some((value, SizeUnit::Megabytes)),
            Some((10.0, SpeedUnit::Mbps)),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(_)), "value {value}");
    }
}

#[test]
fn display_steps_up_at_family_thresholds() {
    // exactly 1024 MB displays as GB
    let size = calculate(
        CalcMode::SolveSize,
        None,
        Some((8192.0, SpeedUnit::Mbps)),
        Some((1.0, TimeUnit::Seconds)),
    )
    .unwrap();
    assert_eq!(size, "1.00 GB");

    // exactly 1000 Mbps displays as Gbps
    let speed = calculate(
        CalcMode::SolveSpeed,
        Some((125.0, SizeUnit::Megabytes)),
        None,
        Some((1.0, TimeUnit::Seconds)),
    )
    .unwrap();
    assert_eq!(speed, "1.00 Gbps");
}

#[test]
fn unknown_unit_tags_are_rejected() {
    assert!(matches!(
        "TB".parse::<SizeUnit>(),
        Err(CalcError::InvalidUnit(_))
    ));
    assert!(matches!(
        "Kbps".parse::<SpeedUnit>(),
        Err(CalcError::InvalidUnit(_))
    ));
    assert!(matches!(
        "days".parse::<TimeUnit>(),
        Err(CalcError::InvalidUnit(_))
    ));
}

#[test]
fn formatting_rounds_for_display() {
    assert_eq!(units::format_time(79.6), "1 minutes 20 seconds");
    assert_eq!(units::format_time(0.4), "0 minutes 0 seconds");
    assert_eq!(units::format_size(480.0), "60.00 MB");
    assert_eq!(units::format_speed(136.533333), "136.53 Mbps");
}
