//! Altitude Track Example
//!
//! Rebuilds the altitude profile of a hike from a barometric logger that
//! never knew its own height, then uses the rebuilt track to reduce the
//! final pressure to sea level.
//!
//! ## What You'll Learn
//!
//! - Rebuilding altitudes from a pressure series
//! - Measuring the temperature gradient over recent readings
//! - Sea-level reduction from historical data
//! - Freezing level, pressure altitude and density altitude
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_altitude_track
//! ```

use aerology_core::{
    altitude::{calculate_altitudes_from_pressure_series, freezing_level_altitude, DEFAULT_LAYER_TEMPERATURE},
    pressure::{adjust_pressure_to_sea_level_by_historical_data, density_altitude, pressure_altitude, DEFAULT_HISTORY_HOURS},
    temperature::{calculate_dynamic_lapse_rate, kelvin_to_celsius},
    time::FixedTime,
    FormulaError, Reading, WindowAnchor,
};

// 2023-09-02T06:00Z
const START: u64 = 1_693_634_400_000;
const HALF_HOUR: u64 = 1_800_000;

fn main() -> Result<(), FormulaError> {
    println!("Aerology Altitude Track");
    println!("=======================\n");

    // (pressure Pa, temperature K) every half hour; the logger records no altitude
    let log = [
        (95_460.8, 284.9),
        (93_950.0, 284.0),
        (92_450.0, 283.1),
        (90_990.0, 282.1),
        (89_540.0, 281.2),
        (88_130.0, 280.3),
        (86_740.0, 279.4),
    ];
    let readings: Vec<Reading> = log
        .iter()
        .enumerate()
        .map(|(i, &(pressure, temperature))| Reading::new(START + i as u64 * HALF_HOUR, temperature, pressure, 0.0, 65.0))
        .collect();

    // Trailhead at 500 m
    let track = calculate_altitudes_from_pressure_series(&readings, 500.0, DEFAULT_LAYER_TEMPERATURE)?;

    println!("Track:");
    for point in &track {
        println!(
            "  +{:>3} min  {:7.1} hPa  {:5.1}°C  {:7.1} m",
            (point.timestamp - START) / 60_000,
            point.pressure / 100.0,
            kelvin_to_celsius(point.temperature),
            point.altitude
        );
    }
    println!();

    let clock = FixedTime::new(START + 6 * HALF_HOUR);
    let anchor = WindowAnchor::from_source(&clock);
    let gradient = calculate_dynamic_lapse_rate(&track, DEFAULT_HISTORY_HOURS, anchor);
    println!("Measured gradient: {:.2} K/100 m", gradient * 100.0);

    let summit = match track.last() {
        Some(summit) => *summit,
        None => return Ok(()),
    };
    let sea_level =
        adjust_pressure_to_sea_level_by_historical_data(summit.pressure, summit.altitude, &track, DEFAULT_HISTORY_HOURS, anchor);
    println!("Summit pressure reduced to sea level: {:.0} hPa", sea_level / 100.0);
    println!();

    println!("Summit aviation view:");
    let pressure_alt = pressure_altitude(summit.pressure);
    println!("  Pressure altitude: {:.0} m", pressure_alt);
    println!("  Density altitude:  {:.0} m", density_altitude(pressure_alt, summit.temperature));

    match freezing_level_altitude(summit.temperature, summit.altitude, -gradient) {
        Some(level) if gradient < 0.0 => println!("  Freezing level:    {:.0} m", level),
        _ => println!("  Freezing level:    not reached along the measured gradient"),
    }

    Ok(())
}
