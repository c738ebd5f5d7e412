//! Station Report Example
//!
//! Turns a single weather station observation into the derived values a
//! forecaster usually wants next to it.
//!
//! ## What You'll Learn
//!
//! - Building a [`Reading`] and serializing it
//! - Dew point, cloud base and sea-level pressure
//! - Perceived-temperature indices with their warning texts
//! - Wind direction, Beaufort force and UV categories
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_station_report
//! ```

use aerology_core::{
    air_density::{calculate_air_density, AirComposition},
    constants::AtmosphericConstants,
    indices::{heat_index, heat_index_text, humidex, humidex_text, pet_category, simple_pet},
    phenomena::{cloud_base_height, solar_elevation, GeoPosition},
    pressure::adjust_pressure_to_sea_level_advanced,
    scales::{get_beaufort_scale_by_wind_speed, uv_index_category},
    temperature::{dew_point_magnus_formula, kelvin_to_celsius},
    wind::get_wind_direction_by_degree,
    FormulaError, Reading,
};

fn main() -> Result<(), FormulaError> {
    println!("Aerology Station Report");
    println!("=======================\n");

    // 2023-07-14T13:00Z, a summer afternoon on the upper Rhine
    let station = GeoPosition::new(47.56, 7.59);
    let reading = Reading::new(1_689_339_600_000, 304.15, 97_350.0, 316.0, 60.0).with_wind_speed(6.2);
    let wind_from = 235.0;
    let uv_index = 7.4;

    match serde_json::to_string(&reading) {
        Ok(json) => println!("Observation: {}\n", json),
        Err(e) => println!("Observation not serializable: {}\n", e),
    }

    // Moisture
    let dew_point = dew_point_magnus_formula(reading.temperature, reading.relative_humidity, None);
    let cloud_base = cloud_base_height(reading.temperature, dew_point, reading.altitude)?;
    println!("Moisture:");
    println!("  Temperature: {:.1}°C", kelvin_to_celsius(reading.temperature));
    println!("  Dew point:   {:.1}°C", kelvin_to_celsius(dew_point));
    println!("  Cloud base:  {:.0} m", cloud_base);
    println!();

    // Pressure and density
    let sea_level = adjust_pressure_to_sea_level_advanced(
        reading.pressure,
        reading.altitude,
        reading.temperature,
        AtmosphericConstants::STANDARD,
    );
    let density = calculate_air_density(
        reading.pressure,
        reading.temperature,
        AirComposition::Moist { humidity: reading.relative_humidity },
    )?;
    println!("Pressure:");
    println!("  Station:   {:.1} hPa", reading.pressure / 100.0);
    println!("  Sea level: {:.1} hPa", sea_level / 100.0);
    println!("  Density:   {:.3} kg/m³", density);
    println!();

    // How it feels
    println!("Comfort:");
    let heat = heat_index(reading.temperature, reading.relative_humidity)?;
    match heat_index_text(heat) {
        Some(level) => println!("  Heat index: {:.1}°C ({}) {}", kelvin_to_celsius(heat), level.text, level.warning),
        None => println!("  Heat index: {:.1}°C", kelvin_to_celsius(heat)),
    }

    let felt = humidex(reading.temperature, reading.relative_humidity);
    let felt_text = humidex_text(felt).map_or("No discomfort", |level| level.text);
    println!("  Humidex:    {:.1}°C ({})", kelvin_to_celsius(felt), felt_text);

    let pet = simple_pet(reading.temperature, reading.relative_humidity, reading.wind_speed.unwrap_or(0.0))?;
    if let Some(grade) = pet_category(pet) {
        println!("  PET:        {:.1}°C ({}, {})", kelvin_to_celsius(pet), grade.perception, grade.stress);
    }
    println!();

    // Wind and sun
    println!("Wind and sun:");
    let direction = get_wind_direction_by_degree(wind_from);
    let speed = reading.wind_speed.unwrap_or(0.0);
    let force = get_beaufort_scale_by_wind_speed(speed)?;
    match force {
        Some(force) => println!(
            "  Wind: {:.1} m/s from {} ({}), force {} {}",
            speed, direction.full, direction.abbr, force.force, force.category
        ),
        None => println!("  Wind: {:.1} m/s from {}", speed, direction.full),
    }

    let uv = uv_index_category(uv_index);
    println!("  UV index {:.1}: {} ({}) {}", uv_index, uv.category, uv.color, uv.advice);

    match solar_elevation(reading.timestamp, station) {
        Some(elevation) => println!("  Sun elevation: {:.1}°", elevation),
        None => println!("  Sun elevation: unavailable"),
    }

    Ok(())
}
