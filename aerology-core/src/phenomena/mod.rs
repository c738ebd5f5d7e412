//! Weather phenomena derived from readings: clouds, fog, snow, the daily
//! pressure cycle and the sun position that modulates them.

pub mod cloud;
pub mod diurnal;
pub mod fog;
pub mod snow;
pub mod solar;

pub use cloud::{cloud_base_height, cloud_temperature};
pub use diurnal::{
    detect_prominent_extremes, evaluate_diurnal_at_hour, fit_cosinor_model, group_readings_by_month,
    CosinorParameters, Extremes,
};
pub use fog::{fog_point_temperature, fog_probability, fog_trend_probability, fog_visibility};
pub use snow::{
    snow_to_liquid_equivalent, snow_to_liquid_ratio, snow_to_liquid_ratio_continuous, snowfall_equivalent,
    snowfall_equivalent_continuous,
};
pub use solar::{solar_elevation, GeoPosition};
