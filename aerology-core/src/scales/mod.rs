//! Categorical scales backed by [`BandTable`](crate::lookup::BandTable)s.

pub mod beaufort;
pub mod saffir_simpson;
pub mod uv_index;

pub use beaufort::{
    get_beaufort_scale_by_pressure, get_beaufort_scale_by_pressure_ratio, get_beaufort_scale_by_wind_speed,
    BeaufortForce,
};
pub use saffir_simpson::{get_saffir_simpson_scale_by_wind_speed, HurricaneCategory};
pub use uv_index::{get_category as uv_index_category, UvCategory};
