//! Perceived-temperature indices and their warning categories.
//!
//! All indices take and return kelvin. The warning tables are threshold
//! tables: the first category whose lower limit the value reaches wins, and
//! values below the lowest limit have no category.

pub mod heat_index;
pub mod humidex;
pub mod pet;

pub use heat_index::{heat_index, heat_index_text, HeatIndexCategory};
pub use humidex::{humidex, humidex_text, HumidexCategory};
pub use pet::{calculate_pet, pet_category, simple_pet, PetCategory};
