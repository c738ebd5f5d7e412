//! WHO UV index exposure categories.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::lookup::{Band, BandTable};

/// Exposure category with its chart colour and protection advice
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UvCategory {
    /// Lowest index of the category
    pub lower_limit: f64,
    /// Highest index of the category
    pub upper_limit: f64,
    /// Category name
    pub category: &'static str,
    /// Chart colour, `#RRGGBB`
    pub color: &'static str,
    /// Protection advice
    pub advice: &'static str,
}

impl Band for UvCategory {
    fn lower(&self) -> f64 {
        self.lower_limit
    }

    fn upper(&self) -> f64 {
        self.upper_limit
    }
}

const UV_CATEGORIES: &[UvCategory] = &[
    UvCategory {
        lower_limit: 0.0,
        upper_limit: 2.0,
        category: "Low",
        color: "#3EA72D",
        advice: "No protection needed.",
    },
    UvCategory {
        lower_limit: 3.0,
        upper_limit: 5.0,
        category: "Moderate",
        color: "#FFF300",
        advice: "Seek shade during midday hours, cover up and wear sunscreen.",
    },
    UvCategory {
        lower_limit: 6.0,
        upper_limit: 7.0,
        category: "High",
        color: "#F18B00",
        advice: "Reduce time in the sun between 10 a.m. and 4 p.m., cover up, wear a hat and sunglasses, and use sunscreen.",
    },
    UvCategory {
        lower_limit: 8.0,
        upper_limit: 10.0,
        category: "Very High",
        color: "#E53210",
        advice: "Minimize sun exposure between 10 a.m. and 4 p.m., apply SPF 30+ sunscreen, wear protective clothing.",
    },
    UvCategory {
        lower_limit: 11.0,
        upper_limit: f64::INFINITY,
        category: "Extreme",
        color: "#B567A4",
        advice: "Avoid sun exposure, seek shade, wear protective clothing and sunglasses, use SPF 50+ sunscreen.",
    },
];

/// UV categories in ascending order
pub const UV_INDEX_TABLE: BandTable<UvCategory> = BandTable::new("uv index", UV_CATEGORIES);

/// Category for an integer UV index.
///
/// Values between bands (2.5) or below zero fall back to "Low".
pub fn get_category(uv_index: f64) -> &'static UvCategory {
    UV_INDEX_TABLE.find_or_first(uv_index)
}
