//! Static gardening data
//!
//! Seasons and plant types are closed sets, so both tables are plain arrays
//! indexed by the enum discriminants instead of string-keyed maps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::resolver::normalize;
use crate::utils::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    Flower,
    Vegetable,
    Herb,
}

/// Advice indexed by `[Season][PlantType]`
const ADVICE: [[&str; 3]; 4] = [
    [
        "Start fertilising lightly and remove dead blooms.",
        "Prepare soil and plant cool\u{2011}season crops.",
        "Transplant seedlings and pinch tips to encourage growth.",
    ],
    [
        "Water regularly and provide shade during heatwaves.",
        "Mulch soil and watch for pests.",
        "Harvest often to promote new growth.",
    ],
    [
        "Cut back perennials and collect seeds.",
        "Clear old crops and add compost.",
        "Dry herbs before temperatures drop.",
    ],
    [
        "Protect plants from frost using covers.",
        "Use cold frames or move pots indoors.",
        "Keep potted herbs in a bright indoor spot.",
    ],
];

/// Recommended plants per season, most important first
const RECOMMENDATIONS: [&[&str]; 4] = [
    &["pansies", "lettuce", "parsley"],
    &["marigolds", "tomatoes", "basil"],
    &["chrysanthemums", "kale", "rosemary"],
    &["hellebores", "winter spinach", "thyme"],
];

impl Season {
    /// All seasons in calendar order
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    /// Exact match against the canonical lowercase name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|season| season.as_str() == name)
    }

    /// Canonical names in alphabetical order, as shown in error messages
    pub fn sorted_names() -> Vec<&'static str> {
        let mut names: Vec<_> = Self::ALL.iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl PlantType {
    pub const ALL: [PlantType; 3] = [PlantType::Flower, PlantType::Vegetable, PlantType::Herb];

    pub fn as_str(self) -> &'static str {
        match self {
            PlantType::Flower => "flower",
            PlantType::Vegetable => "vegetable",
            PlantType::Herb => "herb",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|plant| plant.as_str() == name)
    }

    pub fn sorted_names() -> Vec<&'static str> {
        let mut names: Vec<_> = Self::ALL.iter().map(|p| p.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(&normalize(s)).ok_or_else(|| AppError::InvalidInput {
            kind: "season".to_string(),
            value: s.trim().to_string(),
            expected: Self::sorted_names().join(", "),
        })
    }
}

impl FromStr for PlantType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(&normalize(s)).ok_or_else(|| AppError::InvalidInput {
            kind: "plant type".to_string(),
            value: s.trim().to_string(),
            expected: Self::sorted_names().join(", "),
        })
    }
}

pub fn advice_for(season: Season, plant_type: PlantType) -> &'static str {
    ADVICE[season as usize][plant_type as usize]
}

pub fn plants_for(season: Season) -> &'static [&'static str] {
    RECOMMENDATIONS[season as usize]
}
