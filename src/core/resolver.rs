//! Advice resolution
//!
//! The free functions accept arbitrary strings and never fail: unknown
//! seasons or plant types resolve to fixed messages. Callers that want
//! validation parse into [`Season`]/[`PlantType`] first.

use serde::Serialize;

use crate::core::data::{PlantType, Season, advice_for, plants_for};

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

pub const NO_SEASON_ADVICE: &str = "No advice available for this season.";
pub const NO_PLANT_TYPE_ADVICE: &str = "No advice available for this plant type.";
pub const NO_RECOMMENDATIONS: &str = "No plant recommendations available.";

/// Trim surrounding whitespace and lower-case the input
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Look up advice for an exact (season, plant type) pair
pub fn get_advice(season: &str, plant_type: &str) -> String {
    let Some(season) = Season::parse(season) else {
        tracing::debug!(season, "no advice table for season");
        return NO_SEASON_ADVICE.to_string();
    };

    match PlantType::parse(plant_type) {
        Some(plant_type) => {
            tracing::debug!(%season, %plant_type, "resolved advice");
            advice_for(season, plant_type).to_string()
        }
        None => {
            tracing::debug!(%season, plant_type, "no advice for plant type");
            NO_PLANT_TYPE_ADVICE.to_string()
        }
    }
}

/// List up to `limit` recommended plants for a season
pub fn recommend_plants(season: &str, limit: usize) -> String {
    match Season::parse(season) {
        Some(season) if limit > 0 => format_recommendations(season, limit),
        _ => NO_RECOMMENDATIONS.to_string(),
    }
}

fn format_recommendations(season: Season, limit: usize) -> String {
    let plants: Vec<&str> = plants_for(season).iter().copied().take(limit).collect();
    format!("Recommended plants for {}: {}.", season, plants.join(", "))
}

/// Everything shown to the user for one lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceReport {
    pub season: String,
    pub plant_type: String,
    pub advice: String,
    pub recommendations: String,
}

/// Resolver bound to a recommendation limit, usually taken from config
#[derive(Debug, Clone, Copy)]
pub struct AdviceResolver {
    limit: usize,
}

impl Default for AdviceResolver {
    fn default() -> Self {
        Self::new(DEFAULT_RECOMMENDATION_LIMIT)
    }
}

impl AdviceResolver {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn advice(&self, season: &str, plant_type: &str) -> String {
        get_advice(season, plant_type)
    }

    pub fn recommendations(&self, season: &str) -> String {
        recommend_plants(season, self.limit)
    }

    pub fn report(&self, season: &str, plant_type: &str) -> AdviceReport {
        AdviceReport {
            season: season.to_string(),
            plant_type: plant_type.to_string(),
            advice: self.advice(season, plant_type),
            recommendations: self.recommendations(season),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Spring "), "spring");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\tHERB\n"), "herb");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["", "   ", " Summer ", "VEGETABLE", "Winter Spinach ", "ÉTÉ"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_every_known_pair_returns_table_entry() {
        for season in Season::ALL {
            for plant_type in PlantType::ALL {
                let advice = get_advice(season.as_str(), plant_type.as_str());
                assert!(!advice.is_empty());
                assert_eq!(advice, advice_for(season, plant_type));
            }
        }
    }

    #[test]
    fn test_winter_herb_fixture() {
        assert_eq!(
            get_advice("winter", "herb"),
            "Keep potted herbs in a bright indoor spot."
        );
    }

    #[test]
    fn test_unknown_season() {
        assert_eq!(get_advice("unknown_season", "flower"), NO_SEASON_ADVICE);
        assert_eq!(get_advice("unknown_season", "unknown_type"), NO_SEASON_ADVICE);
    }

    #[test]
    fn test_unknown_plant_type_is_deterministic() {
        let first = get_advice("spring", "unknown_type");
        assert_eq!(first, NO_PLANT_TYPE_ADVICE);
        assert_eq!(get_advice("spring", "unknown_type"), first);
    }

    #[test]
    fn test_lookup_does_not_normalize() {
        assert_eq!(get_advice("Spring", "flower"), NO_SEASON_ADVICE);
        assert_eq!(get_advice("spring", " flower"), NO_PLANT_TYPE_ADVICE);
    }

    #[test]
    fn test_recommend_default_limit() {
        let result = recommend_plants("summer", DEFAULT_RECOMMENDATION_LIMIT);
        assert_eq!(result, "Recommended plants for summer: marigolds, tomatoes, basil.");

        let marigolds = result.find("marigolds").unwrap();
        let tomatoes = result.find("tomatoes").unwrap();
        let basil = result.find("basil").unwrap();
        assert!(marigolds < tomatoes && tomatoes < basil);
    }

    #[test]
    fn test_recommend_limit_one() {
        let result = recommend_plants("summer", 1);
        assert_eq!(result, "Recommended plants for summer: marigolds.");
        assert!(!result.contains("tomatoes"));
        assert!(!result.contains("basil"));
    }

    #[test]
    fn test_recommend_limit_past_end() {
        assert_eq!(
            recommend_plants("winter", 10),
            "Recommended plants for winter: hellebores, winter spinach, thyme."
        );
    }

    #[test]
    fn test_recommend_zero_limit() {
        assert_eq!(recommend_plants("summer", 0), NO_RECOMMENDATIONS);
    }

    #[test]
    fn test_recommend_unknown_season() {
        assert_eq!(recommend_plants("unknown_season", 3), NO_RECOMMENDATIONS);
    }

    #[test]
    fn test_resolver_report() {
        let resolver = AdviceResolver::new(2);
        let report = resolver.report("autumn", "vegetable");

        assert_eq!(report.advice, "Clear old crops and add compost.");
        assert_eq!(
            report.recommendations,
            "Recommended plants for autumn: chrysanthemums, kale."
        );
        assert_eq!(AdviceResolver::default().limit(), DEFAULT_RECOMMENDATION_LIMIT);
    }
}
