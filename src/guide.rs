// Static visitor guide content: attractions, lodging, food, nightlife, events and neighborhoods
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const BUNDLED_GUIDE_JSON: &str = include_str!("../data/guide.json");

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeroAttraction {
    pub title: String,
    pub subtitle: String,
    pub tag: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HotelOption {
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FoodSpot {
    pub name: String,
    pub style: String,
    pub description: String,
    pub image: String,
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NightlifeSpot {
    pub name: String,
    pub vibe: String,
    pub description: String,
    pub image: String,
    pub highlights: Vec<String>,
    pub schedule: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Experience {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Event {
    pub title: String,
    pub description: String,
    // Free-form, e.g. "Sept 14 – 16"
    pub date: String,
    pub category: String,
    pub image: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Neighborhood {
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlanFeature {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TravelTip {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Guide {
    pub hero_attractions: Vec<HeroAttraction>,
    pub hotels: Vec<HotelOption>,
    pub food_spots: Vec<FoodSpot>,
    pub nightlife_spots: Vec<NightlifeSpot>,
    pub seasonal_experiences: Vec<Experience>,
    pub events: Vec<Event>,
    pub neighborhoods: Vec<Neighborhood>,
    pub plan_features: Vec<PlanFeature>,
    pub travel_tips: Vec<TravelTip>,
}

impl Guide {
    pub fn from_json(json: &str) -> Result<Self, GuideError> {
        serde_json::from_str(json).map_err(|e| GuideError::JsonParseError(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, GuideError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn bundled() -> Result<Self, GuideError> {
        Self::from_json(BUNDLED_GUIDE_JSON)
    }

    pub fn hotels_in(&self, category: &str) -> Vec<&HotelOption> {
        self.hotels
            .iter()
            .filter(|hotel| hotel.category.eq_ignore_ascii_case(category))
            .collect()
    }
}
