// Tour record data structures, deserialized from the bundled catalog JSON
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown locale code: {0}")]
pub struct UnknownLocale(pub String);

// Supported display locales. Spanish is the site default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    // Case-insensitive, tolerant of region tags ("en-US", "es_MX")
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            _ => Err(UnknownLocale(value.to_string())),
        }
    }
}

// Per-locale text. A missing locale deserializes as empty text so the record
// still loads and simply displays nothing for that locale.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalizedText {
    pub es: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            es: es.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Es => &self.es,
            Locale::En => &self.en,
        }
    }

    pub fn missing_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.get(*locale).is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalizedList {
    pub es: Vec<String>,
    pub en: Vec<String>,
}

impl LocalizedList {
    pub fn get(&self, locale: Locale) -> &[String] {
        match locale {
            Locale::Es => &self.es,
            Locale::En => &self.en,
        }
    }

    pub fn missing_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.get(*locale).is_empty())
            .collect()
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown tour category: {0}")]
pub struct UnknownCategory(pub String);

// Tour categories. The legacy Spanish codes are still accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "historico")]
    Historical,
    #[serde(alias = "gastronomico")]
    Gastronomic,
    Natural,
    Cultural,
    #[serde(alias = "aventura")]
    Adventure,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Historical,
        Category::Gastronomic,
        Category::Natural,
        Category::Cultural,
        Category::Adventure,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Category::Historical => "historical",
            Category::Gastronomic => "gastronomic",
            Category::Natural => "natural",
            Category::Cultural => "cultural",
            Category::Adventure => "adventure",
        }
    }

    /// Translation key of the category's display label, e.g. `filter-historical`.
    pub fn label_key(self) -> String {
        format!("filter-{}", self.code())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "historical" | "historico" => Ok(Category::Historical),
            "gastronomic" | "gastronomico" => Ok(Category::Gastronomic),
            "natural" => Ok(Category::Natural),
            "cultural" => Ok(Category::Cultural),
            "adventure" | "aventura" => Ok(Category::Adventure),
            _ => Err(UnknownCategory(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Testimonial {
    pub author: String,
    pub rating: u8,
    pub comment: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TourRecord {
    pub id: u32,
    pub title: LocalizedText,
    pub description: LocalizedText,
    #[serde(default)]
    pub schedule: LocalizedText,
    pub category: Category,
    pub duration_minutes: u32,
    pub price_amount: f64,
    pub rating: f64,
    pub review_count: u32,
    #[serde(default)]
    pub itinerary: LocalizedList,
    #[serde(default)]
    pub includes: LocalizedList,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub image_ref: String,
}

impl TourRecord {
    pub fn is_free(&self) -> bool {
        self.price_amount == 0.0
    }

    // Names of the per-locale fields lacking an entry for some locale
    pub fn incomplete_fields(&self) -> Vec<(&'static str, Locale)> {
        let mut missing = Vec::new();
        let texts = [
            ("title", &self.title),
            ("description", &self.description),
            ("schedule", &self.schedule),
        ];
        for (field, text) in texts {
            for locale in text.missing_locales() {
                missing.push((field, locale));
            }
        }
        for (field, list) in [("itinerary", &self.itinerary), ("includes", &self.includes)] {
            for locale in list.missing_locales() {
                missing.push((field, locale));
            }
        }
        for testimonial in &self.testimonials {
            for locale in testimonial.comment.missing_locales() {
                missing.push(("testimonials.comment", locale));
            }
        }
        missing
    }
}
