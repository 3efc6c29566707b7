// Tour search pipeline: free-text search plus category, duration and price buckets
use crate::catalog::Catalog;
use crate::tour::{Category, Locale, TourRecord};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

// Minutes. Both boundaries belong to the medium bucket.
pub const SHORT_TOUR_LIMIT: u32 = 180;
pub const LONG_TOUR_LIMIT: u32 = 360;

// MXN
pub const LOW_PRICE_LIMIT: f64 = 200.0;
pub const HIGH_PRICE_LIMIT: f64 = 500.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Unknown {control} filter value: {value}")]
    UnknownControlValue {
        control: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationBucket {
    #[default]
    All,
    Short,
    Medium,
    Long,
}

impl DurationBucket {
    pub fn contains(self, minutes: u32) -> bool {
        match self {
            DurationBucket::All => true,
            DurationBucket::Short => minutes < SHORT_TOUR_LIMIT,
            DurationBucket::Medium => (SHORT_TOUR_LIMIT..=LONG_TOUR_LIMIT).contains(&minutes),
            DurationBucket::Long => minutes > LONG_TOUR_LIMIT,
        }
    }
}

impl FromStr for DurationBucket {
    type Err = SearchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(DurationBucket::All),
            "short" => Ok(DurationBucket::Short),
            "medium" => Ok(DurationBucket::Medium),
            "long" => Ok(DurationBucket::Long),
            _ => Err(SearchError::UnknownControlValue {
                control: "duration",
                value: value.to_string(),
            }),
        }
    }
}

// Price buckets. Low and Medium both include exactly 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBucket {
    #[default]
    All,
    Free,
    Low,
    Medium,
    High,
}

impl PriceBucket {
    pub fn contains(self, price: f64) -> bool {
        match self {
            PriceBucket::All => true,
            PriceBucket::Free => price == 0.0,
            PriceBucket::Low => price > 0.0 && price <= LOW_PRICE_LIMIT,
            PriceBucket::Medium => (LOW_PRICE_LIMIT..=HIGH_PRICE_LIMIT).contains(&price),
            PriceBucket::High => price > HIGH_PRICE_LIMIT,
        }
    }
}

impl FromStr for PriceBucket {
    type Err = SearchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(PriceBucket::All),
            "free" => Ok(PriceBucket::Free),
            "low" => Ok(PriceBucket::Low),
            "medium" => Ok(PriceBucket::Medium),
            "high" => Ok(PriceBucket::High),
            _ => Err(SearchError::UnknownControlValue {
                control: "price",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub category: Option<Category>,
    pub duration: DurationBucket,
    pub price: PriceBucket,
}

impl FilterCriteria {
    // Build criteria from raw UI control values ("all" disables a control)
    pub fn from_controls(
        search_text: &str,
        category: &str,
        duration: &str,
        price: &str,
    ) -> Result<Self, SearchError> {
        Ok(Self {
            search_text: search_text.to_string(),
            category: parse_category_control(category)?,
            duration: duration.parse()?,
            price: price.parse()?,
        })
    }

    pub fn is_all_pass(&self) -> bool {
        self.search_text.is_empty()
            && self.category.is_none()
            && self.duration == DurationBucket::All
            && self.price == PriceBucket::All
    }
}

pub fn parse_category_control(value: &str) -> Result<Option<Category>, SearchError> {
    if value == "all" {
        return Ok(None);
    }
    Category::from_str(value)
        .map(Some)
        .map_err(|_| SearchError::UnknownControlValue {
            control: "category",
            value: value.to_string(),
        })
}

pub struct TourSearchProcessor;

impl TourSearchProcessor {
    // Extract the tours matching every criterion, keeping catalog order.
    // The locale picks which title/description the search text is matched against.
    pub fn filter<'a>(
        catalog: &'a Catalog,
        criteria: &FilterCriteria,
        locale: Option<Locale>,
    ) -> Vec<&'a TourRecord> {
        let tours = catalog.tours();
        Self::filter_positions(catalog, criteria, locale)
            .into_iter()
            .map(|position| &tours[position])
            .collect()
    }

    // Same pipeline, returning catalog positions instead of records
    pub fn filter_positions(
        catalog: &Catalog,
        criteria: &FilterCriteria,
        locale: Option<Locale>,
    ) -> Vec<usize> {
        let locale = locale.unwrap_or_default();
        let needle = criteria.search_text.to_lowercase();

        let positions: Vec<usize> = catalog
            .tours()
            .iter()
            .enumerate()
            .filter(|(_, tour)| matches_criteria(tour, criteria, &needle, locale))
            .map(|(position, _)| position)
            .collect();

        debug!(
            matched = positions.len(),
            total = catalog.len(),
            locale = locale.as_str(),
            "Applied tour filters"
        );
        positions
    }
}

fn matches_criteria(
    tour: &TourRecord,
    criteria: &FilterCriteria,
    needle: &str,
    locale: Locale,
) -> bool {
    if !needle.is_empty() && !matches_text(tour, needle, locale) {
        return false;
    }

    if !criteria
        .category
        .map_or(true, |category| tour.category == category)
    {
        return false;
    }

    if !criteria.duration.contains(tour.duration_minutes) {
        return false;
    }

    criteria.price.contains(tour.price_amount)
}

fn matches_text(tour: &TourRecord, needle: &str, locale: Locale) -> bool {
    tour.title.get(locale).to_lowercase().contains(needle)
        || tour.description.get(locale).to_lowercase().contains(needle)
}
