// Tour catalog store: an immutable, ordered sequence of tour records loaded once
use crate::tour::TourRecord;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

// Catalog shipped with the site
pub const BUNDLED_TOURS_JSON: &str = include_str!("../data/tours.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Duplicate tour id: {0}")]
    DuplicateId(u32),

    #[error("Invalid tour {id}: {reason}")]
    InvalidRecord { id: u32, reason: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tours: Vec<TourRecord>,
}

impl Catalog {
    // Build a catalog from records, validating them in load order
    pub fn new(tours: Vec<TourRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(tours.len());
        for tour in &tours {
            if !seen.insert(tour.id) {
                return Err(CatalogError::DuplicateId(tour.id));
            }
            validate_record(tour)?;

            for (field, locale) in tour.incomplete_fields() {
                warn!(
                    tour_id = tour.id,
                    field,
                    locale = locale.as_str(),
                    "Tour is missing localized content"
                );
            }
        }

        debug!(count = tours.len(), "Loaded tour catalog");
        Ok(Self { tours })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let tours: Vec<TourRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::new(tours)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_TOURS_JSON)
    }

    pub fn tours(&self) -> &[TourRecord] {
        &self.tours
    }

    pub fn find(&self, id: u32) -> Option<&TourRecord> {
        self.tours.iter().find(|tour| tour.id == id)
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
}

fn validate_record(tour: &TourRecord) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidRecord {
        id: tour.id,
        reason: reason.to_string(),
    };

    if tour.duration_minutes == 0 {
        return Err(invalid("duration must be positive"));
    }
    if !tour.price_amount.is_finite() || tour.price_amount < 0.0 {
        return Err(invalid("price must be a non-negative number"));
    }
    if !(0.0..=5.0).contains(&tour.rating) {
        return Err(invalid("rating must be between 0 and 5"));
    }
    if let Some(bad) = tour
        .testimonials
        .iter()
        .find(|t| !(1..=5).contains(&t.rating))
    {
        return Err(invalid(&format!(
            "testimonial by {} has rating {}, expected 1-5",
            bad.author, bad.rating
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::{Category, Locale};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.len(), 8);

        let ids: Vec<u32> = catalog.tours().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        let historic = catalog.find(1).unwrap();
        assert_eq!(historic.title.get(Locale::Es), "Tour Histórico del Centro");
        assert_eq!(historic.category, Category::Historical);
        assert!(catalog.find(8).unwrap().is_free());
        assert!(catalog.find(42).is_none());

        for tour in catalog.tours() {
            assert!(
                tour.incomplete_fields().is_empty(),
                "Bundled tour {} is incomplete",
                tour.id
            );
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut tours = Catalog::bundled().unwrap().tours().to_vec();
        tours[1].id = tours[0].id;
        let result = Catalog::new(tours);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_invalid_records_rejected() {
        let base = Catalog::bundled().unwrap().tours()[0].clone();

        let mut zero_duration = base.clone();
        zero_duration.duration_minutes = 0;
        assert!(matches!(
            Catalog::new(vec![zero_duration]),
            Err(CatalogError::InvalidRecord { id: 1, .. })
        ));

        let mut negative_price = base.clone();
        negative_price.price_amount = -10.0;
        assert!(Catalog::new(vec![negative_price]).is_err());

        let mut high_rating = base.clone();
        high_rating.rating = 5.5;
        assert!(Catalog::new(vec![high_rating]).is_err());

        let mut bad_testimonial = base;
        bad_testimonial.testimonials[0].rating = 0;
        assert!(Catalog::new(vec![bad_testimonial]).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let result = Catalog::from_json("[{\"id\": 1}");
        assert!(matches!(result, Err(CatalogError::JsonParseError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{}", BUNDLED_TOURS_JSON).unwrap();

        let catalog = Catalog::from_json_file(tmp.path()).unwrap();
        assert_eq!(catalog.len(), 8);

        let missing = Catalog::from_json_file(Path::new("does/not/exist.json"));
        assert!(matches!(missing, Err(CatalogError::IoError(_))));
    }
}
