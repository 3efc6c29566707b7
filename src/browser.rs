// Tour listing controller: owns the active criteria and the current result set.
// Every control change re-runs the whole pipeline against the full catalog.
use crate::catalog::Catalog;
use crate::i18n::TranslationTable;
use crate::render::{self, TourCard, TourDetail};
use crate::search::{DurationBucket, FilterCriteria, PriceBucket, SearchError, TourSearchProcessor};
use crate::tour::{Category, Locale, TourRecord};
use std::sync::Arc;

pub struct TourBrowser {
    catalog: Arc<Catalog>,
    table: Arc<TranslationTable>,
    criteria: FilterCriteria,
    locale: Locale,
    // Catalog positions of the current matches, in catalog order
    matches: Vec<usize>,
}

impl TourBrowser {
    pub fn new(catalog: Arc<Catalog>, table: Arc<TranslationTable>, locale: Locale) -> Self {
        let matches = (0..catalog.len()).collect();
        Self {
            catalog,
            table,
            criteria: FilterCriteria::default(),
            locale,
            matches,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.refresh();
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.criteria.category = category;
        self.refresh();
    }

    pub fn set_duration(&mut self, duration: DurationBucket) {
        self.criteria.duration = duration;
        self.refresh();
    }

    pub fn set_price(&mut self, price: PriceBucket) {
        self.criteria.price = price;
        self.refresh();
    }

    // Search text is matched against the active locale, so a switch re-filters
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.refresh();
    }

    // Raw control values; on error nothing changes
    pub fn apply_controls(
        &mut self,
        search_text: &str,
        category: &str,
        duration: &str,
        price: &str,
    ) -> Result<(), SearchError> {
        let criteria = FilterCriteria::from_controls(search_text, category, duration, price)?;
        self.set_criteria(criteria);
        Ok(())
    }

    fn refresh(&mut self) {
        self.matches =
            TourSearchProcessor::filter_positions(&self.catalog, &self.criteria, Some(self.locale));
    }

    pub fn results(&self) -> Vec<&TourRecord> {
        let tours = self.catalog.tours();
        self.matches.iter().map(|&i| &tours[i]).collect()
    }

    pub fn result_count(&self) -> usize {
        self.matches.len()
    }

    pub fn cards(&self) -> Vec<TourCard> {
        render::cards(self.results(), self.locale, &self.table)
    }

    // Unknown ids open nothing
    pub fn open_detail(&self, id: u32) -> Option<TourDetail> {
        self.catalog
            .find(id)
            .map(|tour| render::detail(tour, self.locale, &self.table))
    }
}
