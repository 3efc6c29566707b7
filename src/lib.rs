// Core library for the Delicias, Chihuahua tourism site

pub mod availability;
pub mod browser;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod faq;
pub mod guide;
pub mod i18n;
pub mod render;
pub mod search;
pub mod site;
pub mod tour;

// Re-export key types for convenience
pub use availability::AvailabilityNotice;
pub use browser::TourBrowser;
pub use carousel::{AutoAdvance, Carousel, CarouselError, CarouselState, Direction};
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, SiteConfig};
pub use contact::{ContactError, ContactForm, ContactSubmission, LogOnlySink, SubmissionSink};
pub use faq::Accordion;
pub use guide::Guide;
pub use i18n::{
    FileLocaleStore, LabeledNode, LocaleError, LocaleStore, LocaleSwitcher, MemoryLocaleStore,
    TranslationTable,
};
pub use render::{TourCard, TourDetail};
pub use search::{DurationBucket, FilterCriteria, PriceBucket, SearchError, TourSearchProcessor};
pub use site::{Site, SiteError};
pub use tour::{Category, Locale, LocalizedText, TourRecord};
