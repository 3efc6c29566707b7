// Site context: shared read-only data plus factories for per-view controllers

use crate::browser::TourBrowser;
use crate::carousel::{AutoAdvance, Carousel, CarouselError, SharedCarousel};
use crate::catalog::{Catalog, CatalogError};
use crate::config::{ConfigError, SiteConfig};
use crate::guide::{Guide, GuideError};
use crate::i18n::{FileLocaleStore, LocaleError, LocaleStore, LocaleSwitcher, TranslationTable};
use crate::tour::Locale;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

// Slides of the legacy hero banner, as (title key, subtitle key)
pub const HERO_SLIDE_KEYS: [(&str, &str); 3] = [
    ("hero-title1", "hero-subtitle1"),
    ("hero-title2", "hero-subtitle2"),
    ("hero-title3", "hero-subtitle3"),
];

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Translation error: {0}")]
    Translations(#[from] LocaleError),

    #[error("Guide error: {0}")]
    Guide(#[from] GuideError),

    #[error("Carousel error: {0}")]
    Carousel(#[from] CarouselError),
}

// A carousel together with its running timer. Dropping it stops the timer.
pub struct CarouselView {
    pub carousel: SharedCarousel,
    pub auto_advance: AutoAdvance,
}

pub struct Site {
    config: SiteConfig,
    catalog: Arc<Catalog>,
    translations: Arc<TranslationTable>,
    guide: Guide,
}

impl Site {
    // Bundled data, except where the config points at override files
    pub fn load(config: SiteConfig) -> Result<Self, SiteError> {
        config.validate()?;
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_json_file(path)?,
            None => Catalog::bundled()?,
        };
        let translations = match &config.translations_path {
            Some(path) => TranslationTable::from_json_file(path)?,
            None => TranslationTable::bundled()?,
        };
        let guide = Guide::bundled()?;

        info!(
            tours = catalog.len(),
            attractions = guide.hero_attractions.len(),
            "Site data loaded"
        );

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            translations: Arc::new(translations),
            guide,
        })
    }

    pub fn bundled() -> Result<Self, SiteError> {
        Self::load(SiteConfig::default())
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn translations(&self) -> &Arc<TranslationTable> {
        &self.translations
    }

    pub fn guide(&self) -> &Guide {
        &self.guide
    }

    pub fn tour_browser(&self, locale: Option<Locale>) -> TourBrowser {
        TourBrowser::new(
            self.catalog.clone(),
            self.translations.clone(),
            locale.unwrap_or(self.config.default_locale),
        )
    }

    pub fn locale_switcher(&self) -> LocaleSwitcher<FileLocaleStore> {
        self.locale_switcher_with(FileLocaleStore::new(&self.config.locale_store_path))
    }

    pub fn locale_switcher_with<S: LocaleStore>(&self, store: S) -> LocaleSwitcher<S> {
        LocaleSwitcher::with_default(store, self.translations.clone(), self.config.default_locale)
    }

    // Must be called from within a tokio runtime
    pub fn hero_carousel(&self) -> Result<CarouselView, SiteError> {
        let carousel = Carousel::new(HERO_SLIDE_KEYS.len()).into_shared();
        let auto_advance = AutoAdvance::spawn(&carousel, self.config.hero_interval())?;
        Ok(CarouselView {
            carousel,
            auto_advance,
        })
    }

    // Must be called from within a tokio runtime
    pub fn attractions_carousel(&self) -> Result<CarouselView, SiteError> {
        let carousel = Carousel::new(self.guide.hero_attractions.len()).into_shared();
        let auto_advance = AutoAdvance::spawn(&carousel, self.config.attractions_interval())?;
        Ok(CarouselView {
            carousel,
            auto_advance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LabeledNode, MemoryLocaleStore};
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bundled_site() {
        let site = Site::bundled().unwrap();
        assert_eq!(site.catalog().len(), 8);
        assert_eq!(site.guide().hero_attractions.len(), 15);

        let browser = site.tour_browser(None);
        assert_eq!(browser.locale(), Locale::Es);
        assert_eq!(browser.result_count(), 8);
    }

    #[test]
    fn test_hero_slide_keys_are_translated() {
        let site = Site::bundled().unwrap();
        let mut switcher = site.locale_switcher_with(MemoryLocaleStore::default());
        let mut nodes: Vec<LabeledNode> = HERO_SLIDE_KEYS
            .iter()
            .flat_map(|(title, subtitle)| {
                [LabeledNode::text(*title, ""), LabeledNode::text(*subtitle, "")]
            })
            .collect();

        switcher.set_locale(Locale::En, &mut nodes);
        assert_eq!(nodes[0].text, "Welcome to Delicias, Chihuahua");
        assert!(nodes.iter().all(|node| !node.text.is_empty()));
    }

    #[test]
    fn test_catalog_override_from_config() {
        let mut tmp = NamedTempFile::new().unwrap();
        let single = Catalog::bundled().unwrap().tours()[..1].to_vec();
        write!(tmp, "{}", serde_json::to_string(&single).unwrap()).unwrap();

        let config = SiteConfig {
            catalog_path: Some(tmp.path().to_path_buf()),
            ..SiteConfig::default()
        };
        let site = Site::load(config).unwrap();
        assert_eq!(site.catalog().len(), 1);
    }

    #[test]
    fn test_missing_override_errors() {
        let config = SiteConfig {
            translations_path: Some("no/such/translations.json".into()),
            ..SiteConfig::default()
        };
        assert!(matches!(
            Site::load(config),
            Err(SiteError::Translations(LocaleError::IoError(_)))
        ));
    }

    #[test]
    fn test_zero_interval_config_rejected() {
        let config = SiteConfig {
            hero_interval_ms: 0,
            ..SiteConfig::default()
        };
        assert!(matches!(
            Site::load(config),
            Err(SiteError::Config(ConfigError::InvalidValue(_)))
        ));
    }

    #[test]
    fn test_default_locale_reaches_switcher() {
        let config = SiteConfig {
            default_locale: Locale::En,
            ..SiteConfig::default()
        };
        let site = Site::load(config).unwrap();
        let browser = site.tour_browser(None);
        let switcher = site.locale_switcher_with(MemoryLocaleStore::default());

        assert_eq!(browser.locale(), Locale::En);
        assert_eq!(switcher.active(), browser.locale());
        assert_eq!(switcher.indicator(), "EN");
    }

    #[tokio::test(start_paused = true)]
    async fn test_carousel_views_run_independently() {
        let site = Site::bundled().unwrap();
        let hero = site.hero_carousel().unwrap();
        let attractions = site.attractions_carousel().unwrap();

        tokio::time::sleep(Duration::from_millis(7100)).await;
        assert_eq!(hero.carousel.lock().current_index(), Some(1));
        assert_eq!(attractions.carousel.lock().current_index(), Some(1));

        // Tearing down the hero view leaves the attractions timer running
        let hero_carousel = hero.carousel.clone();
        drop(hero);
        tokio::time::sleep(Duration::from_millis(7000)).await;
        assert_eq!(hero_carousel.lock().current_index(), Some(1));
        assert_eq!(attractions.carousel.lock().current_index(), Some(2));
        assert!(attractions.auto_advance.is_running());
    }
}
