// Locale switching over a flat translation table; missing entries leave text as is

use crate::tour::Locale;
use parking_lot::Mutex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

pub const BUNDLED_TRANSLATIONS_JSON: &str = include_str!("../data/translations.json");

// Well-known key under which the chosen locale is persisted
pub const LOCALE_STORAGE_KEY: &str = "language";

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Unknown locale code: {0}")]
    UnknownLocale(String),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// locale code -> key -> display string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: HashMap<String, HashMap<String, String>>,
}

impl TranslationTable {
    pub fn from_json(json: &str) -> Result<Self, LocaleError> {
        serde_json::from_str(json).map_err(|e| LocaleError::JsonParseError(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, LocaleError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn bundled() -> Result<Self, LocaleError> {
        Self::from_json(BUNDLED_TRANSLATIONS_JSON)
    }

    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.get_code(locale.as_str(), key)
    }

    pub fn get_code(&self, code: &str, key: &str) -> Option<&str> {
        self.entries
            .get(code)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    // Text for `key`, or `fallback` when the table has no entry
    pub fn text_or<'a>(&'a self, locale: Locale, key: &str, fallback: &'a str) -> &'a str {
        self.get(locale, key).unwrap_or(fallback)
    }

    pub fn has_locale(&self, locale: Locale) -> bool {
        self.entries.contains_key(locale.as_str())
    }

    pub fn insert(&mut self, locale: Locale, key: impl Into<String>, text: impl Into<String>) {
        self.entries
            .entry(locale.as_str().to_string())
            .or_default()
            .insert(key.into(), text.into());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTarget {
    Text,
    Placeholder,
}

// A display element tagged with a translation key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledNode {
    pub key: String,
    pub target: NodeTarget,
    pub text: String,
}

impl LabeledNode {
    pub fn text(key: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: NodeTarget::Text,
            text: initial.into(),
        }
    }

    pub fn placeholder(key: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: NodeTarget::Placeholder,
            text: initial.into(),
        }
    }
}

/// Re-project `locale` onto every node. Returns how many nodes received text.
/// An empty translation counts as missing.
pub fn project(table: &TranslationTable, locale: Locale, nodes: &mut [LabeledNode]) -> usize {
    let mut updated = 0;
    for node in nodes.iter_mut() {
        if let Some(text) = table.get(locale, &node.key).filter(|text| !text.is_empty()) {
            node.text = text.to_string();
            updated += 1;
        }
    }
    updated
}

// Durable client-side storage for the chosen locale
pub trait LocaleStore: Send + Sync {
    fn load(&self) -> Result<Option<Locale>, LocaleError>;

    fn save(&self, locale: Locale) -> Result<(), LocaleError>;
}

#[derive(Debug, Default)]
pub struct MemoryLocaleStore {
    value: Mutex<Option<Locale>>,
}

impl MemoryLocaleStore {
    pub fn new(initial: Option<Locale>) -> Self {
        Self {
            value: Mutex::new(initial),
        }
    }
}

impl LocaleStore for MemoryLocaleStore {
    fn load(&self) -> Result<Option<Locale>, LocaleError> {
        Ok(*self.value.lock())
    }

    fn save(&self, locale: Locale) -> Result<(), LocaleError> {
        *self.value.lock() = Some(locale);
        Ok(())
    }
}

// Persists `{"language": "<code>"}` to a JSON file
#[derive(Debug, Clone)]
pub struct FileLocaleStore {
    path: PathBuf,
}

impl FileLocaleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LocaleStore for FileLocaleStore {
    fn load(&self) -> Result<Option<Locale>, LocaleError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let stored: HashMap<String, String> = serde_json::from_str(&contents)
            .map_err(|e| LocaleError::JsonParseError(e.to_string()))?;

        Ok(stored
            .get(LOCALE_STORAGE_KEY)
            .and_then(|code| code.parse().ok()))
    }

    fn save(&self, locale: Locale) -> Result<(), LocaleError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let stored = HashMap::from([(LOCALE_STORAGE_KEY, locale.as_str())]);
        let json = serde_json::to_string(&stored)
            .map_err(|e| LocaleError::JsonParseError(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

pub struct LocaleSwitcher<S: LocaleStore> {
    store: S,
    table: Arc<TranslationTable>,
    current: Option<Locale>,
    default_locale: Locale,
}

impl<S: LocaleStore> LocaleSwitcher<S> {
    pub fn new(store: S, table: Arc<TranslationTable>) -> Self {
        Self::with_default(store, table, Locale::default())
    }

    // Reads the persisted locale once; unreadable storage counts as unset
    pub fn with_default(store: S, table: Arc<TranslationTable>, default_locale: Locale) -> Self {
        let current = match store.load() {
            Ok(locale) => locale,
            Err(e) => {
                warn!(error = %e, "Could not read stored locale");
                None
            }
        };

        Self {
            store,
            table,
            current,
            default_locale,
        }
    }

    pub fn current(&self) -> Option<Locale> {
        self.current
    }

    // Locale used for display, the default until the visitor picks one
    pub fn active(&self) -> Locale {
        self.current.unwrap_or(self.default_locale)
    }

    // The language modal is shown until a locale has been chosen
    pub fn needs_prompt(&self) -> bool {
        self.current.is_none()
    }

    pub fn indicator(&self) -> String {
        self.active().as_str().to_uppercase()
    }

    pub fn table(&self) -> &Arc<TranslationTable> {
        &self.table
    }

    pub fn translate(&self, key: &str) -> Option<&str> {
        self.table.get(self.active(), key)
    }

    pub fn set_locale(&mut self, locale: Locale, nodes: &mut [LabeledNode]) -> Locale {
        if let Err(e) = self.store.save(locale) {
            warn!(locale = locale.as_str(), error = %e, "Failed to persist locale");
        }
        self.current = Some(locale);

        let updated = project(&self.table, locale, nodes);
        info!(
            locale = locale.as_str(),
            updated,
            total = nodes.len(),
            "Switched locale"
        );
        locale
    }

    // Unknown codes are rejected before anything is persisted or re-rendered
    pub fn set_locale_code(
        &mut self,
        code: &str,
        nodes: &mut [LabeledNode],
    ) -> Result<Locale, LocaleError> {
        let locale: Locale = code
            .parse()
            .map_err(|_| LocaleError::UnknownLocale(code.to_string()))?;
        Ok(self.set_locale(locale, nodes))
    }

    pub fn apply(&self, nodes: &mut [LabeledNode]) -> usize {
        project(&self.table, self.active(), nodes)
    }
}
