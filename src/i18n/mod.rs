//! Internationalization (i18n) module for the language switcher.
//!
//! All language-related logic lives here: the catalog of selectable
//! languages and the selection component that derives the active language
//! from the persisted preference.
//!
//! # Architecture
//!
//! - `catalog`: the selectable languages and their display titles
//! - `selection`: preference parsing, persistence, and the reload contract
//!
//! # Example
//!
//! ```rust,ignore
//! use translate_switcher::i18n::{LanguageCatalog, MemoryPreferences, NoReload, SelectionStore};
//!
//! let store = SelectionStore::with_catalog(catalog, MemoryPreferences::new(), NoReload);
//! let active = store.current_selection();
//! ```

mod catalog;
mod selection;

pub use catalog::{load_catalog, CatalogError, LanguageCatalog, LanguageDescriptor};
pub use selection::{
    format_selection, parse_selection, MemoryPreferences, NoReload, PageReload, PreferenceStore,
    SelectionStore, AUTO_SENTINEL, PREFERENCE_KEY, SELECTION_PREFIX,
};
