//! Language selection driven by a persisted preference.
//!
//! The hosted translation widget reads one site-wide cookie to decide which
//! language to render. This module owns the first-party half of that
//! contract: deriving the language in effect for the current page view and
//! persisting a new choice when the visitor picks one.
//!
//! The persisted value has the literal shape `"/auto/" + code`. Switching
//! never re-renders in place; it writes the new value and requests a full
//! page reload, after which everything is recomputed from the stored value.

use std::collections::HashMap;

use crate::i18n::LanguageCatalog;

/// Name of the preference cookie the widget watches.
pub const PREFERENCE_KEY: &str = "googtrans";

/// Fixed prefix of every persisted selection.
pub const SELECTION_PREFIX: &str = "/auto/";

/// Stored code meaning "detect the page language"; shown as the default
/// language in the switcher.
pub const AUTO_SENTINEL: &str = "auto";

/// Key/value store holding the visitor's preference.
///
/// Backed by the response cookie jar in the server and by a plain map in
/// tests and the preview binary. Writes are fire-and-forget: a store that
/// fails to persist is not observable from here.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Capability to reload the current page after a switch.
///
/// Injected separately from the store so tests can substitute a no-op and
/// assert only on the persisted write.
pub trait PageReload {
    fn reload(&mut self);
}

/// Extract the language code from a stored preference value.
///
/// Splits on `/` and takes the third segment, so `"/auto/de"` yields `de`.
/// Values with fewer than three segments are treated as absent. The code is
/// not checked against any catalog; whatever is stored is what is returned.
pub fn parse_selection(raw: &str) -> Option<&str> {
    let segments: Vec<&str> = raw.split('/').collect();
    if segments.len() > 2 {
        Some(segments[2])
    } else {
        None
    }
}

/// Format a language code as a persisted preference value.
pub fn format_selection(code: &str) -> String {
    format!("{}{}", SELECTION_PREFIX, code)
}

/// The language-selection component.
///
/// Holds the catalog (when one is available), the preference store, and the
/// reload capability. All state derived here is per page view; a switch
/// discards it by forcing a reload.
pub struct SelectionStore<P, R> {
    catalog: Option<LanguageCatalog>,
    prefs: P,
    reload: R,
}

impl<P: PreferenceStore, R: PageReload> SelectionStore<P, R> {
    /// Component without a catalog: the single defined empty state, in
    /// which nothing is rendered.
    pub fn new(prefs: P, reload: R) -> Self {
        Self {
            catalog: None,
            prefs,
            reload,
        }
    }

    /// Component with a loaded catalog.
    pub fn with_catalog(catalog: LanguageCatalog, prefs: P, reload: R) -> Self {
        Self {
            catalog: Some(catalog),
            prefs,
            reload,
        }
    }

    /// The catalog, once available.
    pub fn catalog(&self) -> Option<&LanguageCatalog> {
        self.catalog.as_ref()
    }

    /// The language code in effect for this page view.
    ///
    /// Reads the persisted preference; a missing or malformed value falls
    /// back to the catalog default. A stored code that the catalog does not
    /// know is returned as-is rather than coerced to the default.
    ///
    /// # Returns
    /// * `Some(code)` whenever a catalog is available
    /// * `None` only when no catalog has been attached yet
    pub fn current_selection(&self) -> Option<String> {
        let catalog = self.catalog.as_ref()?;

        let code = self
            .prefs
            .get(PREFERENCE_KEY)
            .as_deref()
            .and_then(parse_selection)
            .map(str::to_owned)
            .unwrap_or_else(|| catalog.default_code().to_string());

        Some(code)
    }

    /// Persist a new selection and request a page reload.
    ///
    /// Writes exactly `"/auto/" + code` under [`PREFERENCE_KEY`]. The code
    /// is not validated; callers are expected to only offer codes from the
    /// catalog, and an invalid code is silently persisted.
    pub fn select_language(&mut self, code: &str) {
        self.prefs.set(PREFERENCE_KEY, &format_selection(code));
        self.reload.reload();
    }

    /// Tear the component apart to recover the store and reload capability.
    ///
    /// The server uses this after a switch to turn buffered cookie writes
    /// into response headers.
    pub fn into_parts(self) -> (P, R) {
        (self.prefs, self.reload)
    }
}

/// In-memory preference store for tests and offline previews.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a single key/value pair.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Reload capability that does nothing.
///
/// Used when rendering (no navigation happens) and in tests that only care
/// about the persisted write.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReload;

impl PageReload for NoReload {
    fn reload(&mut self) {}
}
