//! Language catalog: Single source of truth for the selectable languages.
//!
//! The catalog is built once at startup and passed explicitly to every
//! component that needs it. Keeping it an ordinary value (instead of a
//! process-wide global) keeps the selection logic testable with ad-hoc
//! catalogs.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::config::Config;

/// One selectable language.
///
/// `code` is a short ISO-639-style code (e.g. "en", "de"); `title` is the
/// human-readable name shown in the switcher, usually in its native form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageDescriptor {
    pub code: String,
    pub title: String,
}

/// Errors raised when assembling a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no languages")]
    Empty,

    #[error("duplicate language code '{0}' in catalog")]
    DuplicateCode(String),

    #[error("default language '{0}' is not in the catalog")]
    UnknownDefault(String),
}

/// Ordered set of selectable languages plus the default language code.
///
/// The order of `languages` is the display order of the switcher and is
/// preserved exactly as given. Codes are unique within a catalog and
/// `default_code` always names one of the descriptors; both invariants are
/// enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: Vec<LanguageDescriptor>,
    default_code: String,
}

impl LanguageCatalog {
    /// Assemble a catalog, validating its invariants.
    ///
    /// # Arguments
    /// * `languages` - Descriptors in display order
    /// * `default_code` - Code of the language used when no preference is stored
    ///
    /// # Returns
    /// * `Ok(LanguageCatalog)` when the list is non-empty, codes are unique,
    ///   and `default_code` names one of the descriptors
    /// * `Err(CatalogError)` otherwise
    pub fn new(
        languages: Vec<LanguageDescriptor>,
        default_code: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let default_code = default_code.into();

        if languages.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for lang in &languages {
            if !seen.insert(lang.code.as_str()) {
                return Err(CatalogError::DuplicateCode(lang.code.clone()));
            }
        }

        if !languages.iter().any(|lang| lang.code == default_code) {
            return Err(CatalogError::UnknownDefault(default_code));
        }

        Ok(Self {
            languages,
            default_code,
        })
    }

    /// All descriptors in display order.
    pub fn languages(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    /// Code of the language used when no preference is stored.
    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    /// Look up a descriptor by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageDescriptor> {
        self.languages.iter().find(|lang| lang.code == code)
    }
}

/// The languages shipped with the binary.
///
/// Used unless a `LANGUAGES_FILE` replaces the whole set.
fn builtin_languages() -> Vec<LanguageDescriptor> {
    [
        ("en", "English"),
        ("de", "Deutsch"),
        ("fr", "Français"),
        ("es", "Español"),
    ]
    .into_iter()
    .map(|(code, title)| LanguageDescriptor {
        code: code.to_string(),
        title: title.to_string(),
    })
    .collect()
}

/// On-disk catalog shape (JSON).
#[derive(Debug, Deserialize)]
struct CatalogFile {
    default: String,
    languages: Vec<LanguageDescriptor>,
}

/// Build the catalog the server will run with.
///
/// With `LANGUAGES_FILE` set, the file supplies both the language list and
/// the default code. Otherwise the built-in list is used together with the
/// configured `DEFAULT_LANGUAGE`.
pub fn load_catalog(config: &Config) -> Result<LanguageCatalog> {
    match &config.languages_file {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read languages file at {}", path))?;
            let file: CatalogFile = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse languages file at {}", path))?;
            LanguageCatalog::new(file.languages, file.default)
                .with_context(|| format!("Invalid catalog in languages file at {}", path))
        }
        None => LanguageCatalog::new(builtin_languages(), config.default_language.clone())
            .context("Invalid DEFAULT_LANGUAGE for the built-in catalog"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(code: &str, title: &str) -> LanguageDescriptor {
        LanguageDescriptor {
            code: code.to_string(),
            title: title.to_string(),
        }
    }

    fn test_config(languages_file: Option<String>, default_language: &str) -> Config {
        Config {
            port: 8080,
            site_title: "Test".to_string(),
            default_language: default_language.to_string(),
            languages_file,
            widget_script_url: "https://widget.example.com/element.js".to_string(),
        }
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_accepts_valid_catalog() {
        let catalog = LanguageCatalog::new(
            vec![descriptor("en", "English"), descriptor("de", "Deutsch")],
            "en",
        )
        .expect("Should build catalog");

        assert_eq!(catalog.languages().len(), 2);
        assert_eq!(catalog.default_code(), "en");
    }

    #[test]
    fn test_new_rejects_empty_catalog() {
        let result = LanguageCatalog::new(vec![], "en");
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_new_rejects_duplicate_code() {
        let result = LanguageCatalog::new(
            vec![descriptor("en", "English"), descriptor("en", "Inglés")],
            "en",
        );

        match result {
            Err(CatalogError::DuplicateCode(code)) => assert_eq!(code, "en"),
            other => panic!("Expected DuplicateCode, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_unknown_default() {
        let result = LanguageCatalog::new(vec![descriptor("en", "English")], "fr");

        match result {
            Err(CatalogError::UnknownDefault(code)) => assert_eq!(code, "fr"),
            other => panic!("Expected UnknownDefault, got {:?}", other),
        }
    }

    #[test]
    fn test_languages_preserve_order() {
        let catalog = LanguageCatalog::new(
            vec![
                descriptor("fr", "Français"),
                descriptor("en", "English"),
                descriptor("de", "Deutsch"),
            ],
            "en",
        )
        .expect("Should build catalog");

        let codes: Vec<&str> = catalog
            .languages()
            .iter()
            .map(|lang| lang.code.as_str())
            .collect();
        assert_eq!(codes, vec!["fr", "en", "de"]);
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_by_code_found() {
        let catalog = LanguageCatalog::new(
            vec![descriptor("en", "English"), descriptor("de", "Deutsch")],
            "en",
        )
        .expect("Should build catalog");

        let lang = catalog.get_by_code("de").expect("Should find de");
        assert_eq!(lang.title, "Deutsch");
    }

    #[test]
    fn test_get_by_code_missing() {
        let catalog =
            LanguageCatalog::new(vec![descriptor("en", "English")], "en").expect("Should build");
        assert!(catalog.get_by_code("fr").is_none());
    }

    // ==================== Built-in Catalog Tests ====================

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = LanguageCatalog::new(builtin_languages(), "en")
            .expect("Built-in languages should form a valid catalog");

        assert!(catalog.get_by_code("en").is_some());
        assert!(catalog.get_by_code("de").is_some());
        assert_eq!(catalog.default_code(), "en");
    }

    #[test]
    fn test_load_catalog_uses_builtin_without_file() {
        let config = test_config(None, "de");
        let catalog = load_catalog(&config).expect("Should load built-in catalog");

        assert_eq!(catalog.default_code(), "de");
        assert!(catalog.get_by_code("fr").is_some());
    }

    #[test]
    fn test_load_catalog_rejects_default_outside_builtin() {
        let config = test_config(None, "xx");
        assert!(load_catalog(&config).is_err());
    }

    // ==================== Catalog File Tests ====================

    #[test]
    fn test_load_catalog_from_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("languages.json");
        std::fs::write(
            &path,
            r#"{
                "default": "it",
                "languages": [
                    {"code": "it", "title": "Italiano"},
                    {"code": "pt", "title": "Português"}
                ]
            }"#,
        )
        .expect("Should write languages file");

        let config = test_config(Some(path.to_str().unwrap().to_string()), "en");
        let catalog = load_catalog(&config).expect("Should load catalog from file");

        assert_eq!(catalog.default_code(), "it");
        assert_eq!(catalog.languages().len(), 2);
        assert_eq!(catalog.get_by_code("pt").unwrap().title, "Português");
    }

    #[test]
    fn test_load_catalog_missing_file_errors() {
        let config = test_config(Some("/nonexistent/languages.json".to_string()), "en");
        let err = load_catalog(&config).expect_err("Missing file should error");
        assert!(err.to_string().contains("languages file"));
    }

    #[test]
    fn test_load_catalog_invalid_json_errors() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("languages.json");
        std::fs::write(&path, "not json").expect("Should write file");

        let config = test_config(Some(path.to_str().unwrap().to_string()), "en");
        assert!(load_catalog(&config).is_err());
    }

    #[test]
    fn test_load_catalog_file_with_bad_default_errors() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("languages.json");
        std::fs::write(
            &path,
            r#"{"default": "xx", "languages": [{"code": "en", "title": "English"}]}"#,
        )
        .expect("Should write file");

        let config = test_config(Some(path.to_str().unwrap().to_string()), "en");
        assert!(load_catalog(&config).is_err());
    }
}
