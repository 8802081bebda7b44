use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub site_title: String,

    // Languages
    pub default_language: String,
    pub languages_file: Option<String>,

    // Vendor widget
    pub widget_script_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            site_title: std::env::var("SITE_TITLE")
                .unwrap_or_else(|_| "Translation widget demo".to_string()),

            // Languages
            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
            languages_file: std::env::var("LANGUAGES_FILE").ok(),

            // Vendor widget
            widget_script_url: std::env::var("WIDGET_SCRIPT_URL").unwrap_or_else(|_| {
                "https://translate.google.com/translate_a/element.js?cb=googleTranslateElementInit"
                    .to_string()
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "PORT",
            "SITE_TITLE",
            "DEFAULT_LANGUAGE",
            "LANGUAGES_FILE",
            "WIDGET_SCRIPT_URL",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("Should build config");

        assert_eq!(config.port, 8080);
        assert_eq!(config.default_language, "en");
        assert!(config.languages_file.is_none());
        assert!(config.widget_script_url.contains("element.js"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_overrides() {
        clear_env();
        std::env::set_var("PORT", "9090");
        std::env::set_var("DEFAULT_LANGUAGE", "de");
        std::env::set_var("SITE_TITLE", "Sprachdemo");
        std::env::set_var("LANGUAGES_FILE", "data/languages.json");

        let config = Config::from_env().expect("Should build config");

        assert_eq!(config.port, 9090);
        assert_eq!(config.default_language, "de");
        assert_eq!(config.site_title, "Sprachdemo");
        assert_eq!(config.languages_file.as_deref(), Some("data/languages.json"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_unparseable_port() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let config = Config::from_env().expect("Should build config");
        assert_eq!(config.port, 8080);

        clear_env();
    }
}
