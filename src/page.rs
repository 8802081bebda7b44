//! The demo page hosting the translation widget.
//!
//! The page carries three things: the switcher fragment, a mount point for
//! the hosted widget, and the vendor loader snippet. The vendor script owns
//! everything past that point (language detection, DOM rewriting); nothing
//! here coordinates with it beyond sharing the preference cookie.

use crate::config::Config;
use crate::switcher::escape_html;

/// Render the full demo page.
///
/// `default_code` becomes the widget's page language so the vendor script
/// and the switcher agree on what "untranslated" means.
pub fn render_page(config: &Config, default_code: &str, switcher_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{default_code}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }}
    .language-switcher {{ margin-bottom: 1.5rem; }}
    .language {{ margin-right: 0.75rem; }}
    .language.current {{ font-weight: bold; }}
  </style>
</head>
<body>
{switcher}
  <h1>{title}</h1>
  <p>This page is served in one language and translated in the browser by a
  hosted translation widget. Pick a language above; the choice is stored in a
  site-wide cookie and the page reloads so the widget can apply it.</p>
  <div id="translation_widget"></div>
  <script>
    function googleTranslateElementInit() {{
      new google.translate.TranslateElement(
        {{ pageLanguage: '{default_code}', autoDisplay: false }},
        'translation_widget'
      );
    }}
  </script>
  <script src="{script_url}"></script>
</body>
</html>
"#,
        default_code = escape_html(default_code),
        title = escape_html(&config.site_title),
        switcher = switcher_html,
        script_url = escape_html(&config.widget_script_url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            port: 8080,
            site_title: "Widget <Demo>".to_string(),
            default_language: "en".to_string(),
            languages_file: None,
            widget_script_url: "https://widget.example.com/element.js?cb=init".to_string(),
        }
    }

    #[test]
    fn test_render_page_embeds_switcher_fragment() {
        let html = render_page(&test_config(), "en", "<nav>SWITCHER</nav>");
        assert!(html.contains("<nav>SWITCHER</nav>"));
    }

    #[test]
    fn test_render_page_references_vendor_script() {
        let html = render_page(&test_config(), "en", "");
        assert!(html.contains("https://widget.example.com/element.js?cb=init"));
        assert!(html.contains("id=\"translation_widget\""));
    }

    #[test]
    fn test_render_page_uses_default_as_page_language() {
        let html = render_page(&test_config(), "de", "");
        assert!(html.contains("<html lang=\"de\">"));
        assert!(html.contains("pageLanguage: 'de'"));
    }

    #[test]
    fn test_render_page_escapes_title() {
        let html = render_page(&test_config(), "en", "");
        assert!(html.contains("Widget &lt;Demo&gt;"));
        assert!(!html.contains("<title>Widget <Demo></title>"));
    }
}
