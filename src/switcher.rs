//! The language switcher: one entry per catalog language.
//!
//! Rendering is a pure function of the selection component. Each language
//! becomes either a non-interactive label (the language in effect) or a
//! clickable control that switches to it. With no catalog attached the
//! switcher renders nothing at all.

use crate::i18n::{PageReload, PreferenceStore, SelectionStore, AUTO_SENTINEL};

/// One rendered switcher position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitcherEntry {
    /// Non-interactive marker for the language currently in effect.
    Label { title: String },
    /// Interactive control that switches to `code` on activation.
    Control { code: String, title: String },
}

/// Produce the switcher entries for the current page view.
///
/// Entries follow catalog order exactly. A language is rendered as a label
/// when its code equals the current selection, or when the stored selection
/// is the `auto` sentinel and the language is the catalog default (the
/// sentinel aliases the default for highlighting only). Everything else is
/// a control.
///
/// Without a catalog the result is empty: no partial UI, no error.
pub fn entries<P, R>(store: &SelectionStore<P, R>) -> Vec<SwitcherEntry>
where
    P: PreferenceStore,
    R: PageReload,
{
    let Some(catalog) = store.catalog() else {
        return Vec::new();
    };
    let Some(current) = store.current_selection() else {
        return Vec::new();
    };

    catalog
        .languages()
        .iter()
        .map(|lang| {
            let highlighted = lang.code == current
                || (current == AUTO_SENTINEL && lang.code == catalog.default_code());
            if highlighted {
                SwitcherEntry::Label {
                    title: lang.title.clone(),
                }
            } else {
                SwitcherEntry::Control {
                    code: lang.code.clone(),
                    title: lang.title.clone(),
                }
            }
        })
        .collect()
}

/// Render entries as an HTML fragment.
///
/// Labels become `<span>`s, controls become links to the switch endpoint.
/// An empty entry list renders an empty string rather than an empty `<nav>`.
pub fn render_entries(entries: &[SwitcherEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut html = String::from("<nav class=\"language-switcher\">\n");
    for entry in entries {
        match entry {
            SwitcherEntry::Label { title } => {
                html.push_str(&format!(
                    "  <span class=\"language current\">{}</span>\n",
                    escape_html(title)
                ));
            }
            SwitcherEntry::Control { code, title } => {
                html.push_str(&format!(
                    "  <a class=\"language\" href=\"/switch?lang={}\">{}</a>\n",
                    escape_html(code),
                    escape_html(title)
                ));
            }
        }
    }
    html.push_str("</nav>");
    html
}

/// Escape text for safe embedding in HTML body and attribute positions.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
