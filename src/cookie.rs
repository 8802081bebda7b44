//! Request/response cookie handling for the preference store.
//!
//! Only the minimal slice of the cookie protocol this server needs: parsing
//! the `Cookie` request header and formatting site-wide `Set-Cookie`
//! response headers. Values are kept raw on both sides; `/` is legal in a
//! cookie value and the hosted widget expects the unencoded form.

use std::collections::HashMap;

use axum::http::{header, HeaderMap};

use crate::i18n::PreferenceStore;

/// All name/value pairs across the request's `Cookie` header(s), in order.
fn cookie_pairs(headers: &HeaderMap) -> impl Iterator<Item = (&str, &str)> + '_ {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// Read a single cookie value from the request headers.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    cookie_pairs(headers)
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Format a `Set-Cookie` value scoped to the entire site.
pub fn site_wide_cookie(name: &str, value: &str) -> String {
    format!("{}={}; Path=/", name, value)
}

/// Preference store backed by the cookies of one request/response cycle.
///
/// Reads come from the parsed `Cookie` header; writes are buffered and
/// turned into `Set-Cookie` headers when the response is built. A write is
/// visible to subsequent reads within the same cycle.
#[derive(Debug, Default)]
pub struct CookiePreferences {
    incoming: HashMap<String, String>,
    pending: Vec<(String, String)>,
}

impl CookiePreferences {
    /// Parse the `Cookie` header(s) of a request.
    ///
    /// On duplicate names the first occurrence wins, matching how browsers
    /// order cookies by specificity.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut incoming = HashMap::new();
        for (key, value) in cookie_pairs(headers) {
            incoming
                .entry(key.to_string())
                .or_insert_with(|| value.to_string());
        }
        Self {
            incoming,
            pending: Vec::new(),
        }
    }

    /// Buffered writes as `Set-Cookie` header values, in write order.
    pub fn set_cookie_headers(&self) -> Vec<String> {
        self.pending
            .iter()
            .map(|(name, value)| site_wide_cookie(name, value))
            .collect()
    }
}

impl PreferenceStore for CookiePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.pending
            .iter()
            .rev()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
            .or_else(|| self.incoming.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) {
        self.pending.push((key.to_string(), value.to_string()));
    }
}
