//! HTTP surface: the demo page, the switch endpoint, and a health probe.
//!
//! Switching is a hard reset: the handler persists the new preference as a
//! `Set-Cookie` header and redirects back to the referring page. The next
//! page load recomputes everything from the cookie, and the vendor widget
//! re-initializes against the new value on its own.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderName, StatusCode},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::cookie::CookiePreferences;
use crate::i18n::{LanguageCatalog, NoReload, PageReload, SelectionStore};
use crate::page;
use crate::switcher;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: LanguageCatalog,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/switch", get(switch_language))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn run(config: Arc<Config>, catalog: LanguageCatalog) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(AppState { config, catalog });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// GET / - the page embedding the widget and the switcher.
async fn index(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let prefs = CookiePreferences::from_headers(&headers);
    let store = SelectionStore::with_catalog(state.catalog.clone(), prefs, NoReload);

    let entries = switcher::entries(&store);
    let fragment = switcher::render_entries(&entries);

    Html(page::render_page(
        &state.config,
        state.catalog.default_code(),
        &fragment,
    ))
}

#[derive(Debug, Deserialize)]
struct SwitchParams {
    lang: String,
}

/// Reload capability realized as an HTTP redirect.
///
/// The selection component requests a reload after persisting; the handler
/// answers it with a redirect to the referring page.
#[derive(Debug, Default)]
struct RedirectReload {
    requested: bool,
}

impl PageReload for RedirectReload {
    fn reload(&mut self) {
        self.requested = true;
    }
}

/// GET /switch?lang=<code> - persist the choice, then reload.
async fn switch_language(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SwitchParams>,
) -> Response {
    let prefs = CookiePreferences::from_headers(&headers);
    let mut store =
        SelectionStore::with_catalog(state.catalog.clone(), prefs, RedirectReload::default());

    store.select_language(&params.lang);
    info!("Language switched to '{}'", params.lang);

    let (prefs, reload) = store.into_parts();
    let set_cookies: Vec<(HeaderName, String)> = prefs
        .set_cookie_headers()
        .into_iter()
        .map(|value| (header::SET_COOKIE, value))
        .collect();

    if reload.requested {
        let target = reload_target(&headers);
        (AppendHeaders(set_cookies), Redirect::to(&target)).into_response()
    } else {
        (AppendHeaders(set_cookies), StatusCode::NO_CONTENT).into_response()
    }
}

/// Where "reload the current page" points for an HTTP client.
///
/// Only the path of the Referer is kept so the redirect stays on this site.
fn reload_target(headers: &HeaderMap) -> String {
    let referer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok());

    match referer {
        Some(url) if url.starts_with('/') => url.to_string(),
        Some(url) => url
            .split_once("://")
            .and_then(|(_, rest)| rest.find('/').map(|i| rest[i..].to_string()))
            .unwrap_or_else(|| "/".to_string()),
        None => "/".to_string(),
    }
}

/// GET /health - liveness probe.
async fn health() -> &'static str {
    "OK"
}
