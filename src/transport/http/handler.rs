//! HTTP request handlers for the overview page
//!
//! Implements handlers for:
//! - GET /: Render the page with this client's session state
//! - POST /submit: Fetch a ticker from the form and render the result
//! - POST /proceed: Hand the displayed ticker on to analysis
//! - GET /api/overview/{ticker}: Display record as JSON, session untouched

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::error::{HttpTransportError, Result};
use super::session::{ClientHandle, SessionStore};
use crate::alphavantage::OverviewSource;
use crate::report::display::{build_display_record, DisplayOverviewRecord};
use crate::report::render::render_html;
use crate::session::{Banner, NOTHING_TO_PROCEED_MESSAGE};

/// Shared application state
pub struct AppState<S> {
    /// Overview data source
    pub source: Arc<S>,

    /// Display slots, one per browser session
    pub sessions: SessionStore,
}

impl<S> AppState<S> {
    pub fn new(source: S) -> Self {
        Self::with_sessions(source, SessionStore::default())
    }

    pub fn with_sessions(source: S, sessions: SessionStore) -> Self {
        Self {
            source: Arc::new(source),
            sessions,
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            sessions: self.sessions.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TickerForm {
    #[serde(default)]
    pub ticker: String,
}

/// Wrap a rendered page, attaching the session cookie for new clients
fn page_response(client: &ClientHandle, page: String) -> Response {
    let mut response = Html(page).into_response();
    if let Some(cookie) = client.set_cookie() {
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

/// GET /
pub async fn index<S>(State(state): State<AppState<S>>, headers: HeaderMap) -> Result<Response>
where
    S: OverviewSource + Send + Sync + 'static,
{
    let client = state.sessions.resolve(&headers).await?;
    let session = client.session.lock().await;

    Ok(page_response(&client, render_html(&session, None)))
}

/// POST /submit
///
/// Content-Type: application/x-www-form-urlencoded
///
/// Only this client's session is locked while the provider is queried.
pub async fn submit<S>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    Form(form): Form<TickerForm>,
) -> Result<Response>
where
    S: OverviewSource + Send + Sync + 'static,
{
    let client = state.sessions.resolve(&headers).await?;
    tracing::debug!(session_id = %client.id, ticker = %form.ticker, "Received form submission");

    let mut session = client.session.lock().await;
    let outcome = session.submit(state.source.as_ref(), &form.ticker).await;

    Ok(page_response(&client, render_html(&session, Some(&outcome.banner()))))
}

/// POST /proceed
pub async fn proceed<S>(State(state): State<AppState<S>>, headers: HeaderMap) -> Result<Response>
where
    S: OverviewSource + Send + Sync + 'static,
{
    let client = state.sessions.resolve(&headers).await?;
    let session = client.session.lock().await;
    let banner = session
        .proceed()
        .unwrap_or_else(|| Banner::error(NOTHING_TO_PROCEED_MESSAGE));

    Ok(page_response(&client, render_html(&session, Some(&banner))))
}

/// GET /api/overview/{ticker}
pub async fn api_overview<S>(
    State(state): State<AppState<S>>,
    Path(ticker): Path<String>,
) -> Result<Json<DisplayOverviewRecord>>
where
    S: OverviewSource + Send + Sync + 'static,
{
    let ticker = ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(HttpTransportError::EmptyTicker);
    }

    let raw = state.source.fetch_overview(&ticker).await?;
    Ok(Json(build_display_record(&raw)))
}
