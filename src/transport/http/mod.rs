//! HTTP transport using Axum
//!
//! Serves the overview page as an HTML form backed by per-client session
//! slots, plus a stateless JSON endpoint.

pub mod error;
pub mod handler;
pub mod session;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::alphavantage::OverviewSource;
use crate::config::HttpConfig;
use crate::error::InsightsError;
use handler::{api_overview, index, proceed, submit, AppState};
use session::SessionStore;

/// How often expired sessions are swept
const SESSION_CLEANUP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(300);

/// Build the router for the overview page
///
/// # Endpoints
/// - GET /: Page with this client's current record
/// - POST /submit: Form submission (`ticker` field)
/// - POST /proceed: Proceed action
/// - GET /api/overview/{ticker}: JSON display record
///
/// # CORS
/// Configured to allow all origins (*) so the JSON endpoint can be used from other pages.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: OverviewSource + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index::<S>))
        .route("/submit", post(submit::<S>))
        .route("/proceed", post(proceed::<S>))
        .route("/api/overview/{ticker}", get(api_overview::<S>))
        .layer(cors)
        .with_state(state)
}

/// Start HTTP server serving the overview page
pub async fn start_http_server<S>(
    config: HttpConfig,
    source: S,
) -> Result<(), InsightsError>
where
    S: OverviewSource + Send + Sync + 'static,
{
    tracing::info!("Initializing HTTP server...");

    let sessions = SessionStore::default();
    let app = build_router(AppState::with_sessions(source, sessions.clone()));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    let addr = listener.local_addr()?;

    tracing::info!("HTTP server listening on {}", addr);
    tracing::info!("Page: http://{}/", addr);
    tracing::info!("API:  GET http://{}/api/overview/{{ticker}}", addr);

    // Sweep idle sessions in the background
    let cleanup = tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = sessions.cleanup_expired_sessions().await;
            if removed > 0 {
                let active = sessions.session_count().await;
                tracing::debug!(
                    removed,
                    active,
                    "Removed expired sessions"
                );
            }
        }
    });

    // Create graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    // Spawn shutdown signal handler
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Received shutdown signal (Ctrl+C)");
                let _ = shutdown_tx.send(());
            }
            Err(err) => {
                tracing::error!("Failed to listen for shutdown signal: {}", err);
            }
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_rx.await.ok();
            tracing::info!("Shutting down HTTP server...");
        })
        .await?;

    cleanup.abort();
    tracing::info!("Server stopped");
    Ok(())
}
