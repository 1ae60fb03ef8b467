// In-process stand-in for the Alpha Vantage query endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use stock_insights::alphavantage::AlphaVantageClient;
use stock_insights::config::{ProviderConfig, SecretString};

pub const API_KEY: &str = "TESTKEY123456";

#[derive(Clone, Default)]
pub struct FakeProvider {
    /// Canned answers keyed by symbol: (status, JSON body)
    answers: Arc<HashMap<String, (u16, serde_json::Value)>>,
    /// Query strings received, in order
    pub requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeProvider {
    pub fn new(answers: Vec<(&str, u16, serde_json::Value)>) -> Self {
        let answers = answers
            .into_iter()
            .map(|(symbol, status, body)| (symbol.to_string(), (status, body)))
            .collect();
        Self {
            answers: Arc::new(answers),
            requests: Arc::default(),
        }
    }

    /// Serve on an ephemeral localhost port and return a client pointed at it
    pub async fn spawn(self) -> (SocketAddr, AlphaVantageClient) {
        let app = Router::new()
            .route("/query", get(answer))
            .with_state(self);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake provider");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake provider");
        });

        let config = ProviderConfig {
            base_url: format!("http://{}", addr),
            api_key: SecretString::from(API_KEY),
            timeout: Duration::from_secs(5),
        };
        let client = AlphaVantageClient::new(&config).expect("client");
        (addr, client)
    }
}

async fn answer(
    State(provider): State<FakeProvider>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    provider.requests.lock().unwrap().push(params.clone());

    let symbol = params.get("symbol").cloned().unwrap_or_default();
    match provider.answers.get(&symbol) {
        Some((status, body)) => {
            let status = StatusCode::from_u16(*status).unwrap();
            (status, Json(body.clone())).into_response()
        }
        // Alpha Vantage answers unknown symbols with an empty object
        None => Json(serde_json::json!({})).into_response(),
    }
}
