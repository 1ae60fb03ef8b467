// End-to-end overview fetches through the real HTTP client

use crate::fake_provider::{FakeProvider, API_KEY};
use serde_json::json;
use stock_insights::alphavantage::OverviewSource;
use stock_insights::error::FetchError;
use stock_insights::session::{Session, SubmitOutcome};

fn provider() -> FakeProvider {
    FakeProvider::new(vec![
        (
            "AAPL",
            200,
            json!({
                "Symbol": "AAPL",
                "Name": "Apple Inc",
                "Exchange": "NASDAQ",
                "Currency": "USD",
                "MarketCapitalization": "3000000000",
                "DividendYield": "0.005",
                "52WeekHigh": "199.62",
                "52WeekLow": "164.08"
            }),
        ),
        ("GONE", 404, json!({ "Symbol": "GONE" })),
        (
            "BUSY",
            200,
            json!({ "Note": "Our standard API call frequency is 5 calls per minute." }),
        ),
    ])
}

#[tokio::test]
async fn test_successful_fetch_formats_fields() {
    let (_, client) = provider().spawn().await;
    let mut session = Session::new();

    let outcome = session.submit(&client, "aapl").await;

    assert_eq!(outcome, SubmitOutcome::Fetched { ticker: "AAPL".to_string() });
    let record = &session.snapshot().expect("snapshot").record;
    assert_eq!(record.market_capitalization, "3.00 Billion");
    assert_eq!(record.dividend_yield, "0.50%");
    assert_eq!(record.week_52_high, "$199.62");
    assert_eq!(record.week_52_low, "$164.08");
    assert_eq!(record.company_name, "Apple Inc");
    assert_eq!(record.sector, "N/A");
}

#[tokio::test]
async fn test_request_carries_overview_query() {
    let fake = provider();
    let requests = fake.requests.clone();
    let (_, client) = fake.spawn().await;

    client.fetch_overview("AAPL").await.expect("overview");

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["function"], "OVERVIEW");
    assert_eq!(requests[0]["symbol"], "AAPL");
    assert_eq!(requests[0]["apikey"], API_KEY);
}

#[tokio::test]
async fn test_404_is_failure_and_slot_unchanged() {
    let (_, client) = provider().spawn().await;
    let mut session = Session::new();
    session.submit(&client, "AAPL").await;
    let before = session.snapshot().cloned();

    let outcome = session.submit(&client, "GONE").await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            ticker: "GONE".to_string(),
            error: FetchError::Status(404)
        }
    );
    assert_eq!(outcome.banner().message, "Invalid ticker or data unavailable!");
    assert_eq!(session.snapshot().cloned(), before);
}

#[tokio::test]
async fn test_unknown_and_throttled_symbols() {
    let (_, client) = provider().spawn().await;

    assert_eq!(client.fetch_overview("NOPE").await, Err(FetchError::MissingSymbol));
    assert_eq!(client.fetch_overview("BUSY").await, Err(FetchError::MissingSymbol));
}

#[tokio::test]
async fn test_web_form_with_real_client() {
    use axum::body::Body;
    use axum::http::{header, Request};
    use stock_insights::transport::http::{build_router, handler::AppState};
    use tower::ServiceExt;

    let (_, client) = provider().spawn().await;
    let app = build_router(AppState::new(client));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/submit")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("ticker=aapl"))
                .unwrap(),
        )
        .await
        .unwrap();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Essential Insights for AAPL"));
    assert!(page.contains("<strong>52-Week High:</strong> $199.62"));
}
