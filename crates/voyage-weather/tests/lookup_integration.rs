//! Integration tests for CountryLookup using wiremock.

use voyage_core::LookupConfig;
use voyage_weather::{
    find_country, CountryLookup, CountrySnapshot, LookupError, SnapshotSource, FALLBACK_DESCRIPTION,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> LookupConfig {
    LookupConfig {
        weather_api_url: format!("{}/data/2.5", server.uri()),
        exchange_api_url: format!("{}/v4", server.uri()),
        ..LookupConfig::default()
    }
}

fn weather_body(temp: f64, description: &str) -> serde_json::Value {
    serde_json::json!({
        "main": { "temp": temp, "humidity": 60 },
        "weather": [{ "id": 800, "main": "Clear", "description": description }],
        "name": "Tokyo"
    })
}

fn rates_body() -> serde_json::Value {
    serde_json::json!({
        "base": "TWD",
        "rates": { "TWD": 1.0, "JPY": 4.6512, "USD": 0.0312, "EUR": 0.0289 }
    })
}

async fn mount_rates(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v4/latest/TWD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rates_body()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_live_snapshot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "35.6762"))
        .and(query_param("lon", "139.6503"))
        .and(query_param("appid", "demo"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "zh_tw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body(18.4, "晴")))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_rates(&mock_server).await;

    let lookup = CountryLookup::new(&config_for(&mock_server)).unwrap();
    let jp = find_country("JP").unwrap();
    let snap = lookup.snapshot(jp).await;

    assert_eq!(snap.source, SnapshotSource::Live);
    assert_eq!(snap.rounded_temperature(), 18);
    assert_eq!(snap.description, "晴");
    assert_eq!(snap.exchange_rate, 4.6512);
    assert_eq!(format!("{:.2}", snap.inverse_rate().unwrap()), "0.21");
}

#[tokio::test]
async fn test_both_providers_down_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let lookup = CountryLookup::new(&config_for(&mock_server)).unwrap();
    let snap = lookup.snapshot(find_country("JP").unwrap()).await;

    assert_eq!(snap.source, SnapshotSource::Fallback);
    assert_eq!(snap.rounded_temperature(), 25);
    assert_eq!(snap.description, "Sunny");
    assert_eq!(snap.exchange_rate, 0.25);
}

#[tokio::test]
async fn test_single_failure_replaces_whole_snapshot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body(31.0, "haze")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/latest/TWD"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let lookup = CountryLookup::new(&config_for(&mock_server)).unwrap();
    let snap = lookup.snapshot(find_country("TH").unwrap()).await;

    // The successful weather half is discarded as well
    assert!(snap.is_fallback());
    assert_eq!(snap.rounded_temperature(), 25);
    assert_eq!(snap.description, "Sunny");
}

#[tokio::test]
async fn test_currency_absent_from_rates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body(20.0, "clouds")))
        .mount(&mock_server)
        .await;
    mount_rates(&mock_server).await;

    let lookup = CountryLookup::new(&config_for(&mock_server)).unwrap();
    // KRW is not in the mocked table
    let snap = lookup.snapshot(find_country("KR").unwrap()).await;

    assert!(snap.is_fallback());
    assert_eq!(snap.exchange_rate, 0.25);
}

#[tokio::test]
async fn test_missing_description_uses_placeholder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "main": { "temp": 12.2 },
            "weather": []
        })))
        .mount(&mock_server)
        .await;
    mount_rates(&mock_server).await;

    let lookup = CountryLookup::new(&config_for(&mock_server)).unwrap();
    let snap = lookup.snapshot(find_country("FR").unwrap()).await;

    assert_eq!(snap.source, SnapshotSource::Live);
    assert_eq!(snap.description, FALLBACK_DESCRIPTION);
    // A live reading without a description reads the same as the placeholder
    assert_eq!(snap.description, CountrySnapshot::fallback().description);
    assert_eq!(snap.rounded_temperature(), 12);
    assert_eq!(snap.exchange_rate, 0.0289);
}

#[tokio::test]
async fn test_malformed_weather_body_falls_back() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&mock_server)
        .await;
    mount_rates(&mock_server).await;

    let lookup = CountryLookup::new(&config_for(&mock_server)).unwrap();
    let snap = lookup.snapshot(find_country("US").unwrap()).await;

    assert!(snap.is_fallback());
}

#[tokio::test]
async fn test_exchange_provider_reports_missing_rate() {
    let mock_server = MockServer::start().await;
    mount_rates(&mock_server).await;

    let config = config_for(&mock_server);
    let client = std::sync::Arc::new(reqwest::Client::new());
    let exchange = voyage_weather::ExchangeProvider::new(client, &config).unwrap();

    assert_eq!(exchange.rate("USD").await.unwrap(), 0.0312);
    assert!(matches!(
        exchange.rate("AUD").await,
        Err(LookupError::MissingRate(code)) if code == "AUD"
    ));
}
