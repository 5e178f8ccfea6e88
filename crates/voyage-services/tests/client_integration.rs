//! Integration tests for TravelClient using wiremock.

use voyage_core::NetworkError;
use voyage_services::{ExpenseRequest, PackingCategory, PackingRequest, TravelClient};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_expense(id: i64, country: &str, days: u32, cost: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "country": country,
        "days": days,
        "cost": cost,
        "note": "",
        "created_at": "2026-05-01T09:00:00",
        "updated_at": "2026-05-01T09:00:00"
    })
}

fn test_item(id: i64, item: &str, category: &str, checked: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "item": item,
        "category": category,
        "checked": checked,
        "created_at": "2026-05-01T09:00:00"
    })
}

fn client_for(server: &MockServer) -> TravelClient {
    TravelClient::new(&format!("{}/api", server.uri()), None).unwrap()
}

#[tokio::test]
async fn test_list_expenses_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/expenses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            test_expense(2, "KR", 3, 12000.0),
            test_expense(1, "JP", 5, 20000.0),
        ])))
        .mount(&mock_server)
        .await;

    let expenses = client_for(&mock_server).list_expenses().await.unwrap();

    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].id, 2);
    assert_eq!(expenses[1].country, "JP");
    assert_eq!(expenses[1].cost, 20000.0);
}

#[tokio::test]
async fn test_create_expense_sends_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/expenses"))
        .and(body_json(serde_json::json!({
            "country": "JP", "days": 5, "cost": 20000.0, "note": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(test_expense(1, "JP", 5, 20000.0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = client_for(&mock_server)
        .create_expense(&ExpenseRequest {
            country: "JP".to_string(),
            days: 5,
            cost: 20000.0,
            note: String::new(),
        })
        .await
        .unwrap();

    assert_eq!(created.id, 1);
}

#[tokio::test]
async fn test_update_expense_uses_put() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/expenses/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(test_expense(7, "TH", 4, 9000.0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let updated = client_for(&mock_server)
        .update_expense(
            7,
            &ExpenseRequest {
                country: "TH".to_string(),
                days: 4,
                cost: 9000.0,
                note: String::new(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.days, 4);
}

#[tokio::test]
async fn test_delete_expense_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/expenses/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "deleted"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(client_for(&mock_server).delete_expense(3).await.is_ok());
}

#[tokio::test]
async fn test_delete_missing_expense_reports_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/expenses/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).delete_expense(99).await.unwrap_err();

    match err {
        NetworkError::ServerError { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("Not Found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_expense_stats() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/expenses/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_trips": 1,
            "total_days": 5,
            "total_cost": 20000.0,
            "country_stats": {"JP": {"cost": 20000.0, "days": 5, "count": 1}}
        })))
        .mount(&mock_server)
        .await;

    let stats = client_for(&mock_server).expense_stats().await.unwrap();

    assert_eq!(stats.total_trips, 1);
    assert_eq!(stats.country_stats["JP"].count, 1);
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/expenses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).list_expenses().await.unwrap_err();
    assert!(matches!(err, NetworkError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_list_packing_with_category_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/packing"))
        .and(query_param("category", "beach"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            test_item(4, "Swimsuit", "beach", false),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let items = client_for(&mock_server)
        .list_packing(Some(PackingCategory::Beach))
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, PackingCategory::Beach);
}

#[tokio::test]
async fn test_create_packing_sends_category() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/packing"))
        .and(body_json(serde_json::json!({"item": "Gloves", "category": "cold"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(test_item(5, "Gloves", "cold", false)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let item = client_for(&mock_server)
        .create_packing(&PackingRequest {
            item: "Gloves".to_string(),
            category: PackingCategory::Cold,
            checked: None,
        })
        .await
        .unwrap();

    assert_eq!(item.id, 5);
    assert!(!item.checked);
}

#[tokio::test]
async fn test_toggle_packing_uses_patch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/packing/5/toggle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(test_item(5, "Gloves", "cold", true)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let item = client_for(&mock_server).toggle_packing(5).await.unwrap();
    assert!(item.checked);
}

#[tokio::test]
async fn test_health_check() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .mount(&mock_server)
        .await;

    assert!(client_for(&mock_server).health_check().await.unwrap());
}

#[tokio::test]
async fn test_health_check_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    assert!(!client_for(&mock_server).health_check().await.unwrap());
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/packing"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).list_packing(None).await;
    assert!(matches!(result, Err(NetworkError::ServerError { status: 500, .. })));
}

#[tokio::test]
async fn test_unreachable_backend_is_connection_failure() {
    let client = TravelClient::new("http://127.0.0.1:9/api", None).unwrap();
    let err = client.list_expenses().await.unwrap_err();
    assert!(matches!(err, NetworkError::ConnectionFailed(_)));
}
