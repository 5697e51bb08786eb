//! Envelope unwrapping and HTTP error mapping.

#![allow(clippy::unwrap_used)]

use secrecy::SecretString;
use serde_json::json;
use stockdesk_client::ApiError;
use stockdesk_core::{ExpenseId, ProductId};
use stockdesk_integration_tests::{TestBackend, api_path, ok, product_json, rejected};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_list_unwraps_data() {
    let backend = TestBackend::start().await;
    backend
        .serve(
            "products",
            json!([
                product_json("p1", "Desk Lamp", "Lighting", 45, 12),
                product_json("p2", "Office Chair", "Furniture", 180, 0),
            ]),
        )
        .await;

    let products = backend.client.list_products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::new("p1"));
    assert_eq!(products[1].name, "Office Chair");
    assert!(products[1].is_out_of_stock());
}

#[tokio::test]
async fn test_success_false_is_rejected() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("expenses")))
        .respond_with(rejected("Database unavailable"))
        .mount(&backend.server)
        .await;

    let err = backend.client.list_expenses().await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected(ref m) if m == "Database unavailable"));
}

#[tokio::test]
async fn test_success_without_data() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("users")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&backend.server)
        .await;

    let err = backend.client.list_users().await.unwrap_err();
    assert!(matches!(err, ApiError::MissingData));
}

#[tokio::test]
async fn test_status_codes_map_to_errors() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("products/p9")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("customers")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("sales-items")))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("pre-order-sale")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&backend.server)
        .await;

    let client = &backend.client;
    assert!(matches!(
        client.get_product(&ProductId::new("p9")).await.unwrap_err(),
        ApiError::NotFound(ref p) if p == "products/p9"
    ));
    assert!(matches!(
        client.list_customers().await.unwrap_err(),
        ApiError::Unauthorized
    ));
    assert!(matches!(
        client.list_sales_items().await.unwrap_err(),
        ApiError::RateLimited(7)
    ));
    let err = client.list_pre_orders().await.unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 502, .. }));
    assert_eq!(err.user_message(), "The server had a problem");
}

#[tokio::test]
async fn test_client_error_envelope_message_is_surfaced() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("expense-category")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Category already exists",
        })))
        .mount(&backend.server)
        .await;

    let payload = stockdesk_core::models::NewExpenseCategory {
        name: "Rent".into(),
        description: String::new(),
    };
    let err = backend
        .client
        .create_expense_category(&payload)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected(ref m) if m == "Category already exists"));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("products")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>"))
        .mount(&backend.server)
        .await;

    let err = backend.client.list_products().await.unwrap_err();
    let ApiError::Parse(message) = err else {
        panic!("expected parse error, got {err:?}");
    };
    assert!(message.contains("<!doctype html>"));
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let backend = TestBackend::start_with(|config| {
        config.api_token = Some(SecretString::from("tok_9f8e7d6c5b4a"));
    })
    .await;
    Mock::given(method("GET"))
        .and(path(api_path("users")))
        .and(header("authorization", "Bearer tok_9f8e7d6c5b4a"))
        .respond_with(ok(json!([])))
        .expect(1)
        .mount(&backend.server)
        .await;

    assert!(backend.client.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_accepts_ack_and_no_content() {
    let backend = TestBackend::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("expenses/e1")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "message": "Expense deleted" })),
        )
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("expenses/e2")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("expenses/e3")))
        .respond_with(rejected("Expense is locked"))
        .mount(&backend.server)
        .await;

    let client = &backend.client;
    client.delete_expense(&ExpenseId::new("e1")).await.unwrap();
    client.delete_expense(&ExpenseId::new("e2")).await.unwrap();
    assert!(matches!(
        client.delete_expense(&ExpenseId::new("e3")).await.unwrap_err(),
        ApiError::Rejected(_)
    ));
}
