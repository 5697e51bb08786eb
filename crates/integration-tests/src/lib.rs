//! Integration tests for Stockdesk.
//!
//! Each test starts a [`wiremock::MockServer`] that plays the inventory
//! backend, points an [`ApiClient`] at it and checks what goes over the wire.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stockdesk-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `envelope` - Response unwrapping and error mapping
//! - `caching` - Reference list caching and invalidation
//! - `submissions` - Form validation and composed payloads
//! - `dashboard` - Concurrent fetch and aggregation
//! - `edits` - Single-record reads, updates and cancellation guards
//! - `lenient` - Lists with malformed rows

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use serde_json::{Value, json};
use stockdesk_client::{ApiClient, ClientConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Base path the mock backend serves under.
pub const API_PREFIX: &str = "/api/v1";

/// A mock backend and a client pointed at it.
pub struct TestBackend {
    pub server: MockServer,
    pub client: ApiClient,
}

impl TestBackend {
    /// Start a backend with caching enabled.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    /// Start a backend, letting the caller adjust the client config.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    pub async fn start_with(configure: impl FnOnce(&mut ClientConfig)) -> Self {
        let server = MockServer::start().await;
        let mut config = ClientConfig::new(&format!("{}{API_PREFIX}", server.uri()))
            .unwrap_or_else(|e| panic!("mock server uri rejected: {e}"));
        config.timeout = Duration::from_secs(5);
        configure(&mut config);
        let client = ApiClient::new(&config).unwrap_or_else(|e| panic!("client failed: {e}"));
        Self { server, client }
    }

    /// Mount a `GET` that answers with a success envelope around `data`.
    pub async fn serve(&self, endpoint: &str, data: Value) {
        Mock::given(method("GET"))
            .and(path(api_path(endpoint)))
            .respond_with(ok(data))
            .mount(&self.server)
            .await;
    }
}

/// Full request path for an endpoint.
#[must_use]
pub fn api_path(endpoint: &str) -> String {
    format!("{API_PREFIX}/{}", endpoint.trim_start_matches('/'))
}

/// `200 {"success": true, "data": ...}`
#[must_use]
pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data }))
}

/// `200 {"success": false, "message": ...}`
#[must_use]
pub fn rejected(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": false, "message": message }))
}

// =============================================================================
// Fixtures
// =============================================================================

#[must_use]
pub fn product_json(id: &str, name: &str, category: &str, price: u32, quantity: u32) -> Value {
    json!({
        "_id": id,
        "name": name,
        "category": category,
        "price": price,
        "costPrice": price / 2,
        "quantity": quantity,
    })
}

#[must_use]
pub fn customer_json(id: &str, name: &str, phone: &str) -> Value {
    json!({ "_id": id, "name": name, "phone": phone, "address": "12 Lake Road" })
}

#[must_use]
pub fn sale_json(id: &str, product: &Value, discount: u32, created_at: &str) -> Value {
    json!({
        "_id": id,
        "productID": product["_id"],
        "productName": product["name"],
        "productPrice": product["price"],
        "discount": discount,
        "category": product["category"],
        "salesManager": "Rahim",
        "createdAt": created_at,
    })
}

#[must_use]
pub fn expense_json(id: &str, category: &str, cost: u32, status: &str, created_at: &str) -> Value {
    json!({
        "_id": id,
        "name": format!("{category} bill"),
        "category": category,
        "cost": cost,
        "paymentMethod": "cash",
        "status": status,
        "createdAt": created_at,
    })
}
