//! Reading single records and editing existing ones.

#![allow(clippy::unwrap_used)]

use serde_json::{Value, json};
use stockdesk_client::ApiError;
use stockdesk_core::models::{NewCustomer, NewExpense, NewProduct};
use stockdesk_core::{
    CustomerId, ExpenseId, ExpenseStatus, Money, PaymentMethod, PreOrderId, PreOrderStatus,
    ProductId,
};
use stockdesk_integration_tests::{
    TestBackend, api_path, customer_json, expense_json, ok, product_json,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn pre_order_json(id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "product": { "_id": "p1", "name": "Standing Desk", "price": 500, "category": "Furniture" },
        "customer": { "name": "Nadia Karim", "phone": "01711000000", "address": "12 Lake Road" },
        "discount": 10,
        "totalAmount": 450,
        "paidAmount": 225,
        "dueAmount": 225,
        "status": status,
    })
}

#[tokio::test]
async fn test_cancel_pending_pre_order() {
    let backend = TestBackend::start().await;
    backend
        .serve("pre-order-sale", json!([pre_order_json("po1", "pending")]))
        .await;
    Mock::given(method("PUT"))
        .and(path(api_path("pre-order-sale/po1")))
        .and(body_json(json!({ "status": "cancelled" })))
        .respond_with(ok(pre_order_json("po1", "cancelled")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let cancelled = backend
        .client
        .cancel_pre_order(&PreOrderId::new("po1"))
        .await
        .unwrap();
    assert_eq!(cancelled.status, PreOrderStatus::Cancelled);
}

#[tokio::test]
async fn test_cancel_refuses_closed_pre_orders() {
    let backend = TestBackend::start().await;
    backend
        .serve(
            "pre-order-sale",
            json!([
                pre_order_json("po1", "delivered"),
                pre_order_json("po2", "cancelled"),
                pre_order_json("po3", "on_hold"),
            ]),
        )
        .await;
    Mock::given(method("PUT"))
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&backend.server)
        .await;

    for (id, status) in [("po1", "delivered"), ("po2", "cancelled"), ("po3", "other")] {
        let err = backend
            .client
            .cancel_pre_order(&PreOrderId::new(id))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ApiError::Rejected(ref m) if m == &format!("pre-order {id} is {status}")),
            "{id}: {err}"
        );
    }

    let err = backend
        .client
        .cancel_pre_order(&PreOrderId::new("po9"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_settle_refuses_unknown_status() {
    let backend = TestBackend::start().await;
    backend
        .serve("pre-order-sale", json!([pre_order_json("po3", "on_hold")]))
        .await;
    Mock::given(method("PUT"))
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&backend.server)
        .await;

    let err = backend
        .client
        .settle_pre_order(&PreOrderId::new("po3"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));
}

#[tokio::test]
async fn test_update_product_replaces_fields_and_refreshes_list() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("products")))
        .respond_with(ok(json!([product_json("p1", "Desk Lamp", "Lighting", 45, 12)])))
        .expect(2)
        .mount(&backend.server)
        .await;
    Mock::given(method("PUT"))
        .and(path(api_path("products/p1")))
        .and(body_json(json!({
            "name": "Desk Lamp",
            "category": "Lighting",
            "price": 49.5,
            "costPrice": 22,
            "quantity": 10,
        })))
        .respond_with(ok(product_json("p1", "Desk Lamp", "Lighting", 49, 10)))
        .expect(1)
        .mount(&backend.server)
        .await;

    let client = &backend.client;
    client.list_products().await.unwrap();
    let updated = client
        .update_product(
            &ProductId::new("p1"),
            &NewProduct {
                name: "Desk Lamp".into(),
                category: "Lighting".into(),
                price: Money::from_cents(4950),
                cost_price: Money::from(22),
                quantity: 10,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.quantity, 10);
    // The cached list was dropped, so this fetches again
    client.list_products().await.unwrap();
}

#[tokio::test]
async fn test_update_customer() {
    let backend = TestBackend::start().await;
    Mock::given(method("PUT"))
        .and(path(api_path("customers/c1")))
        .and(body_json(json!({
            "name": "Nadia Karim",
            "phone": "01811000000",
            "address": "4 Hill Street",
        })))
        .respond_with(ok(customer_json("c1", "Nadia Karim", "01811000000")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let customer = backend
        .client
        .update_customer(
            &CustomerId::new("c1"),
            &NewCustomer {
                name: "Nadia Karim".into(),
                phone: "01811000000".into(),
                address: "4 Hill Street".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(customer.phone, "01811000000");
}

#[tokio::test]
async fn test_get_and_update_expense() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("expenses/e1")))
        .respond_with(ok(expense_json("e1", "Rent", 1000, "pending", "2024-05-01T08:00:00Z")))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("expenses/e9")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&backend.server)
        .await;
    Mock::given(method("PUT"))
        .and(path(api_path("expenses/e1")))
        .and(body_json(json!({
            "name": "Rent bill",
            "category": "Rent",
            "cost": 1000,
            "paymentMethod": "bank_transfer",
            "description": "May",
            "status": "paid",
        })))
        .respond_with(ok(expense_json("e1", "Rent", 1000, "paid", "2024-05-01T08:00:00Z")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let client = &backend.client;
    let id = ExpenseId::new("e1");
    let expense = client.get_expense(&id).await.unwrap();
    assert_eq!(expense.status, ExpenseStatus::Pending);
    assert_eq!(expense.cost, Money::from(1000));

    assert!(matches!(
        client.get_expense(&ExpenseId::new("e9")).await.unwrap_err(),
        ApiError::NotFound(ref p) if p == "expenses/e9"
    ));

    let paid = client
        .update_expense(
            &id,
            &NewExpense {
                name: expense.name,
                category: expense.category,
                cost: expense.cost,
                payment_method: PaymentMethod::BankTransfer,
                description: "May".into(),
                status: ExpenseStatus::Paid,
            },
        )
        .await
        .unwrap();
    assert_eq!(paid.status, ExpenseStatus::Paid);
}
