//! Forms are validated before anything is sent, and the composed payloads
//! carry what the backend expects.

#![allow(clippy::unwrap_used)]

use serde_json::{Value, json};
use stockdesk_client::ApiError;
use stockdesk_core::validation::{
    ExpenseForm, PreOrderForm, ProductForm, SaleForm, UserForm,
};
use stockdesk_core::{CustomerId, Money, PreOrderId, PreOrderStatus, ProductId};
use stockdesk_integration_tests::{
    TestBackend, api_path, customer_json, ok, product_json, sale_json,
};
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::Mock;

fn pre_order_json(id: &str, total: u32, paid: u32, due: u32, status: &str) -> Value {
    json!({
        "_id": id,
        "product": { "_id": "p1", "name": "Standing Desk", "price": 500, "category": "Furniture" },
        "customer": { "name": "Nadia Karim", "phone": "01711000000", "address": "12 Lake Road" },
        "discount": 10,
        "totalAmount": total,
        "paidAmount": paid,
        "dueAmount": due,
        "status": status,
    })
}

#[tokio::test]
async fn test_invalid_product_form_sends_nothing() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("products")))
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&backend.server)
        .await;

    let form = ProductForm {
        name: "  ".into(),
        category: "Lighting".into(),
        price: "0".into(),
        cost_price: "12".into(),
        quantity: "3".into(),
    };
    let err = backend.client.submit_product(form).await.unwrap_err();
    let ApiError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(errors.get("name"), Some("Name is required"));
    assert_eq!(errors.get("price"), Some("Price must be greater than 0"));
    assert!(!errors.contains("quantity"));
}

#[tokio::test]
async fn test_sale_payload_and_stock_refresh() {
    let backend = TestBackend::start().await;
    let lamp = product_json("p1", "Desk Lamp", "Lighting", 45, 12);
    Mock::given(method("GET"))
        .and(path(api_path("products")))
        .respond_with(ok(json!([lamp.clone()])))
        .expect(2)
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("sales-items")))
        .and(body_partial_json(json!({
            "productID": "p1",
            "productName": "Desk Lamp",
            "productPrice": 45,
            "discount": 10,
            "category": "Lighting",
            "salesManager": "Rahim",
        })))
        .respond_with(ok(sale_json("s1", &lamp, 10, "2024-05-03T10:15:00Z")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let product = backend
        .client
        .find_product(&ProductId::new("p1"))
        .await
        .unwrap();
    let sale = backend
        .client
        .submit_sale(SaleForm {
            product: Some(product),
            discount: "10".into(),
            sales_manager: "Rahim".into(),
        })
        .await
        .unwrap();
    assert_eq!(sale.final_price(), Money::from_cents(4050));

    // Stock changed on the backend, so the list is fetched again.
    backend.client.list_products().await.unwrap();
}

#[tokio::test]
async fn test_out_of_stock_sale_is_refused() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("sales-items")))
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&backend.server)
        .await;

    let chair: stockdesk_core::models::Product =
        serde_json::from_value(product_json("p2", "Office Chair", "Furniture", 180, 0)).unwrap();
    let err = backend
        .client
        .submit_sale(SaleForm {
            product: Some(chair),
            discount: String::new(),
            sales_manager: "Rahim".into(),
        })
        .await
        .unwrap_err();
    let ApiError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(errors.get("product"), Some("Office Chair is out of stock"));
}

#[tokio::test]
async fn test_pre_order_takes_half_up_front() {
    let backend = TestBackend::start().await;
    backend
        .serve(
            "products",
            json!([product_json("p1", "Standing Desk", "Furniture", 500, 0)]),
        )
        .await;
    backend
        .serve(
            "customers/c1",
            customer_json("c1", "Nadia Karim", "01711000000"),
        )
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("pre-order-sale")))
        .and(body_partial_json(json!({
            "product": { "_id": "p1", "name": "Standing Desk", "price": 500 },
            "customer": { "name": "Nadia Karim", "phone": "01711000000" },
            "discount": 10,
            "totalAmount": 450,
            "paidAmount": 225,
            "dueAmount": 225,
            "status": "pending",
        })))
        .respond_with(ok(pre_order_json("po1", 450, 225, 225, "pending")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let client = &backend.client;
    let product_id = ProductId::new("p1");
    let customer_id = CustomerId::new("c1");
    let (product, customer) = tokio::try_join!(
        client.find_product(&product_id),
        client.get_customer(&customer_id),
    )
    .unwrap();
    let order = client
        .submit_pre_order(PreOrderForm {
            product: Some(product),
            customer: Some(customer),
            discount: "10".into(),
        })
        .await
        .unwrap();
    assert_eq!(order.paid_amount + order.due_amount, order.total_amount);
    assert_eq!(order.status, PreOrderStatus::Pending);
}

#[tokio::test]
async fn test_settle_collects_balance() {
    let backend = TestBackend::start().await;
    backend
        .serve(
            "pre-order-sale",
            json!([
                pre_order_json("po1", 450, 225, 225, "pending"),
                pre_order_json("po2", 450, 450, 0, "delivered"),
            ]),
        )
        .await;
    Mock::given(method("PUT"))
        .and(path(api_path("pre-order-sale/po1")))
        .and(body_json(json!({
            "paidAmount": 450,
            "dueAmount": 0,
            "status": "delivered",
        })))
        .respond_with(ok(pre_order_json("po1", 450, 450, 0, "delivered")))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("PUT"))
        .and(path(api_path("pre-order-sale/po2")))
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&backend.server)
        .await;

    let settled = backend
        .client
        .settle_pre_order(&PreOrderId::new("po1"))
        .await
        .unwrap();
    assert!(settled.is_settled());

    let err = backend
        .client
        .settle_pre_order(&PreOrderId::new("po2"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));
}

#[tokio::test]
async fn test_expense_category_must_exist() {
    let backend = TestBackend::start().await;
    backend
        .serve(
            "expense-category",
            json!([{ "_id": "k1", "name": "Rent", "description": "" }]),
        )
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("expenses")))
        .and(body_partial_json(json!({
            "name": "May rent",
            "category": "Rent",
            "cost": 1200,
            "paymentMethod": "bank_transfer",
            "status": "pending",
        })))
        .respond_with(ok(json!({
            "_id": "e1",
            "name": "May rent",
            "category": "Rent",
            "cost": 1200,
            "paymentMethod": "bank_transfer",
            "status": "pending",
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let form = |category: &str| ExpenseForm {
        name: "May rent".into(),
        category: category.into(),
        cost: "1200".into(),
        payment_method: "bank_transfer".into(),
        description: String::new(),
        status: String::new(),
    };

    let err = backend.client.submit_expense(form("Travel")).await.unwrap_err();
    let ApiError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert!(errors.contains("category"));

    let expense = backend.client.submit_expense(form("rent")).await.unwrap();
    assert_eq!(expense.category, "Rent");
}

#[tokio::test]
async fn test_user_invite_validates_email() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("users")))
        .and(body_json(json!({
            "fullName": "Rahim Uddin",
            "email": "rahim@shop.test",
            "role": "sales_manager",
        })))
        .respond_with(ok(json!({
            "_id": "u1",
            "fullName": "Rahim Uddin",
            "email": "rahim@shop.test",
            "role": "sales_manager",
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let err = backend
        .client
        .submit_user(UserForm {
            full_name: "Rahim Uddin".into(),
            email: "rahim@".into(),
            role: "sales_manager".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(ref e) if e.contains("email")));

    let user = backend
        .client
        .submit_user(UserForm {
            full_name: "Rahim Uddin".into(),
            email: " Rahim@Shop.test ".into(),
            role: "sales_manager".into(),
        })
        .await
        .unwrap();
    assert_eq!(user.id.as_str(), "u1");
}
