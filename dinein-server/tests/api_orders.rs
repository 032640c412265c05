//! 订单接口集成测试
//!
//! 走真实 HTTP: 下单、逐项校验报错、状态流转、过滤和删除。

mod common;

use dinein_client::{OrderCreate, OrderItem, OrderStatus, OrderUpdate};
use serde_json::{Value, json};

use common::{register, spawn_server};

fn order_payload(restaurant_id: &str, table_number: i32) -> OrderCreate {
    OrderCreate {
        restaurant_id: restaurant_id.to_string(),
        table_number,
        items: vec![
            OrderItem {
                menu_item_id: "m1".to_string(),
                name: "Jasmine Tea".to_string(),
                quantity: 2,
                price: 4.5,
                note: None,
            },
            OrderItem {
                menu_item_id: "m2".to_string(),
                name: "Fried Rice".to_string(),
                quantity: 1,
                price: 12.5,
                note: Some("less oil".to_string()),
            },
        ],
        total_amount: 21.5,
        notes: Some("table by the window".to_string()),
    }
}

#[tokio::test]
async fn checkout_returns_the_persisted_order() {
    let server = spawn_server().await;
    let restaurant = register(&server.api, "Golden Wok", "orders@example.com").await;

    let order = server
        .api
        .create_order(&order_payload(&restaurant.id, 4))
        .await
        .expect("checkout");

    assert!(!order.id.is_empty());
    assert_eq!(order.restaurant_id, restaurant.id);
    assert_eq!(order.table_number, 4);
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[1].note.as_deref(), Some("less oil"));
    // Stored verbatim, never recomputed.
    assert_eq!(order.total_amount, 21.5);
    assert_eq!(order.rejection_reason, None);

    let fetched = server.api.order(&order.id).await.expect("fetch back");
    assert_eq!(fetched.id, order.id);
    assert_eq!(fetched.status, OrderStatus::Placed);
}

#[tokio::test]
async fn broken_checkout_reports_every_field_at_once() {
    let server = spawn_server().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/orders", server.base_url))
        .json(&json!({
            "restaurantId": 42,
            "tableNumber": "four",
            "items": "not-a-list",
            "totalAmount": -3,
        }))
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["error"], "Order validation failed");

    let details = body["details"].as_array().expect("details array");
    assert_eq!(details.len(), 4);
    assert_eq!(details[0], "restaurantId must be a non-empty string, got: 42");
    assert_eq!(details[1], "tableNumber must be a number, got: \"four\"");
    assert_eq!(details[2], "items must be an array, got: string");
    assert_eq!(details[3], "totalAmount must be a non-negative number, got: -3");

    assert_eq!(body["received"]["restaurantId"], json!(42));
    assert_eq!(body["received"]["tableNumber"], json!("four"));
    assert_eq!(body["received"]["itemsLength"], json!("string"));
    assert_eq!(body["received"]["totalAmount"], json!(-3));
}

#[tokio::test]
async fn empty_items_is_a_single_error() {
    let server = spawn_server().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/orders", server.base_url))
        .json(&json!({
            "restaurantId": "r1",
            "tableNumber": 1,
            "items": [],
            "totalAmount": 0,
        }))
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["details"], json!(["items array is empty"]));
    assert_eq!(body["received"]["itemsLength"], json!(0));
}

#[tokio::test]
async fn status_updates_are_permissive_and_idempotent() {
    let server = spawn_server().await;
    let restaurant = register(&server.api, "Golden Wok", "status@example.com").await;
    let order = server
        .api
        .create_order(&order_payload(&restaurant.id, 2))
        .await
        .expect("checkout");

    // Any defined status is accepted from any prior state.
    let update = OrderUpdate {
        status: Some(OrderStatus::Served),
        ..OrderUpdate::default()
    };
    let served = server
        .api
        .update_order(&order.id, &update)
        .await
        .expect("jump straight to served");
    assert_eq!(served.status, OrderStatus::Served);
    assert!(served.updated_at > served.created_at);

    // Same update again is fine.
    let again = server
        .api
        .update_order(&order.id, &update)
        .await
        .expect("repeat the update");
    assert_eq!(again.status, OrderStatus::Served);
}

#[tokio::test]
async fn rejection_records_the_reason() {
    let server = spawn_server().await;
    let restaurant = register(&server.api, "Golden Wok", "reject@example.com").await;
    let order = server
        .api
        .create_order(&order_payload(&restaurant.id, 7))
        .await
        .expect("checkout");

    let cancelled = server
        .api
        .update_order(
            &order.id,
            &OrderUpdate {
                status: Some(OrderStatus::Cancelled),
                rejection_reason: Some("Kitchen closed".to_string()),
                notes: None,
            },
        )
        .await
        .expect("reject");

    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(cancelled.rejection_reason.as_deref(), Some("Kitchen closed"));
}

#[tokio::test]
async fn list_is_newest_first_and_scoped_by_filters() {
    let server = spawn_server().await;
    let first = register(&server.api, "Golden Wok", "list1@example.com").await;
    let second = register(&server.api, "Bamboo Garden", "list2@example.com").await;

    let early = server
        .api
        .create_order(&order_payload(&first.id, 1))
        .await
        .expect("first order");
    let late = server
        .api
        .create_order(&order_payload(&first.id, 2))
        .await
        .expect("second order");
    server
        .api
        .create_order(&order_payload(&second.id, 9))
        .await
        .expect("other restaurant order");

    let orders = server
        .api
        .orders(Some(&first.id), None)
        .await
        .expect("scoped list");
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, late.id);
    assert_eq!(orders[1].id, early.id);

    // Status filter follows the order along its flow.
    server
        .api
        .update_order(
            &late.id,
            &OrderUpdate {
                status: Some(OrderStatus::Confirmed),
                ..OrderUpdate::default()
            },
        )
        .await
        .expect("confirm");

    let placed = server
        .api
        .orders(Some(&first.id), Some(OrderStatus::Placed))
        .await
        .expect("placed only");
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].id, early.id);
}

#[tokio::test]
async fn status_filter_accepts_the_legacy_alias() {
    let server = spawn_server().await;
    let restaurant = register(&server.api, "Golden Wok", "alias@example.com").await;
    server
        .api
        .create_order(&order_payload(&restaurant.id, 3))
        .await
        .expect("checkout");

    let http = reqwest::Client::new();
    let response = http
        .get(format!(
            "{}/orders?restaurantId={}&status=new",
            server.base_url, restaurant.id
        ))
        .send()
        .await
        .expect("send");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("list body");
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["status"], "placed");

    let response = http
        .get(format!("{}/orders?status=finished", server.base_url))
        .send()
        .await
        .expect("send");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["error"], "Invalid status: finished");
}

#[tokio::test]
async fn junk_ids_are_rejected_before_lookup() {
    let server = spawn_server().await;
    let http = reqwest::Client::new();

    for path in ["orders/undefined", "orders/%20"] {
        let response = http
            .get(format!("{}/{path}", server.base_url))
            .send()
            .await
            .expect("send");
        assert_eq!(response.status(), 400, "{path}");
        let body: Value = response.json().await.expect("error body");
        assert_eq!(body["error"], "Invalid order ID", "{path}");
    }
}

#[tokio::test]
async fn missing_order_is_a_404() {
    let server = spawn_server().await;

    let err = server.api.order("doesnotexist").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Order not found");
}

#[tokio::test]
async fn delete_acks_then_404s() {
    let server = spawn_server().await;
    let restaurant = register(&server.api, "Golden Wok", "delete@example.com").await;
    let order = server
        .api
        .create_order(&order_payload(&restaurant.id, 5))
        .await
        .expect("checkout");

    let ack = server.api.delete_order(&order.id).await.expect("delete");
    assert!(ack.ok);

    let err = server.api.order(&order.id).await.unwrap_err();
    assert!(err.is_not_found());

    let err = server.api.delete_order(&order.id).await.unwrap_err();
    assert!(err.is_not_found());
}
