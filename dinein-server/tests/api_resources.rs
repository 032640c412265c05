//! 资源接口集成测试
//!
//! 餐厅/餐桌/分类/菜品的 CRUD、过滤、默认值和 wire 字段形状。

mod common;

use dinein_client::{
    CategoryCreate, CategoryUpdate, MenuItemCreate, MenuItemUpdate, RestaurantUpdate, SpiceLevel,
    TableCreate, TableUpdate,
};
use serde_json::Value;

use common::{register, seed_menu, spawn_server};

#[tokio::test]
async fn table_crud_round_trip_with_defaults() {
    let server = spawn_server().await;
    let restaurant = register(&server.api, "Golden Wok", "tables@example.com").await;

    let table = server
        .api
        .create_table(&TableCreate {
            restaurant_id: Some(restaurant.id.clone()),
            number: 12,
            capacity: None,
            is_available: None,
            qr_code_url: None,
        })
        .await
        .expect("create table");

    assert_eq!(table.number, 12);
    assert_eq!(table.capacity, 4);
    assert!(table.is_available);

    let updated = server
        .api
        .update_table(
            &table.id,
            &TableUpdate {
                capacity: Some(6),
                is_available: Some(false),
                ..TableUpdate::default()
            },
        )
        .await
        .expect("update table");
    assert_eq!(updated.capacity, 6);
    assert!(!updated.is_available);
    // Untouched fields survive the merge.
    assert_eq!(updated.number, 12);

    let ack = server.api.delete_table(&table.id).await.expect("delete");
    assert!(ack.ok);

    let err = server.api.table(&table.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Table not found");
}

#[tokio::test]
async fn table_list_filters_by_restaurant_and_sorts_by_number() {
    let server = spawn_server().await;
    let first = register(&server.api, "Golden Wok", "tf1@example.com").await;
    let second = register(&server.api, "Bamboo Garden", "tf2@example.com").await;

    for number in [5, 2, 9] {
        server
            .api
            .create_table(&TableCreate {
                restaurant_id: Some(first.id.clone()),
                number,
                capacity: None,
                is_available: None,
                qr_code_url: None,
            })
            .await
            .expect("create table");
    }
    server
        .api
        .create_table(&TableCreate {
            restaurant_id: Some(second.id.clone()),
            number: 1,
            capacity: None,
            is_available: None,
            qr_code_url: None,
        })
        .await
        .expect("create table");

    let tables = server
        .api
        .tables(Some(&first.id))
        .await
        .expect("scoped list");
    let numbers: Vec<i32> = tables.iter().map(|t| t.number).collect();
    assert_eq!(numbers, vec![2, 5, 9]);

    let all = server.api.tables(None).await.expect("full list");
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn categories_sort_by_display_order() {
    let server = spawn_server().await;
    let restaurant = register(&server.api, "Golden Wok", "cats@example.com").await;

    for (name, display_order) in [("Desserts", 2), ("Mains", 1), ("Drinks", 3)] {
        server
            .api
            .create_category(&CategoryCreate {
                restaurant_id: restaurant.id.clone(),
                name: name.to_string(),
                description: None,
                display_order: Some(display_order),
            })
            .await
            .expect("create category");
    }

    let categories = server
        .api
        .categories(Some(&restaurant.id))
        .await
        .expect("list");
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Mains", "Desserts", "Drinks"]);

    let renamed = server
        .api
        .update_category(
            &categories[0].id,
            &CategoryUpdate {
                name: Some("Chef's Mains".to_string()),
                ..CategoryUpdate::default()
            },
        )
        .await
        .expect("rename");
    assert_eq!(renamed.name, "Chef's Mains");
    assert_eq!(renamed.display_order, 1);
}

#[tokio::test]
async fn menu_item_defaults_and_category_filter() {
    let server = spawn_server().await;
    let (restaurant, mains, items) = seed_menu(&server.api).await;

    assert!(items.iter().all(|i| i.is_available));
    assert!(items.iter().all(|i| i.spice_level == SpiceLevel::None));

    let drinks = server
        .api
        .create_category(&CategoryCreate {
            restaurant_id: restaurant.id.clone(),
            name: "Drinks".to_string(),
            description: None,
            display_order: Some(2),
        })
        .await
        .expect("create category");
    server
        .api
        .create_menu_item(&MenuItemCreate {
            restaurant_id: restaurant.id.clone(),
            category_id: drinks.id.clone(),
            name: "Jasmine Tea".to_string(),
            description: None,
            price: 4.5,
            image: None,
            is_available: None,
            is_vegetarian: Some(true),
            is_vegan: Some(true),
            is_gluten_free: None,
            spice_level: None,
        })
        .await
        .expect("create item");

    let in_mains = server
        .api
        .menu_items(Some(&restaurant.id), Some(&mains.id))
        .await
        .expect("category filter");
    assert_eq!(in_mains.len(), 2);

    let everything = server
        .api
        .menu_items(Some(&restaurant.id), None)
        .await
        .expect("restaurant filter");
    assert_eq!(everything.len(), 3);

    let toggled = server
        .api
        .update_menu_item(
            &in_mains[0].id,
            &MenuItemUpdate {
                is_available: Some(false),
                price: Some(13.0),
                ..MenuItemUpdate::default()
            },
        )
        .await
        .expect("update item");
    assert!(!toggled.is_available);
    assert_eq!(toggled.price, 13.0);
}

#[tokio::test]
async fn restaurant_create_endpoint_matches_register() {
    let server = spawn_server().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/restaurants", server.base_url))
        .json(&serde_json::json!({
            "name": "Bamboo Garden",
            "contactEmail": "direct@example.com",
            "password": "secret-123",
        }))
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("profile body");
    assert_eq!(body["name"], "Bamboo Garden");
    assert!(body.get("passwordHash").is_none());

    // Same email through /auth/register collides.
    let response = http
        .post(format!("{}/auth/register", server.base_url))
        .json(&serde_json::json!({
            "name": "Copy Cat",
            "contactEmail": "direct@example.com",
            "password": "other",
        }))
        .send()
        .await
        .expect("send");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn restaurant_profile_update_and_delete() {
    let server = spawn_server().await;
    let restaurant = register(&server.api, "Golden Wok", "profile@example.com").await;

    let listed = server.api.restaurants().await.expect("list");
    assert!(listed.iter().any(|r| r.id == restaurant.id));

    let updated = server
        .api
        .update_restaurant(
            &restaurant.id,
            &RestaurantUpdate {
                name: Some("Golden Wok House".to_string()),
                is_open: Some(false),
                ..RestaurantUpdate::default()
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.name, "Golden Wok House");
    assert!(!updated.is_open);
    assert_eq!(updated.contact_email, "profile@example.com");

    let ack = server
        .api
        .delete_restaurant(&restaurant.id)
        .await
        .expect("delete");
    assert!(ack.ok);

    let err = server.api.restaurant(&restaurant.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Restaurant not found");
}

#[tokio::test]
async fn wire_json_is_camel_case() {
    let server = spawn_server().await;
    let restaurant = register(&server.api, "Golden Wok", "wire@example.com").await;
    let table = server
        .api
        .create_table(&TableCreate {
            restaurant_id: Some(restaurant.id.clone()),
            number: 8,
            capacity: None,
            is_available: None,
            qr_code_url: Some("https://img.example/qr8.png".to_string()),
        })
        .await
        .expect("create table");

    let http = reqwest::Client::new();
    let body: Value = http
        .get(format!("{}/tables/{}", server.base_url, table.id))
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("json");

    for key in ["restaurantId", "isAvailable", "qrCodeUrl", "createdAt", "updatedAt"] {
        assert!(body.get(key).is_some(), "missing {key}");
    }
    for key in ["restaurant_id", "is_available", "created_at"] {
        assert!(body.get(key).is_none(), "unexpected {key}");
    }
}

#[tokio::test]
async fn health_reports_liveness_and_db_state() {
    let server = spawn_server().await;

    let health = server.api.health().await.expect("health");
    assert!(health.ok);
    assert_eq!(health.db, "connected");
    assert!(health.uptime >= 0.0);
}

#[tokio::test]
async fn upload_without_a_file_field_is_rejected() {
    let server = spawn_server().await;
    let http = reqwest::Client::new();

    let form = reqwest::multipart::Form::new().text("caption", "not a file");
    let response = http
        .post(format!("{}/upload/image", server.base_url))
        .multipart(form)
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn each_resource_names_itself_in_id_errors() {
    let server = spawn_server().await;
    let http = reqwest::Client::new();

    for (path, message) in [
        ("restaurants/undefined", "Invalid restaurant ID"),
        ("tables/undefined", "Invalid table ID"),
        ("categories/undefined", "Invalid category ID"),
        ("menu-items/undefined", "Invalid menu item ID"),
    ] {
        let response = http
            .get(format!("{}/{path}", server.base_url))
            .send()
            .await
            .expect("send");
        assert_eq!(response.status(), 400, "{path}");
        let body: Value = response.json().await.expect("error body");
        assert_eq!(body["error"], message, "{path}");
    }
}
