//! Test server harness
//!
//! 起一个完整 HTTP 栈: kv-mem 数据库, 随机端口, 附带一个指向它的
//! 类型化客户端。每个测试各起各的, 互不串库。

#![allow(dead_code)]

use dinein_client::{
    Category, CategoryCreate, ClientConfig, HttpClient, MenuItem, MenuItemCreate, RegisterRequest,
    Restaurant,
};
use dinein_server::routes::build_app;
use dinein_server::{Config, ServerState};

/// A running server plus a client wired to it
pub struct TestServer {
    pub base_url: String,
    pub api: HttpClient,
}

pub async fn spawn_server() -> TestServer {
    let config = Config::with_overrides(":memory:", 0);
    let state = ServerState::initialize(config)
        .await
        .expect("state initializes on kv-mem");
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let base_url = format!("http://{addr}");
    let api = HttpClient::new(&ClientConfig::new(&base_url));
    TestServer { base_url, api }
}

pub async fn register(api: &HttpClient, name: &str, email: &str) -> Restaurant {
    api.register(&RegisterRequest {
        name: name.to_string(),
        contact_email: email.to_string(),
        password: "secret-123".to_string(),
        contact_phone: None,
        address: None,
        description: None,
        image: None,
    })
    .await
    .expect("register restaurant")
}

/// One restaurant with a small menu: a "Mains" category holding two items
pub async fn seed_menu(api: &HttpClient) -> (Restaurant, Category, Vec<MenuItem>) {
    let restaurant = register(api, "Golden Wok", "menu@example.com").await;

    let category = api
        .create_category(&CategoryCreate {
            restaurant_id: restaurant.id.clone(),
            name: "Mains".to_string(),
            description: None,
            display_order: Some(1),
        })
        .await
        .expect("create category");

    let mut items = Vec::new();
    for (name, price) in [("Fried Rice", 12.5), ("Sweet and Sour Pork", 18.0)] {
        let item = api
            .create_menu_item(&MenuItemCreate {
                restaurant_id: restaurant.id.clone(),
                category_id: category.id.clone(),
                name: name.to_string(),
                description: None,
                price,
                image: None,
                is_available: None,
                is_vegetarian: None,
                is_vegan: None,
                is_gluten_free: None,
                spice_level: None,
            })
            .await
            .expect("create menu item");
        items.push(item);
    }

    (restaurant, category, items)
}
