//! Typed API surface
//!
//! One method per endpoint, thin wrappers over [`HttpClient`]. Lookups by id
//! refuse locally-invalid ids ("", "undefined") without touching the network.

use shared::client::{DeleteAck, Health, LoginRequest, RegisterRequest, UploadResponse};
use shared::models::{
    Category, CategoryCreate, CategoryUpdate, MenuItem, MenuItemCreate, MenuItemUpdate, Order,
    OrderCreate, OrderStatus, OrderUpdate, Restaurant, RestaurantUpdate, Table, TableCreate,
    TableUpdate,
};

use crate::{ClientError, ClientResult, HttpClient};

/// Guard against the two id shapes a stale UI can produce; the server would
/// reject them too, this just skips the round trip.
fn ensure_id(id: &str, resource: &str) -> ClientResult<()> {
    if id.trim().is_empty() || id == "undefined" {
        return Err(ClientError::State(format!("invalid {resource} id: {id:?}")));
    }
    Ok(())
}

impl HttpClient {
    // ========== Health ==========

    pub async fn health(&self) -> ClientResult<Health> {
        self.get("health").await
    }

    // ========== Auth ==========

    /// Register a restaurant account
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<Restaurant> {
        self.post("auth/register", request).await
    }

    /// Login with restaurant credentials; the reply is the restaurant
    /// profile, there is no token.
    pub async fn login(&self, contact_email: &str, password: &str) -> ClientResult<Restaurant> {
        let request = LoginRequest {
            contact_email: contact_email.to_string(),
            password: password.to_string(),
        };
        self.post("auth/login", &request).await
    }

    // ========== Restaurants ==========

    pub async fn restaurants(&self) -> ClientResult<Vec<Restaurant>> {
        self.get("restaurants").await
    }

    pub async fn restaurant(&self, id: &str) -> ClientResult<Restaurant> {
        ensure_id(id, "restaurant")?;
        self.get(&format!("restaurants/{id}")).await
    }

    pub async fn update_restaurant(
        &self,
        id: &str,
        data: &RestaurantUpdate,
    ) -> ClientResult<Restaurant> {
        ensure_id(id, "restaurant")?;
        self.put(&format!("restaurants/{id}"), data).await
    }

    pub async fn delete_restaurant(&self, id: &str) -> ClientResult<DeleteAck> {
        ensure_id(id, "restaurant")?;
        self.delete(&format!("restaurants/{id}")).await
    }

    // ========== Tables ==========

    pub async fn tables(&self, restaurant_id: Option<&str>) -> ClientResult<Vec<Table>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(rid) = restaurant_id {
            params.push(("restaurantId", rid.to_string()));
        }
        self.get_query("tables", &params).await
    }

    pub async fn table(&self, id: &str) -> ClientResult<Table> {
        ensure_id(id, "table")?;
        self.get(&format!("tables/{id}")).await
    }

    pub async fn create_table(&self, data: &TableCreate) -> ClientResult<Table> {
        self.post("tables", data).await
    }

    pub async fn update_table(&self, id: &str, data: &TableUpdate) -> ClientResult<Table> {
        ensure_id(id, "table")?;
        self.put(&format!("tables/{id}"), data).await
    }

    pub async fn delete_table(&self, id: &str) -> ClientResult<DeleteAck> {
        ensure_id(id, "table")?;
        self.delete(&format!("tables/{id}")).await
    }

    // ========== Categories ==========

    pub async fn categories(&self, restaurant_id: Option<&str>) -> ClientResult<Vec<Category>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(rid) = restaurant_id {
            params.push(("restaurantId", rid.to_string()));
        }
        self.get_query("categories", &params).await
    }

    pub async fn category(&self, id: &str) -> ClientResult<Category> {
        ensure_id(id, "category")?;
        self.get(&format!("categories/{id}")).await
    }

    pub async fn create_category(&self, data: &CategoryCreate) -> ClientResult<Category> {
        self.post("categories", data).await
    }

    pub async fn update_category(&self, id: &str, data: &CategoryUpdate) -> ClientResult<Category> {
        ensure_id(id, "category")?;
        self.put(&format!("categories/{id}"), data).await
    }

    pub async fn delete_category(&self, id: &str) -> ClientResult<DeleteAck> {
        ensure_id(id, "category")?;
        self.delete(&format!("categories/{id}")).await
    }

    // ========== Menu Items ==========

    pub async fn menu_items(
        &self,
        restaurant_id: Option<&str>,
        category_id: Option<&str>,
    ) -> ClientResult<Vec<MenuItem>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(rid) = restaurant_id {
            params.push(("restaurantId", rid.to_string()));
        }
        if let Some(cid) = category_id {
            params.push(("categoryId", cid.to_string()));
        }
        self.get_query("menu-items", &params).await
    }

    pub async fn menu_item(&self, id: &str) -> ClientResult<MenuItem> {
        ensure_id(id, "menu item")?;
        self.get(&format!("menu-items/{id}")).await
    }

    pub async fn create_menu_item(&self, data: &MenuItemCreate) -> ClientResult<MenuItem> {
        self.post("menu-items", data).await
    }

    pub async fn update_menu_item(
        &self,
        id: &str,
        data: &MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        ensure_id(id, "menu item")?;
        self.put(&format!("menu-items/{id}"), data).await
    }

    pub async fn delete_menu_item(&self, id: &str) -> ClientResult<DeleteAck> {
        ensure_id(id, "menu item")?;
        self.delete(&format!("menu-items/{id}")).await
    }

    // ========== Orders ==========

    pub async fn orders(
        &self,
        restaurant_id: Option<&str>,
        status: Option<OrderStatus>,
    ) -> ClientResult<Vec<Order>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(rid) = restaurant_id {
            params.push(("restaurantId", rid.to_string()));
        }
        if let Some(status) = status {
            params.push(("status", status.to_string()));
        }
        self.get_query("orders", &params).await
    }

    pub async fn order(&self, id: &str) -> ClientResult<Order> {
        ensure_id(id, "order")?;
        self.get(&format!("orders/{id}")).await
    }

    pub async fn create_order(&self, data: &OrderCreate) -> ClientResult<Order> {
        self.post("orders", data).await
    }

    pub async fn update_order(&self, id: &str, data: &OrderUpdate) -> ClientResult<Order> {
        ensure_id(id, "order")?;
        self.put(&format!("orders/{id}"), data).await
    }

    pub async fn delete_order(&self, id: &str) -> ClientResult<DeleteAck> {
        ensure_id(id, "order")?;
        self.delete(&format!("orders/{id}")).await
    }

    // ========== Upload ==========

    /// Upload an image through the server's media relay
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<UploadResponse> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|e| ClientError::State(format!("invalid content type: {e}")))?;
        let form = reqwest::multipart::Form::new().part("file", part);
        self.post_multipart("upload/image", form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_ids_never_reach_the_network() {
        assert!(ensure_id("", "order").is_err());
        assert!(ensure_id("   ", "order").is_err());
        assert!(ensure_id("undefined", "order").is_err());
        assert!(ensure_id("h7k2m9", "order").is_ok());
    }

    #[test]
    fn id_guard_error_is_a_local_state_error() {
        let err = ensure_id("undefined", "table").unwrap_err();
        assert!(matches!(err, ClientError::State(_)));
        assert_eq!(err.status(), None);
    }
}
