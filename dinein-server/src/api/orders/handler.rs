//! Order Handlers
//!
//! 下单使用宽松 JSON 校验: 一次请求里把所有字段错误收齐,
//! 连同收到的原始值一起返回, 方便前台排查

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use shared::client::DeleteAck;
use shared::models::{Order as SharedOrder, OrderCreate, OrderItem, OrderStatus, OrderUpdate};

use crate::api::convert;
use crate::core::state::ServerState;
use crate::db::repository::OrderRepository;
use crate::utils::{AppError, AppResult, Body, validation::validate_id};

const RESOURCE: &str = "order";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListParams {
    pub restaurant_id: Option<String>,
    pub status: Option<String>,
}

fn json_type_name(value: Option<&Value>) -> &'static str {
    match value {
        None | Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

fn render(value: Option<&Value>) -> String {
    value.map(Value::to_string).unwrap_or_else(|| "null".to_string())
}

/// 把整个请求体校验一遍, 所有问题一起报
fn validate_order_payload(payload: &Value) -> Result<OrderCreate, AppError> {
    let mut errors: Vec<String> = Vec::new();

    let restaurant_id = match payload.get("restaurantId").and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => {
            errors.push(format!(
                "restaurantId must be a non-empty string, got: {}",
                render(payload.get("restaurantId"))
            ));
            None
        }
    };

    let table_number = match payload.get("tableNumber").and_then(Value::as_f64) {
        Some(n) if n.fract() == 0.0 => Some(n as i32),
        Some(_) => {
            errors.push(format!(
                "tableNumber must be an integer, got: {}",
                render(payload.get("tableNumber"))
            ));
            None
        }
        None => {
            errors.push(format!(
                "tableNumber must be a number, got: {}",
                render(payload.get("tableNumber"))
            ));
            None
        }
    };

    let items_value = payload.get("items");
    let items_length = match items_value.and_then(Value::as_array) {
        Some(arr) => json!(arr.len()),
        None => json!(json_type_name(items_value)),
    };

    let mut items: Vec<OrderItem> = Vec::new();
    match items_value.and_then(Value::as_array) {
        None => errors.push(format!(
            "items must be an array, got: {}",
            json_type_name(items_value)
        )),
        Some(arr) if arr.is_empty() => errors.push("items array is empty".to_string()),
        Some(arr) => {
            for (i, item) in arr.iter().enumerate() {
                let name = item
                    .get("name")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty());
                if name.is_none() {
                    errors.push(format!(
                        "items[{i}].name must be a non-empty string, got: {}",
                        render(item.get("name"))
                    ));
                }

                let quantity = item
                    .get("quantity")
                    .and_then(Value::as_i64)
                    .filter(|q| *q >= 1);
                if quantity.is_none() {
                    errors.push(format!(
                        "items[{i}].quantity must be >= 1, got: {}",
                        render(item.get("quantity"))
                    ));
                }

                let price = item
                    .get("price")
                    .and_then(Value::as_f64)
                    .filter(|p| *p >= 0.0);
                if price.is_none() {
                    errors.push(format!(
                        "items[{i}].price must be a non-negative number, got: {}",
                        render(item.get("price"))
                    ));
                }

                if let (Some(name), Some(quantity), Some(price)) = (name, quantity, price) {
                    items.push(OrderItem {
                        // menuItemId 不是必填, 缺了按空串存
                        menu_item_id: item
                            .get("menuItemId")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                        name: name.to_string(),
                        quantity: quantity as i32,
                        price,
                        note: item
                            .get("note")
                            .and_then(Value::as_str)
                            .map(ToString::to_string),
                    });
                }
            }
        }
    }

    let total_amount = match payload
        .get("totalAmount")
        .and_then(Value::as_f64)
        .filter(|t| *t >= 0.0)
    {
        Some(t) => Some(t),
        None => {
            errors.push(format!(
                "totalAmount must be a non-negative number, got: {}",
                render(payload.get("totalAmount"))
            ));
            None
        }
    };

    if errors.is_empty()
        && let (Some(restaurant_id), Some(table_number), Some(total_amount)) =
            (restaurant_id, table_number, total_amount)
    {
        return Ok(OrderCreate {
            restaurant_id,
            table_number,
            items,
            total_amount,
            notes: payload
                .get("notes")
                .and_then(Value::as_str)
                .map(ToString::to_string),
        });
    }

    let received = json!({
        "restaurantId": payload.get("restaurantId").cloned().unwrap_or(Value::Null),
        "tableNumber": payload.get("tableNumber").cloned().unwrap_or(Value::Null),
        "itemsLength": items_length,
        "totalAmount": payload.get("totalAmount").cloned().unwrap_or(Value::Null),
    });
    Err(AppError::validation_details(errors, received))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<OrderListParams>,
) -> AppResult<Json<Vec<SharedOrder>>> {
    // 状态过滤复用 wire 反序列化, "new" 同样算 placed
    let status = match params.status.as_deref() {
        Some(s) => Some(
            serde_json::from_value::<OrderStatus>(Value::String(s.to_string()))
                .map_err(|_| AppError::validation(format!("Invalid status: {s}")))?,
        ),
        None => None,
    };

    let repo = OrderRepository::new(state.db.clone());
    let orders = repo
        .find_all(params.restaurant_id.as_deref(), status)
        .await?;
    Ok(Json(
        orders.into_iter().map(convert::order_to_shared).collect(),
    ))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedOrder>> {
    validate_id(&id, RESOURCE)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;
    Ok(Json(convert::order_to_shared(order)))
}

pub async fn create(
    State(state): State<ServerState>,
    Body(payload): Body<Value>,
) -> AppResult<(StatusCode, Json<SharedOrder>)> {
    let data = validate_order_payload(&payload)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(data).await?;
    Ok((StatusCode::CREATED, Json(convert::order_to_shared(order))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Body(data): Body<OrderUpdate>,
) -> AppResult<Json<SharedOrder>> {
    validate_id(&id, RESOURCE)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.update(&id, data).await?;
    Ok(Json(convert::order_to_shared(order)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    validate_id(&id, RESOURCE)?;

    let repo = OrderRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found("Order not found"));
    }
    Ok(Json(DeleteAck { ok: true }))
}
