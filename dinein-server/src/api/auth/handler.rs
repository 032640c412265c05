//! Auth Handlers
//!
//! 餐厅账号注册/登录。登录接口固定耗时, 避免通过响应时间
//! 探测邮箱是否注册过; 失败文案也统一成一句。

use std::time::{Duration, Instant};

use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;
use tokio::time::sleep;
use tracing::info;

use shared::client::RegisterRequest;
use shared::models::Restaurant as SharedRestaurant;

use crate::api::convert;
use crate::core::state::ServerState;
use crate::db::repository::RestaurantRepository;
use crate::utils::{
    AppError, AppResult, Body,
    validation::{
        MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PASSWORD_LEN,
        MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
    },
};

/// 登录最少耗时 (ms)
const AUTH_FIXED_DELAY_MS: u64 = 500;

fn text_field<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn optional_field(payload: &Value, field: &str) -> Option<String> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

pub async fn register(
    State(state): State<ServerState>,
    Body(payload): Body<Value>,
) -> AppResult<(StatusCode, Json<SharedRestaurant>)> {
    let name = text_field(&payload, "name");
    let email = text_field(&payload, "contactEmail");
    let password = text_field(&payload, "password");

    let (Some(name), Some(email), Some(password)) = (name, email, password) else {
        return Err(AppError::validation(
            "name, contactEmail and password are required",
        ));
    };

    validate_required_text(name, "name", MAX_NAME_LEN)?;
    validate_required_text(email, "contactEmail", MAX_EMAIL_LEN)?;
    validate_required_text(password, "password", MAX_PASSWORD_LEN)?;

    let data = RegisterRequest {
        name: name.to_string(),
        contact_email: email.to_string(),
        password: password.to_string(),
        contact_phone: optional_field(&payload, "contactPhone"),
        address: optional_field(&payload, "address"),
        description: optional_field(&payload, "description"),
        image: optional_field(&payload, "image"),
    };

    validate_optional_text(&data.contact_phone, "contactPhone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&data.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&data.image, "image", MAX_URL_LEN)?;

    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo.create(data).await?;

    info!(restaurant = %restaurant.name, "restaurant registered");
    Ok((
        StatusCode::CREATED,
        Json(convert::restaurant_to_shared(restaurant)),
    ))
}

pub async fn login(
    State(state): State<ServerState>,
    Body(payload): Body<Value>,
) -> AppResult<Json<SharedRestaurant>> {
    let started = Instant::now();
    let result = login_inner(&state, &payload).await;

    // 成功失败都补足到固定耗时
    let floor = Duration::from_millis(AUTH_FIXED_DELAY_MS);
    let elapsed = started.elapsed();
    if elapsed < floor {
        sleep(floor - elapsed).await;
    }

    result.map(Json)
}

async fn login_inner(
    state: &ServerState,
    payload: &Value,
) -> Result<SharedRestaurant, AppError> {
    let email = text_field(payload, "contactEmail");
    let password = text_field(payload, "password");

    let (Some(email), Some(password)) = (email, password) else {
        return Err(AppError::validation("contactEmail and password are required"));
    };

    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo
        .find_by_email(email)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    // 存储的哈希坏掉也按认证失败处理
    if !restaurant.verify_password(password).unwrap_or(false) {
        return Err(AppError::invalid_credentials());
    }

    info!(restaurant = %restaurant.name, "restaurant logged in");
    Ok(convert::restaurant_to_shared(restaurant))
}
