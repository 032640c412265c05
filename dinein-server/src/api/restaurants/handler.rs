//! Restaurant Handlers
//!
//! 直接 POST /restaurants 和走 /auth/register 等价, 都要带密码,
//! 出参同样不带哈希

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::client::RegisterRequest;
use shared::models::{Restaurant as SharedRestaurant, RestaurantUpdate};

use crate::api::convert;
use crate::core::state::ServerState;
use crate::db::repository::RestaurantRepository;
use crate::utils::{AppError, AppResult, Body, validation::validate_id};

const RESOURCE: &str = "restaurant";

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedRestaurant>>> {
    let repo = RestaurantRepository::new(state.db.clone());
    let restaurants = repo.find_all().await?;
    Ok(Json(
        restaurants
            .into_iter()
            .map(convert::restaurant_to_shared)
            .collect(),
    ))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedRestaurant>> {
    validate_id(&id, RESOURCE)?;

    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Restaurant not found"))?;
    Ok(Json(convert::restaurant_to_shared(restaurant)))
}

pub async fn create(
    State(state): State<ServerState>,
    Body(data): Body<RegisterRequest>,
) -> AppResult<(StatusCode, Json<SharedRestaurant>)> {
    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(convert::restaurant_to_shared(restaurant)),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Body(data): Body<RestaurantUpdate>,
) -> AppResult<Json<SharedRestaurant>> {
    validate_id(&id, RESOURCE)?;

    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo.update(&id, data).await?;
    Ok(Json(convert::restaurant_to_shared(restaurant)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<shared::client::DeleteAck>> {
    validate_id(&id, RESOURCE)?;

    let repo = RestaurantRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found("Restaurant not found"));
    }
    Ok(Json(shared::client::DeleteAck { ok: true }))
}
