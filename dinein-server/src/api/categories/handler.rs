//! Category Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use shared::client::DeleteAck;
use shared::models::{Category as SharedCategory, CategoryCreate, CategoryUpdate};

use crate::api::convert;
use crate::core::state::ServerState;
use crate::db::repository::CategoryRepository;
use crate::utils::{AppError, AppResult, Body, validation::validate_id};

const RESOURCE: &str = "category";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListParams {
    pub restaurant_id: Option<String>,
}

pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<CategoryListParams>,
) -> AppResult<Json<Vec<SharedCategory>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_all(params.restaurant_id.as_deref()).await?;
    Ok(Json(
        categories
            .into_iter()
            .map(convert::category_to_shared)
            .collect(),
    ))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedCategory>> {
    validate_id(&id, RESOURCE)?;

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;
    Ok(Json(convert::category_to_shared(category)))
}

pub async fn create(
    State(state): State<ServerState>,
    Body(data): Body<CategoryCreate>,
) -> AppResult<(StatusCode, Json<SharedCategory>)> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(convert::category_to_shared(category)),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Body(data): Body<CategoryUpdate>,
) -> AppResult<Json<SharedCategory>> {
    validate_id(&id, RESOURCE)?;

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.update(&id, data).await?;
    Ok(Json(convert::category_to_shared(category)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    validate_id(&id, RESOURCE)?;

    let repo = CategoryRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found("Category not found"));
    }
    Ok(Json(DeleteAck { ok: true }))
}
