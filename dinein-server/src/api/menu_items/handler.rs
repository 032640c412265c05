//! Menu Item Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use shared::client::DeleteAck;
use shared::models::{MenuItem as SharedMenuItem, MenuItemCreate, MenuItemUpdate};

use crate::api::convert;
use crate::core::state::ServerState;
use crate::db::repository::MenuItemRepository;
use crate::utils::{AppError, AppResult, Body, validation::validate_id};

const RESOURCE: &str = "menu item";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemListParams {
    pub restaurant_id: Option<String>,
    pub category_id: Option<String>,
}

pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<MenuItemListParams>,
) -> AppResult<Json<Vec<SharedMenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo
        .find_all(
            params.restaurant_id.as_deref(),
            params.category_id.as_deref(),
        )
        .await?;
    Ok(Json(
        items.into_iter().map(convert::menu_item_to_shared).collect(),
    ))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedMenuItem>> {
    validate_id(&id, RESOURCE)?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Menu item not found"))?;
    Ok(Json(convert::menu_item_to_shared(item)))
}

pub async fn create(
    State(state): State<ServerState>,
    Body(data): Body<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<SharedMenuItem>)> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(convert::menu_item_to_shared(item)),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Body(data): Body<MenuItemUpdate>,
) -> AppResult<Json<SharedMenuItem>> {
    validate_id(&id, RESOURCE)?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.update(&id, data).await?;
    Ok(Json(convert::menu_item_to_shared(item)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    validate_id(&id, RESOURCE)?;

    let repo = MenuItemRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found("Menu item not found"));
    }
    Ok(Json(DeleteAck { ok: true }))
}
