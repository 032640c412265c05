//! Table Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use shared::client::DeleteAck;
use shared::models::{Table as SharedTable, TableCreate, TableUpdate};

use crate::api::convert;
use crate::core::state::ServerState;
use crate::db::repository::TableRepository;
use crate::utils::{AppError, AppResult, Body, validation::validate_id};

const RESOURCE: &str = "table";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableListParams {
    pub restaurant_id: Option<String>,
}

pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<TableListParams>,
) -> AppResult<Json<Vec<SharedTable>>> {
    let repo = TableRepository::new(state.db.clone());
    let tables = repo.find_all(params.restaurant_id.as_deref()).await?;
    Ok(Json(
        tables.into_iter().map(convert::table_to_shared).collect(),
    ))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedTable>> {
    validate_id(&id, RESOURCE)?;

    let repo = TableRepository::new(state.db.clone());
    let table = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Table not found"))?;
    Ok(Json(convert::table_to_shared(table)))
}

pub async fn create(
    State(state): State<ServerState>,
    Body(data): Body<TableCreate>,
) -> AppResult<(StatusCode, Json<SharedTable>)> {
    let repo = TableRepository::new(state.db.clone());
    let table = repo.create(data).await?;
    Ok((StatusCode::CREATED, Json(convert::table_to_shared(table))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Body(data): Body<TableUpdate>,
) -> AppResult<Json<SharedTable>> {
    validate_id(&id, RESOURCE)?;

    let repo = TableRepository::new(state.db.clone());
    let table = repo.update(&id, data).await?;
    Ok(Json(convert::table_to_shared(table)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    validate_id(&id, RESOURCE)?;

    let repo = TableRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found("Table not found"));
    }
    Ok(Json(DeleteAck { ok: true }))
}
