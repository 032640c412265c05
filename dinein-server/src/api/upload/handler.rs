//! Upload Handlers
//!
//! 收 multipart 的 `file` 字段, 转发到图床, 返回 secure_url/public_id

use axum::{
    Json,
    extract::{Multipart, State},
};
use tracing::info;

use shared::client::UploadResponse;

use crate::core::state::ServerState;
use crate::utils::{AppError, AppResult};

/// 单文件上限 5MB
pub(crate) const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(ToString::to_string)
            .unwrap_or_else(|| "upload".to_string());
        let content_type = field
            .content_type()
            .map(ToString::to_string)
            .unwrap_or_else(|| {
                mime_guess::from_path(&file_name)
                    .first_or_octet_stream()
                    .to_string()
            });

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;

        if data.is_empty() {
            return Err(AppError::validation("No file uploaded"));
        }
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::validation(format!(
                "File too large ({} bytes, max {MAX_FILE_SIZE})",
                data.len()
            )));
        }

        info!(file = %file_name, size = data.len(), "forwarding upload");
        let response = state
            .media
            .upload_image(data.to_vec(), &file_name, &content_type)
            .await?;
        return Ok(Json(response));
    }

    Err(AppError::validation("No file uploaded"))
}
