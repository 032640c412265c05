//! Request body extractor
//!
//! axum 的 `Json<T>` 对反序列化失败默认返回 422，平台契约要求校验类失败
//! 一律 400，统一走 [`AppError`] 的 JSON 错误体。

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::utils::AppError;

/// JSON body extractor that turns every rejection into a 400 with the
/// platform error shape.
pub struct Body<T>(pub T);

impl<S, T> FromRequest<S> for Body<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Body(value))
    }
}
