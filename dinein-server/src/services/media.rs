//! Media Service
//!
//! 图片直传 Cloudinary 风格的图床: 参数按字典序拼签名串,
//! SHA-256 签名随表单一起提交。

use chrono::Utc;
use reqwest::multipart::{Form, Part};
use sha2::{Digest, Sha256};
use tracing::warn;

use shared::client::UploadResponse;

use crate::core::config::MediaConfig;
use crate::utils::AppError;

#[derive(Clone, Debug)]
pub struct MediaService {
    config: MediaConfig,
    http: reqwest::Client,
}

impl MediaService {
    pub fn new(config: MediaConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub async fn upload_image(
        &self,
        data: Vec<u8>,
        file_name: &str,
        content_type: &str,
    ) -> Result<UploadResponse, AppError> {
        let timestamp = Utc::now().timestamp();
        let signature = self.sign(timestamp);

        let part = Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|e| AppError::upload(format!("invalid content type: {e}")))?;

        let form = Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("folder", self.config.upload_folder.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
            .part("file", part);

        let url = format!(
            "{}/v1_1/{}/image/upload",
            self.config.api_base, self.config.cloud_name
        );

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::upload(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "media service rejected upload");
            return Err(AppError::upload(format!(
                "media service returned {status}: {body}"
            )));
        }

        response
            .json::<UploadResponse>()
            .await
            .map_err(|e| AppError::upload(format!("unexpected media response: {e}")))
    }

    fn sign(&self, timestamp: i64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(signing_string(
            &self.config.upload_folder,
            timestamp,
            &self.config.api_secret,
        ));
        hex::encode(hasher.finalize())
    }
}

/// 除 file/api_key/signature 外的参数按字母序排列, 末尾直接拼 secret
fn signing_string(folder: &str, timestamp: i64, api_secret: &str) -> String {
    format!("folder={folder}&timestamp={timestamp}{api_secret}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signing_string_orders_params_and_appends_secret() {
        assert_eq!(
            signing_string("dinein", 1_700_000_000, "s3cret"),
            "folder=dinein&timestamp=1700000000s3cret"
        );
    }

    #[test]
    fn signature_is_hex_sha256() {
        let config = MediaConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            api_base: "http://localhost:0".to_string(),
            upload_folder: "dinein".to_string(),
        };
        let service = MediaService::new(config);
        let sig = service.sign(1_700_000_000);
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
        // 同一时间戳签名稳定
        assert_eq!(sig, service.sign(1_700_000_000));
    }
}
