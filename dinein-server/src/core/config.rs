//! Server Configuration
//!
//! 全部来自环境变量, 图床三件套缺一不可, 启动即失败。

use std::fmt;

use anyhow::{Context, Result, bail};

/// 服务器配置
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 监听端口
    pub http_port: u16,
    /// 数据库路径, ":memory:" 走内存引擎
    pub db_path: String,
    /// CORS 白名单, 空 = 全放行
    pub allowed_origins: Vec<String>,
    /// 运行环境: development / production / test
    pub environment: String,
    /// 图床配置
    pub media: MediaConfig,
}

#[derive(Clone)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// 覆盖上传端点, 测试时指到本地
    pub api_base: String,
    pub upload_folder: String,
}

impl fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // api_secret 不进日志
        f.debug_struct("MediaConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("upload_folder", &self.upload_folder)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let http_port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(4000);

        let db_path = std::env::var("DB_PATH").unwrap_or_else(|_| "data/dinein.db".to_string());

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let media = MediaConfig::from_env().context("media service configuration")?;

        Ok(Self {
            http_port,
            db_path,
            allowed_origins,
            environment,
            media,
        })
    }

    /// Test configuration: in-memory friendly, media creds are placeholders
    /// pointing at a dead endpoint.
    pub fn with_overrides(db_path: impl Into<String>, http_port: u16) -> Self {
        Self {
            http_port,
            db_path: db_path.into(),
            allowed_origins: Vec::new(),
            environment: "test".to_string(),
            media: MediaConfig {
                cloud_name: "test-cloud".to_string(),
                api_key: "test-key".to_string(),
                api_secret: "test-secret".to_string(),
                api_base: "http://127.0.0.1:0".to_string(),
                upload_folder: "dinein-test".to_string(),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl MediaConfig {
    fn from_env() -> Result<Self> {
        let cloud_name = required("CLOUDINARY_CLOUD_NAME")?;
        let api_key = required("CLOUDINARY_API_KEY")?;
        let api_secret = required("CLOUDINARY_API_SECRET")?;
        let api_base = std::env::var("CLOUDINARY_API_BASE")
            .unwrap_or_else(|_| "https://api.cloudinary.com".to_string());
        let upload_folder =
            std::env::var("CLOUDINARY_UPLOAD_FOLDER").unwrap_or_else(|_| "dinein".to_string());

        Ok(Self {
            cloud_name,
            api_key,
            api_secret,
            api_base,
            upload_folder,
        })
    }
}

fn required(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!("{name} is not set"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_build_a_test_config() {
        let config = Config::with_overrides(":memory:", 0);
        assert_eq!(config.db_path, ":memory:");
        assert_eq!(config.http_port, 0);
        assert!(!config.is_production());
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn media_debug_hides_the_secret() {
        let config = Config::with_overrides(":memory:", 0);
        let rendered = format!("{:?}", config.media);
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("test-secret"));
    }
}
