//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型和结果别名
//! - [`extract::Body`] - JSON body 提取器 (校验失败统一返回 400)
//! - 输入校验和日志工具

pub mod error;
pub mod extract;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};
pub use extract::Body;
