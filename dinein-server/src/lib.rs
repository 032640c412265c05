//! DineIn Server
//!
//! 扫码点餐平台的 REST 后端: 餐厅/餐桌/分类/菜品/订单的增删改查,
//! 餐厅账号注册登录, 图片上传转发。嵌入式 SurrealDB 存储,
//! 所有接口走 camelCase JSON。
//!
//! # 模块结构
//!
//! - [`api`] - 每个资源一个子模块 (路由 + handler)
//! - [`core`] - 配置 / 共享状态 / 服务器生命周期
//! - [`db`] - 存储模型与仓储
//! - [`middleware`] - 请求日志
//! - [`routes`] - 路由与横切层组装
//! - [`services`] - 图床直传
//! - [`utils`] - 错误 / 校验 / 提取器 / 日志初始化

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;

pub use crate::core::config::Config;
pub use crate::core::server::Server;
pub use crate::core::state::ServerState;

/// 读 .env 并初始化日志, 进程里只调一次
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    ____  _            ____
   / __ \(_)___  ___  /  _/___
  / / / / / __ \/ _ \ / // __ \
 / /_/ / / / / /  __// // / / /
/_____/_/_/ /_/\___/___/_/ /_/

 DineIn Server v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
