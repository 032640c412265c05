//! HTTP Server
//!
//! 监听 / 服务 / 优雅退出

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::core::state::ServerState;
use crate::routes::build_app;

pub struct Server {
    state: ServerState,
}

impl Server {
    pub fn with_state(state: ServerState) -> Self {
        Self { state }
    }

    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.state.config.http_port);
        let listener = TcpListener::bind(&addr).await?;
        info!(%addr, environment = %self.state.config.environment, "HTTP server listening");

        let app = build_app(self.state);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            // 装不上信号处理器就不再主动退出
            error!(%err, "failed to install shutdown handler");
            std::future::pending::<()>().await;
        }
    }
}
