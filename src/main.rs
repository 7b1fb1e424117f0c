//! Crudkit - 统一响应信封的 CRUD 演示服务

use std::sync::Arc;

use crudkit::config::{load_config, print_config};
use crudkit::infrastructure::http::{AppState, HttpServer, ServerConfig};
use crudkit::infrastructure::memory::{InMemoryItemRepository, InMemoryUserRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},crudkit={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Crudkit - CRUD envelope service");
    print_config(&config);

    // 进程内仓储，重启即清空
    let item_repo = Arc::new(InMemoryItemRepository::new());
    let user_repo = Arc::new(InMemoryUserRepository::new());

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(item_repo, user_repo);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Received shutdown signal"),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to listen for ctrl-c");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
