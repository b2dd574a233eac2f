//! BugStore - 客户 / 商品 / 订单 CRUD 服务
//!
//! - Domain: customer/, product/, order/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, persistence

use std::sync::Arc;

use bugstore::config::{load_config, print_config, LogConfig};
use bugstore::infrastructure::http::{AppState, HttpServer};
use bugstore::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteCustomerRepository, SqliteOrderRepository,
    SqliteProductRepository,
};
use tracing_subscriber::EnvFilter;

/// 初始化日志，RUST_LOG 优先于配置中的级别
fn init_tracing(log: &LogConfig) {
    let default_filter = format!("{},bugstore={},tower_http=debug", log.level, log.level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    if log.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        return;
    }
    tracing::info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("BugStore v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let customer_repo = Arc::new(SqliteCustomerRepository::new(pool.clone()));
    let product_repo = Arc::new(SqliteProductRepository::new(pool.clone()));
    let order_repo = Arc::new(SqliteOrderRepository::new(pool));

    let state = AppState::new(customer_repo, product_repo, order_repo);
    let server = HttpServer::new(config.server.clone(), state);

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
