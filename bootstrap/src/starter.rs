//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use registration_config::AppConfig;
use registration_errors::{AppError, AppResult};
use registration_telemetry::init_metrics;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::health::{health_routes, HealthChecker};
use crate::runtime::{init_runtime, shutdown_signal};

/// 服务组装结果：业务路由和就绪检查器
pub struct ServiceParts {
    pub router: Router,
    pub health: HealthChecker,
}

impl ServiceParts {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            health: HealthChecker::new(),
        }
    }

    pub fn with_health(mut self, health: HealthChecker) -> Self {
        self.health = health;
        self
    }
}

/// 运行 HTTP 服务
///
/// 这是所有服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志、追踪）
/// 3. 安装 Prometheus recorder
/// 4. 调用用户提供的闭包构建业务路由
/// 5. 挂载 /health、/ready、/metrics
/// 6. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use registration_bootstrap::{run_http, ServiceParts};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_http("config", |config| async move {
///         Ok(ServiceParts::new(my_routes(&config)))
///     }).await
/// }
/// ```
pub async fn run_http<F, Fut>(config_dir: &str, service_builder: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(AppConfig) -> Fut,
    Fut: Future<Output = AppResult<ServiceParts>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics
    let metrics = init_metrics()?;

    // 4. 构建服务地址
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::internal(format!("Invalid address: {}", e)))?;

    // 5. 构建路由
    let parts = service_builder(config).await?;
    let app = parts
        .router
        .merge(health_routes(parts.health, Some(metrics)))
        .layer(TraceLayer::new_for_http());

    info!(%addr, "HTTP server starting");

    // 6. 启动服务器
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}
