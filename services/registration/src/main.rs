//! Registration Service 入口
//!
//! 使用 registration-bootstrap 统一启动模式

use std::sync::Arc;

use registration_bootstrap::{run_http, HealthChecker, ServiceParts};
use registration_config::AppConfig;
use registration_service::api::http::{client_routes, AppState};
use registration_service::infrastructure::events::LoggingEventPublisher;
use registration_service::infrastructure::persistence::InMemoryClientRepository;
use tracing::info;

/// 以内存适配器启动，进程启动时仓储为空，重启后数据不保留
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run_http("config", |config: AppConfig| async move {
        let client_repo = Arc::new(InMemoryClientRepository::new());
        let event_publisher = Arc::new(LoggingEventPublisher);

        let state = AppState::new(client_repo.clone(), event_publisher);
        let health = HealthChecker::new().with_probe(client_repo);

        info!(env = %config.app_env, "Registration service assembled");

        Ok(ServiceParts::new(client_routes(state)).with_health(health))
    })
    .await
}
