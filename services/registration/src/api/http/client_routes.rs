//! Client HTTP 路由

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::delete,
    Json, Router,
};
use registration_cqrs_core::{CommandPipeline, LoggingMiddleware, MetricsMiddleware};

use super::error::ApiError;
use crate::application::commands::{DeleteUserClientsCommand, DeleteUserClientsResult};
use crate::application::handlers::DeleteUserClientsHandler;
use crate::domain::repositories::ClientRepository;
use crate::infrastructure::events::EventPublisher;

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub delete_user_clients: Arc<CommandPipeline<DeleteUserClientsCommand>>,
}

impl AppState {
    /// 组装命令管道：日志 → 指标 → 校验 → handler
    pub fn new(client_repo: Arc<dyn ClientRepository>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        let handler = Arc::new(DeleteUserClientsHandler::new(client_repo, event_publisher));
        let pipeline = CommandPipeline::<DeleteUserClientsCommand>::new(handler)
            .with_middleware(LoggingMiddleware)
            .with_middleware(MetricsMiddleware);

        Self {
            delete_user_clients: Arc::new(pipeline),
        }
    }
}

pub fn client_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/clients", delete(delete_user_clients))
        .with_state(state)
}

/// DELETE /api/v1/clients
async fn delete_user_clients(
    State(state): State<AppState>,
    payload: Result<Json<DeleteUserClientsCommand>, JsonRejection>,
) -> Result<Json<DeleteUserClientsResult>, ApiError> {
    let Json(command) = payload?;
    let result = state.delete_user_clients.dispatch(command).await?;
    Ok(Json(result))
}
