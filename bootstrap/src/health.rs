//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use registration_telemetry::HealthStatus;

/// 就绪检查探针
///
/// 由持有外部依赖的组件实现（如客户端存储）
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    fn name(&self) -> &str;

    async fn check(&self) -> Result<(), String>;
}

/// 健康检查器
#[derive(Clone, Default)]
pub struct HealthChecker {
    probes: Vec<Arc<dyn ReadinessProbe>>,
}

impl HealthChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册就绪探针
    pub fn with_probe(mut self, probe: Arc<dyn ReadinessProbe>) -> Self {
        self.probes.push(probe);
        self
    }

    /// 执行存活检查（liveness）
    ///
    /// 只检查服务是否在运行，不检查依赖
    pub fn liveness(&self) -> HealthStatus {
        HealthStatus::new()
    }

    /// 执行就绪检查（readiness）
    pub async fn readiness(&self) -> HealthStatus {
        let mut status = HealthStatus::new();
        for probe in &self.probes {
            match probe.check().await {
                Ok(()) => status.add_check(probe.name(), true, None),
                Err(message) => status.add_check(probe.name(), false, Some(message)),
            }
        }
        status
    }
}

#[derive(Clone)]
struct HealthState {
    checker: Arc<HealthChecker>,
    metrics: Option<PrometheusHandle>,
}

/// 健康检查与 metrics 路由
///
/// 未安装 Prometheus recorder 时 `/metrics` 返回 404
pub fn health_routes(checker: HealthChecker, metrics: Option<PrometheusHandle>) -> Router {
    let state = HealthState {
        checker: Arc::new(checker),
        metrics,
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Liveness 端点处理器
async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.checker.liveness()))
}

/// Readiness 端点处理器
async fn ready_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let status = state.checker.readiness().await;
    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Metrics 端点处理器
async fn metrics_handler(State(state): State<HealthState>) -> impl IntoResponse {
    match state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [("content-type", "text/plain; charset=utf-8")],
            handle.render(),
        ),
        None => (
            StatusCode::NOT_FOUND,
            [("content-type", "text/plain; charset=utf-8")],
            String::new(),
        ),
    }
}
