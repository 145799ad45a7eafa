//! Middleware 定义

use async_trait::async_trait;
use registration_errors::{AppError, AppResult};

use crate::Command;

/// Command Middleware trait
///
/// `before` 返回错误时命令不会被执行
#[async_trait]
pub trait CommandMiddleware<C: Command>: Send + Sync {
    async fn before(&self, command: &C) -> AppResult<()>;
    async fn after(&self, result: &AppResult<C::Result>);
}

/// 日志中间件
pub struct LoggingMiddleware;

#[async_trait]
impl<C: Command + 'static> CommandMiddleware<C> for LoggingMiddleware {
    async fn before(&self, command: &C) -> AppResult<()> {
        tracing::debug!(command = C::NAME, ?command, "Executing command");
        Ok(())
    }

    async fn after(&self, result: &AppResult<C::Result>) {
        match result {
            Ok(_) => tracing::debug!(command = C::NAME, "Command executed successfully"),
            Err(AppError::ConstraintViolation(violations)) => {
                tracing::warn!(command = C::NAME, %violations, "Command rejected")
            }
            Err(e) => tracing::error!(command = C::NAME, error = %e, "Command failed"),
        }
    }
}

/// Metrics 中间件
///
/// 按命令和结果统计 `cqrs_commands_total`
pub struct MetricsMiddleware;

impl MetricsMiddleware {
    fn outcome<R>(result: &AppResult<R>) -> &'static str {
        match result {
            Ok(_) => "success",
            Err(AppError::ConstraintViolation(_)) | Err(AppError::Validation(_)) => "rejected",
            Err(_) => "failure",
        }
    }
}

#[async_trait]
impl<C: Command + 'static> CommandMiddleware<C> for MetricsMiddleware {
    async fn before(&self, _command: &C) -> AppResult<()> {
        Ok(())
    }

    async fn after(&self, result: &AppResult<C::Result>) {
        metrics::counter!(
            "cqrs_commands_total",
            "command" => C::NAME,
            "outcome" => Self::outcome(result)
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registration_errors::ValidationErrors;

    #[test]
    fn test_metrics_outcome() {
        let ok: AppResult<()> = Ok(());
        let rejected: AppResult<()> = Err(AppError::from(ValidationErrors::new()));
        let invalid_body: AppResult<()> = Err(AppError::validation("bad json"));
        let failed: AppResult<()> = Err(AppError::internal("boom"));

        assert_eq!(MetricsMiddleware::outcome(&ok), "success");
        assert_eq!(MetricsMiddleware::outcome(&rejected), "rejected");
        assert_eq!(MetricsMiddleware::outcome(&invalid_body), "rejected");
        assert_eq!(MetricsMiddleware::outcome(&failed), "failure");
    }
}
