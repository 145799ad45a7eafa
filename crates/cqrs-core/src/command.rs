//! Command trait 定义

use std::fmt::Debug;

use async_trait::async_trait;
use registration_errors::{AppResult, ValidationErrors};

/// Command trait
pub trait Command: Debug + Send + Sync {
    /// 命令名称，用于日志和 metrics 标签
    const NAME: &'static str;

    type Result: Send + Sync;

    /// 校验命令字段，返回全部约束违反
    ///
    /// 默认无约束
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

/// Command Handler trait
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    async fn handle(&self, command: C) -> AppResult<C::Result>;
}
