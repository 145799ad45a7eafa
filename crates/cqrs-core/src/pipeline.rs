//! Command Pipeline
//!
//! 分发顺序：middleware.before → validate → handler → middleware.after（逆序）

use std::sync::Arc;

use async_trait::async_trait;
use registration_errors::{AppError, AppResult};

use crate::{Command, CommandHandler, CommandMiddleware};

/// 带校验和中间件的 Command 分发器
pub struct CommandPipeline<C: Command> {
    handler: Arc<dyn CommandHandler<C>>,
    middlewares: Vec<Arc<dyn CommandMiddleware<C>>>,
}

impl<C: Command + 'static> CommandPipeline<C> {
    pub fn new(handler: Arc<dyn CommandHandler<C>>) -> Self {
        Self {
            handler,
            middlewares: Vec::new(),
        }
    }

    /// 追加中间件，按添加顺序执行 before
    pub fn with_middleware<M>(mut self, middleware: M) -> Self
    where
        M: CommandMiddleware<C> + 'static,
    {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    /// 分发命令
    ///
    /// 校验失败时返回 `AppError::ConstraintViolation`，handler 不会被调用
    pub async fn dispatch(&self, command: C) -> AppResult<C::Result> {
        for middleware in &self.middlewares {
            middleware.before(&command).await?;
        }

        let result = match command.validate() {
            Ok(()) => self.handler.handle(command).await,
            Err(violations) => Err(AppError::from(violations)),
        };

        for middleware in self.middlewares.iter().rev() {
            middleware.after(&result).await;
        }

        result
    }
}

#[async_trait]
impl<C: Command + 'static> CommandHandler<C> for CommandPipeline<C> {
    async fn handle(&self, command: C) -> AppResult<C::Result> {
        self.dispatch(command).await
    }
}
