//! 事件发布器
//!
//! 提供领域事件的发布功能

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use registration_common::{ClientId, TenantId, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// 注册服务领域事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RegistrationEvent {
    UserClientsDeleted {
        tenant_id: TenantId,
        user_id: UserId,
        client_ids: Vec<ClientId>,
        timestamp: DateTime<Utc>,
    },
}

impl RegistrationEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::UserClientsDeleted { .. } => "UserClientsDeleted",
        }
    }

    pub fn aggregate_type(&self) -> &'static str {
        match self {
            Self::UserClientsDeleted { .. } => "Client",
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::UserClientsDeleted { timestamp, .. } => *timestamp,
        }
    }
}

/// 事件发布器 trait
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// 发布单个事件
    async fn publish(&self, event: RegistrationEvent);

    /// 批量发布事件
    async fn publish_all(&self, events: Vec<RegistrationEvent>) {
        for event in events {
            self.publish(event).await;
        }
    }
}

/// 内存事件总线实现
pub struct InMemoryEventBus {
    events: Arc<RwLock<Vec<RegistrationEvent>>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// 获取所有发布的事件（用于测试）
    pub async fn get_events(&self) -> Vec<RegistrationEvent> {
        self.events.read().await.clone()
    }

    /// 清空事件（用于测试）
    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: RegistrationEvent) {
        tracing::info!(
            event_type = event.event_type(),
            aggregate_type = event.aggregate_type(),
            "Domain event published"
        );
        self.events.write().await.push(event);
    }
}

/// 日志事件发布器
pub struct LoggingEventPublisher;

#[async_trait]
impl EventPublisher for LoggingEventPublisher {
    async fn publish(&self, event: RegistrationEvent) {
        tracing::info!(
            event_type = event.event_type(),
            aggregate_type = event.aggregate_type(),
            timestamp = %event.timestamp(),
            "Domain event: {}",
            event.event_type()
        );
    }
}

/// 丢弃所有事件的发布器
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: RegistrationEvent) {}
}
