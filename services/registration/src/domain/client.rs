//! Client 实体

use chrono::{DateTime, Utc};
use registration_common::{utils::is_blank, ClientId, TenantId, UserId};
use serde::{Deserialize, Serialize};

/// 注册客户端实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Client ID
    pub id: ClientId,
    /// 租户 ID
    pub tenant_id: TenantId,
    /// Client 名称
    pub name: String,
    /// 创建者 ID
    pub created_by: UserId,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// 创建新的 Client
    pub fn new(tenant_id: TenantId, created_by: UserId, name: impl Into<String>) -> Result<Self, ClientError> {
        let name = name.into();

        if tenant_id.value() < TenantId::MIN {
            return Err(ClientError::InvalidTenant(tenant_id.value()));
        }

        if is_blank(&name) {
            return Err(ClientError::Validation("Client name cannot be empty".to_string()));
        }

        Ok(Self {
            id: ClientId::new(),
            tenant_id,
            name,
            created_by,
            created_at: Utc::now(),
        })
    }

    /// 是否由指定租户内的指定用户创建
    pub fn is_created_by(&self, tenant_id: &TenantId, user_id: &UserId) -> bool {
        &self.tenant_id == tenant_id && &self.created_by == user_id
    }
}

/// Client 错误
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid tenant id: {0}")]
    InvalidTenant(i64),
}

impl From<ClientError> for registration_errors::AppError {
    fn from(err: ClientError) -> Self {
        registration_errors::AppError::validation(err.to_string())
    }
}
