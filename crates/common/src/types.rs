//! 通用类型定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 租户 ID
///
/// 租户以正整数标识，合法值从 1 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
#[display("{_0}")]
pub struct TenantId(pub i64);

impl TenantId {
    /// 最小合法租户 ID
    pub const MIN: i64 = 1;

    /// 创建租户 ID，小于 1 时返回 None
    pub fn new(id: i64) -> Option<Self> {
        (id >= Self::MIN).then_some(Self(id))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 用户 ID
///
/// 由上游身份系统分配的不透明字符串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
#[display("{_0}")]
pub struct UserId(pub String);

impl UserId {
    /// 创建用户 ID，空白字符串返回 None
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if crate::utils::is_blank(&id) {
            return None;
        }
        Some(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 客户端 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
#[display("{_0}")]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new() -> Self {
        Self(crate::utils::new_id())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}
