//! Client 仓储接口

use async_trait::async_trait;
use registration_common::{ClientId, TenantId, UserId};
use registration_errors::AppResult;

use crate::domain::Client;

/// Client 仓储接口
///
/// 所有查询和删除都限定在租户范围内
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// 保存 Client
    async fn save(&self, client: &Client) -> AppResult<()>;

    /// 根据 ID 查找 Client
    async fn find_by_id(&self, id: &ClientId, tenant_id: &TenantId) -> AppResult<Option<Client>>;

    /// 列出用户在租户内创建的所有 Client
    async fn list_by_creator(&self, tenant_id: &TenantId, user_id: &UserId) -> AppResult<Vec<Client>>;

    /// 删除用户在租户内创建的所有 Client，返回被删除的 ID
    async fn delete_all_by_creator(
        &self,
        tenant_id: &TenantId,
        user_id: &UserId,
    ) -> AppResult<Vec<ClientId>>;
}
