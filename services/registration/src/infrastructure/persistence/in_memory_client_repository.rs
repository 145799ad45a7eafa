//! 内存 Client 仓储

use std::collections::HashMap;

use async_trait::async_trait;
use registration_bootstrap::ReadinessProbe;
use registration_common::{ClientId, TenantId, UserId};
use registration_errors::{AppError, AppResult};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::repositories::ClientRepository;
use crate::domain::Client;

/// 内存 Client 仓储
///
/// `delete_all_by_creator` 在同一把写锁内完成查找和删除，
/// 并发删除同一用户时每个 Client 只会被删除一次
#[derive(Default)]
pub struct InMemoryClientRepository {
    clients: RwLock<HashMap<ClientId, Client>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前保存的 Client 数量
    pub async fn len(&self) -> usize {
        self.clients.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.clients.read().await.is_empty()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn save(&self, client: &Client) -> AppResult<()> {
        let mut clients = self.clients.write().await;
        if clients.contains_key(&client.id) {
            return Err(AppError::conflict(format!("Client already exists: {}", client.id)));
        }
        debug!(client_id = %client.id, tenant_id = %client.tenant_id, "Saving client");
        clients.insert(client.id, client.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ClientId, tenant_id: &TenantId) -> AppResult<Option<Client>> {
        let clients = self.clients.read().await;
        Ok(clients
            .get(id)
            .filter(|client| &client.tenant_id == tenant_id)
            .cloned())
    }

    async fn list_by_creator(&self, tenant_id: &TenantId, user_id: &UserId) -> AppResult<Vec<Client>> {
        let clients = self.clients.read().await;
        let mut owned: Vec<Client> = clients
            .values()
            .filter(|client| client.is_created_by(tenant_id, user_id))
            .cloned()
            .collect();
        owned.sort_by_key(|client| client.created_at);
        Ok(owned)
    }

    async fn delete_all_by_creator(
        &self,
        tenant_id: &TenantId,
        user_id: &UserId,
    ) -> AppResult<Vec<ClientId>> {
        let mut clients = self.clients.write().await;
        let ids: Vec<ClientId> = clients
            .values()
            .filter(|client| client.is_created_by(tenant_id, user_id))
            .map(|client| client.id)
            .collect();

        for id in &ids {
            clients.remove(id);
        }

        debug!(
            tenant_id = %tenant_id,
            user_id = %user_id,
            deleted = ids.len(),
            "Deleted clients by creator"
        );

        Ok(ids)
    }
}

#[async_trait]
impl ReadinessProbe for InMemoryClientRepository {
    fn name(&self) -> &str {
        "client_repository"
    }

    async fn check(&self) -> Result<(), String> {
        Ok(())
    }
}
