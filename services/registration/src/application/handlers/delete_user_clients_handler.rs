//! 删除用户客户端处理器

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use registration_cqrs_core::CommandHandler;
use registration_errors::AppResult;
use tracing::info;

use crate::application::commands::{DeleteUserClientsCommand, DeleteUserClientsResult};
use crate::domain::repositories::ClientRepository;
use crate::infrastructure::events::{EventPublisher, RegistrationEvent};

/// 删除用户客户端处理器
///
/// 没有匹配的 Client（包括未知租户或用户）时视为成功，`deleted_count` 为 0
pub struct DeleteUserClientsHandler {
    client_repo: Arc<dyn ClientRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DeleteUserClientsHandler {
    pub fn new(client_repo: Arc<dyn ClientRepository>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            client_repo,
            event_publisher,
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteUserClientsCommand> for DeleteUserClientsHandler {
    async fn handle(&self, command: DeleteUserClientsCommand) -> AppResult<DeleteUserClientsResult> {
        // 直接调用 handler 时同样拒绝非法命令
        let (tenant_id, user_id) = command.to_ids()?;

        info!(
            tenant_id = %tenant_id,
            user_id = %user_id,
            "Handling DeleteUserClientsCommand"
        );

        let deleted = self
            .client_repo
            .delete_all_by_creator(&tenant_id, &user_id)
            .await?;
        let deleted_count = deleted.len() as u64;

        if !deleted.is_empty() {
            self.event_publisher
                .publish(RegistrationEvent::UserClientsDeleted {
                    tenant_id,
                    user_id: user_id.clone(),
                    client_ids: deleted,
                    timestamp: Utc::now(),
                })
                .await;
        }

        info!(
            tenant_id = %tenant_id,
            user_id = %user_id,
            deleted_count,
            "User clients deleted"
        );

        Ok(DeleteUserClientsResult {
            tenant_id: tenant_id.value(),
            user_id: user_id.0,
            deleted_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Client;
    use crate::infrastructure::events::InMemoryEventBus;
    use crate::infrastructure::persistence::InMemoryClientRepository;
    use registration_common::{ClientId, TenantId, UserId};
    use registration_errors::AppError;
    use std::sync::Mutex;

    /// 记录调用次数的仓储
    struct MockClientRepository {
        delete_calls: Mutex<Vec<(TenantId, UserId)>>,
        fail: bool,
    }

    impl MockClientRepository {
        fn new(fail: bool) -> Self {
            Self {
                delete_calls: Mutex::new(Vec::new()),
                fail,
            }
        }

        fn delete_calls(&self) -> usize {
            self.delete_calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ClientRepository for MockClientRepository {
        async fn save(&self, _client: &Client) -> AppResult<()> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &ClientId, _tenant_id: &TenantId) -> AppResult<Option<Client>> {
            Ok(None)
        }

        async fn list_by_creator(&self, _tenant_id: &TenantId, _user_id: &UserId) -> AppResult<Vec<Client>> {
            Ok(vec![])
        }

        async fn delete_all_by_creator(
            &self,
            tenant_id: &TenantId,
            user_id: &UserId,
        ) -> AppResult<Vec<ClientId>> {
            self.delete_calls
                .lock()
                .unwrap()
                .push((*tenant_id, user_id.clone()));
            if self.fail {
                return Err(AppError::internal("storage unavailable"));
            }
            Ok(vec![ClientId::new()])
        }
    }

    fn user(id: &str) -> UserId {
        UserId(id.to_string())
    }

    #[tokio::test]
    async fn test_deletes_only_the_users_clients() {
        let repo = Arc::new(InMemoryClientRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        for name in ["A", "B", "C"] {
            repo.save(&Client::new(TenantId(5), user("u-1"), name).unwrap())
                .await
                .unwrap();
        }
        let kept = Client::new(TenantId(5), user("u-2"), "D").unwrap();
        repo.save(&kept).await.unwrap();

        let handler = DeleteUserClientsHandler::new(repo.clone(), bus.clone());
        let result = handler
            .handle(DeleteUserClientsCommand::new(5, "u-1"))
            .await
            .unwrap();

        assert_eq!(
            result,
            DeleteUserClientsResult {
                tenant_id: 5,
                user_id: "u-1".to_string(),
                deleted_count: 3,
            }
        );
        assert_eq!(repo.len().await, 1);
        assert!(repo.find_by_id(&kept.id, &TenantId(5)).await.unwrap().is_some());

        let events = bus.get_events().await;
        assert_eq!(events.len(), 1);
        match &events[0] {
            RegistrationEvent::UserClientsDeleted { tenant_id, user_id, client_ids, .. } => {
                assert_eq!(*tenant_id, TenantId(5));
                assert_eq!(user_id.as_str(), "u-1");
                assert_eq!(client_ids.len(), 3);
            }
        }
    }

    #[tokio::test]
    async fn test_no_matching_clients_is_a_noop() {
        let repo = Arc::new(InMemoryClientRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = DeleteUserClientsHandler::new(repo, bus.clone());

        let result = handler
            .handle(DeleteUserClientsCommand::new(42, "unknown"))
            .await
            .unwrap();

        assert_eq!(result.deleted_count, 0);
        assert!(bus.get_events().await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_command_never_reaches_repository() {
        let repo = Arc::new(MockClientRepository::new(false));
        let handler = DeleteUserClientsHandler::new(repo.clone(), Arc::new(InMemoryEventBus::new()));

        let err = handler
            .handle(DeleteUserClientsCommand::new(0, " "))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ConstraintViolation(_)));
        assert_eq!(err.violations().len(), 2);
        assert_eq!(repo.delete_calls(), 0);
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let repo = Arc::new(MockClientRepository::new(true));
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = DeleteUserClientsHandler::new(repo.clone(), bus.clone());

        let err = handler
            .handle(DeleteUserClientsCommand::new(3, "u-3"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(repo.delete_calls(), 1);
        assert_eq!(repo.delete_calls.lock().unwrap()[0], (TenantId(3), user("u-3")));
        assert!(bus.get_events().await.is_empty());
    }
}
