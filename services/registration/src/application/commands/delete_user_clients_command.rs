//! 删除用户客户端命令
//!
//! 删除某租户内由指定用户创建的全部客户端，用于用户注销或账号清理

use registration_common::{TenantId, UserId};
use registration_cqrs_core::Command;
use registration_errors::ValidationErrors;
use serde::{Deserialize, Serialize};

pub const TENANT_ID_FIELD: &str = "tenant_id";
pub const USER_ID_FIELD: &str = "user_id";

pub const TENANT_ID_MESSAGE: &str = "tenant id must be greater than or equal to 1";
pub const USER_ID_MESSAGE: &str = "user id must not be blank";

/// 删除用户客户端命令
///
/// 缺失的 `tenant_id` 反序列化为 0，缺失或为 null 的 `user_id` 反序列化为 None，
/// 两者都会在 `validate` 中被拒绝。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserClientsCommand {
    #[serde(default)]
    tenant_id: i64,
    #[serde(default)]
    user_id: Option<String>,
}

impl DeleteUserClientsCommand {
    /// 直接构造，不做校验
    pub fn new(tenant_id: i64, user_id: impl Into<String>) -> Self {
        Self {
            tenant_id,
            user_id: Some(user_id.into()),
        }
    }

    /// 构造并校验
    pub fn try_new(tenant_id: i64, user_id: impl Into<String>) -> Result<Self, ValidationErrors> {
        let command = Self::new(tenant_id, user_id);
        command.validate()?;
        Ok(command)
    }

    pub fn builder() -> DeleteUserClientsCommandBuilder {
        DeleteUserClientsCommandBuilder::default()
    }

    pub fn tenant_id(&self) -> i64 {
        self.tenant_id
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// 校验并转换为领域 ID
    pub fn to_ids(&self) -> Result<(TenantId, UserId), ValidationErrors> {
        let tenant_id = TenantId::new(self.tenant_id);
        let user_id = self.user_id.as_deref().and_then(UserId::new);

        let mut errors = ValidationErrors::new();
        errors.check(tenant_id.is_some(), TENANT_ID_FIELD, TENANT_ID_MESSAGE);
        errors.check(user_id.is_some(), USER_ID_FIELD, USER_ID_MESSAGE);

        match (tenant_id, user_id) {
            (Some(tenant_id), Some(user_id)) => Ok((tenant_id, user_id)),
            _ => Err(errors),
        }
    }
}

impl Command for DeleteUserClientsCommand {
    const NAME: &'static str = "DeleteUserClientsCommand";

    type Result = DeleteUserClientsResult;

    fn validate(&self) -> Result<(), ValidationErrors> {
        self.to_ids().map(|_| ())
    }
}

/// 删除用户客户端命令构建器
#[derive(Debug, Default)]
pub struct DeleteUserClientsCommandBuilder {
    tenant_id: i64,
    user_id: Option<String>,
}

impl DeleteUserClientsCommandBuilder {
    pub fn tenant_id(mut self, tenant_id: i64) -> Self {
        self.tenant_id = tenant_id;
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn build(self) -> DeleteUserClientsCommand {
        DeleteUserClientsCommand {
            tenant_id: self.tenant_id,
            user_id: self.user_id,
        }
    }

    /// 构建并校验
    pub fn try_build(self) -> Result<DeleteUserClientsCommand, ValidationErrors> {
        let command = self.build();
        command.validate()?;
        Ok(command)
    }
}

/// 删除结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserClientsResult {
    pub tenant_id: i64,
    pub user_id: String,
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation_fields(errors: &ValidationErrors) -> Vec<&str> {
        errors.violations().iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn test_valid_values_are_kept() {
        for tenant_id in [1, 2, 5, 1_000, i64::MAX] {
            for user_id in ["u-1", "a", " padded ", "6f1c1c3e-2b1f-4c55-9f43-1a3f2b7c9d10"] {
                let command = DeleteUserClientsCommand::try_new(tenant_id, user_id).unwrap();
                assert_eq!(command.tenant_id(), tenant_id);
                assert_eq!(command.user_id(), Some(user_id));
            }
        }
    }

    #[test]
    fn test_tenant_id_below_one_is_rejected() {
        for tenant_id in [0, -1, -42, i64::MIN] {
            let errors = DeleteUserClientsCommand::new(tenant_id, "u-1")
                .validate()
                .unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.violations()[0].field, TENANT_ID_FIELD);
            assert_eq!(
                errors.violations()[0].message,
                "tenant id must be greater than or equal to 1"
            );
        }
    }

    #[test]
    fn test_blank_user_id_is_rejected() {
        let blank = ["", " ", "   ", "\t", "\n \r", "\u{1}\u{1f}"];
        let mut commands: Vec<DeleteUserClientsCommand> = blank
            .iter()
            .map(|user_id| DeleteUserClientsCommand::new(5, *user_id))
            .collect();
        commands.push(DeleteUserClientsCommand::builder().tenant_id(5).build());

        for command in commands {
            let errors = command.validate().unwrap_err();
            assert_eq!(violation_fields(&errors), vec![USER_ID_FIELD]);
            assert_eq!(errors.violations()[0].message, "user id must not be blank");
        }
    }

    #[test]
    fn test_unicode_space_user_id_is_accepted() {
        let command = DeleteUserClientsCommand::try_new(5, "\u{a0}\u{3000}").unwrap();
        assert_eq!(command.user_id(), Some("\u{a0}\u{3000}"));
    }

    #[test]
    fn test_both_violations_are_reported() {
        let errors = DeleteUserClientsCommand::default().validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(violation_fields(&errors), vec![TENANT_ID_FIELD, USER_ID_FIELD]);

        let errors = DeleteUserClientsCommand::builder()
            .tenant_id(-3)
            .user_id("  ")
            .try_build()
            .unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_to_ids() {
        let (tenant_id, user_id) = DeleteUserClientsCommand::new(5, "u-1").to_ids().unwrap();
        assert_eq!(tenant_id, TenantId(5));
        assert_eq!(user_id.as_str(), "u-1");
    }

    #[test]
    fn test_builder_matches_constructor() {
        let built = DeleteUserClientsCommand::builder()
            .tenant_id(7)
            .user_id("u-7")
            .try_build()
            .unwrap();
        assert_eq!(built, DeleteUserClientsCommand::new(7, "u-7"));
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let command: DeleteUserClientsCommand =
            serde_json::from_str(r#"{"tenant_id": 5, "user_id": "u-1"}"#).unwrap();
        assert_eq!(command.tenant_id(), 5);
        assert_eq!(command.user_id(), Some("u-1"));
        assert!(command.validate().is_ok());
    }

    #[test]
    fn test_deserialize_missing_fields_fails_validation() {
        let command: DeleteUserClientsCommand = serde_json::from_str("{}").unwrap();
        assert_eq!(command.tenant_id(), 0);
        assert_eq!(command.user_id(), None);
        assert_eq!(command.validate().unwrap_err().len(), 2);

        let command: DeleteUserClientsCommand =
            serde_json::from_str(r#"{"tenant_id": 3, "user_id": null}"#).unwrap();
        assert_eq!(
            violation_fields(&command.validate().unwrap_err()),
            vec![USER_ID_FIELD]
        );
    }

    #[test]
    fn test_deserialize_zero_tenant_fails_validation() {
        let command: DeleteUserClientsCommand =
            serde_json::from_str(r#"{"tenant_id": 0, "user_id": "u-1"}"#).unwrap();
        let errors = command.validate().unwrap_err();
        assert_eq!(violation_fields(&errors), vec![TENANT_ID_FIELD]);
    }

    #[test]
    fn test_deserialize_rejects_wrong_types() {
        assert!(
            serde_json::from_str::<DeleteUserClientsCommand>(r#"{"tenant_id": "five", "user_id": "u-1"}"#)
                .is_err()
        );
    }

    #[test]
    fn test_serialize_uses_wire_keys() {
        let json = serde_json::to_value(DeleteUserClientsCommand::new(5, "u-1")).unwrap();
        assert_eq!(json, serde_json::json!({ "tenant_id": 5, "user_id": "u-1" }));
    }
}
