//! Registration Service
//!
//! 客户端注册服务：按租户和创建者批量删除客户端

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
