//! 仓储接口

pub mod client_repository;

pub use client_repository::*;
