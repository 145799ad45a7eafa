//! 持久化实现

pub mod in_memory_client_repository;

pub use in_memory_client_repository::*;
