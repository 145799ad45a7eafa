//! Application layer

pub mod commands;
pub mod handlers;
