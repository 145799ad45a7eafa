//! 领域层

pub mod client;
pub mod repositories;

pub use client::*;
