//! HTTP API

pub mod client_routes;
pub mod error;

pub use client_routes::{client_routes, AppState};
pub use error::ApiError;
