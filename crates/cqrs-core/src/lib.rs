//! registration-cqrs-core - CQRS 核心库
//!
//! Command trait、Middleware、Pipeline

mod command;
mod middleware;
mod pipeline;

pub use command::*;
pub use middleware::*;
pub use pipeline::*;
