//! 事件基础设施

pub mod event_publisher;

pub use event_publisher::*;
