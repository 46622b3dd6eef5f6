//! S3模块
//!
//! 该模块负责处理与对象存储的交互，包括客户端配置、会话管理和对象写入。

// 声明子模块
pub mod client;
pub mod config;
pub mod store;

// 重新导出常用的类型
pub use client::S3ObjectStore;
pub use store::{ObjectStore, ObjectWriteRequest, TEXT_PLAIN};
