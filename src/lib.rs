//! 日期时间戳写入器库
//!
//! 这是一个运行在 AWS Lambda 上的处理器，主要功能包括：
//! - 从环境变量读取存储桶名称和时间格式（缺失时使用默认值）
//! - 按自定义模式格式化当前 UTC 时间
//! - 以新生成的 UUID 为键，将时间戳写入 S3 对象
//! - 写入失败时返回携带键和存储桶的错误

pub mod config;
pub mod error;
pub mod handlers;
pub mod s3;
pub mod utils;

pub use config::StampConfig;
pub use error::{FormatError, StampError, WriteError};
pub use handlers::{StampWriter, function_handler};
pub use s3::{ObjectStore, ObjectWriteRequest, S3ObjectStore};

use tracing_subscriber::EnvFilter;

/// 初始化日志订阅器
///
/// 输出 JSON 格式日志，日志级别由 `RUST_LOG` 控制（默认 `info`）。
/// CloudWatch 会为每行日志添加时间，因此不输出时间字段。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}
