//! 对象存储抽象模块
//!
//! 该模块定义了处理器依赖的唯一存储操作：写入一个对象。

use crate::error::WriteError;
use async_trait::async_trait;

/// 写入对象时使用的内容类型
pub const TEXT_PLAIN: &str = "text/plain";

/// 单次对象写入请求
///
/// 每次调用新建，写入完成后丢弃。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectWriteRequest {
    pub bucket_name: String,
    pub key: String,
    pub contents: String,
    pub content_type: &'static str,
}

impl ObjectWriteRequest {
    /// 创建内容类型为 `text/plain` 的写入请求。
    pub fn text(
        bucket_name: impl Into<String>,
        key: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            key: key.into(),
            contents: contents.into(),
            content_type: TEXT_PLAIN,
        }
    }
}

/// 对象存储的写入接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// 写入（或覆盖）一个对象。
    ///
    /// # Errors
    ///
    /// 写入未成功完成时返回 `WriteError`，保留失败原因。
    async fn put(&self, request: &ObjectWriteRequest) -> Result<(), WriteError>;
}
