//! 错误类型模块
//!
//! - `WriteError`：对象写入失败的原因
//! - `FormatError`：时间格式字符串无效
//! - `StampError`：调用层对外暴露的错误

use thiserror::Error;

/// 对象写入失败的原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// 对象存储服务返回的错误（权限不足、存储桶不存在等）
    #[error("object store rejected the write ({code}): {message}")]
    Service { code: String, message: String },

    /// 网络、超时或请求构造失败
    #[error("object store request failed: {0}")]
    Transport(String),
}

/// 时间格式字符串解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unterminated quoted literal starting at position {0}")]
    UnterminatedQuote(usize),

    #[error("too many fraction specifiers at position {0} (at most 7)")]
    FractionTooLong(usize),

    #[error("escape character at end of pattern")]
    TrailingEscape,

    #[error("invalid '%' specifier at position {0}")]
    InvalidPercent(usize),

    #[error("unknown standard format specifier '{0}'")]
    UnknownStandardFormat(char),
}

/// 处理器对外暴露的错误
#[derive(Error, Debug)]
pub enum StampError {
    /// 对象写入失败，携带尝试写入的键和存储桶
    #[error("Unable to create an object within the specified location [{bucket}]")]
    OperationFailed {
        key: String,
        bucket: String,
        #[source]
        source: WriteError,
    },

    #[error("invalid date format: {0}")]
    InvalidFormat(#[from] FormatError),
}

impl StampError {
    /// 返回结构化的上下文信息（键、存储桶）。
    ///
    /// # 返回值
    ///
    /// `OperationFailed` 返回 `[("key", ..), ("bucket", ..)]`，其他情况为空。
    pub fn context(&self) -> Vec<(&'static str, &str)> {
        match self {
            StampError::OperationFailed { key, bucket, .. } => {
                vec![("key", key.as_str()), ("bucket", bucket.as_str())]
            }
            StampError::InvalidFormat(_) => Vec::new(),
        }
    }
}
