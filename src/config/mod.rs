//! 时间戳写入器的配置模块。
//!
//! 该模块负责从环境变量加载配置，缺失或为空时回退到默认值。

use std::env;

/// 覆盖目标存储桶名称的环境变量
pub const BUCKET_VAR: &str = "LB_BUCKET";

/// 覆盖时间戳格式的环境变量
pub const DATE_FORMAT_VAR: &str = "LB_DATEFORMAT";

/// 默认存储桶名称
pub const DEFAULT_BUCKET: &str = "hfinch";

/// 默认时间戳格式（12 小时制，不带 AM/PM 标记）
pub const DEFAULT_DATE_FORMAT: &str = "MM/dd/yyyy hh:mm:ss";

/// 单次调用所需的配置。
///
/// 在冷启动时构造一次，然后显式传入处理器。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampConfig {
    pub bucket_name: String,
    pub date_format: String,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            bucket_name: DEFAULT_BUCKET.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl StampConfig {
    /// 从进程环境变量构造配置。
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 使用自定义查找函数构造配置。
    ///
    /// # 参数
    ///
    /// * `lookup` - 根据变量名返回变量值的函数。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            bucket_name: resolve_with(BUCKET_VAR, DEFAULT_BUCKET, &lookup),
            date_format: resolve_with(DATE_FORMAT_VAR, DEFAULT_DATE_FORMAT, &lookup),
        }
    }
}

/// 读取环境变量，若不存在或为空则返回默认值。
///
/// # 参数
///
/// * `variable` - 环境变量名称。
/// * `default_value` - 默认值。
///
/// # 返回值
///
/// 环境变量的原始值（不做修剪），或默认值。
pub fn resolve(variable: &str, default_value: &str) -> String {
    resolve_with(variable, default_value, |name| env::var(name).ok())
}

/// `resolve` 的通用版本，变量值由 `lookup` 提供。
///
/// 变量名为空白、值缺失或值仅包含空白时返回默认值。
pub fn resolve_with<F>(variable: &str, default_value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if variable.trim().is_empty() {
        return default_value.to_string();
    }

    match lookup(variable) {
        Some(value) if !value.trim().is_empty() => value,
        _ => default_value.to_string(),
    }
}
