//! 工具函数模块
//!
//! 此模块包含了项目中使用的各种工具函数：
//! - 日期时间模式格式化
//! - 对象键生成

pub mod date_format;
pub mod key;
