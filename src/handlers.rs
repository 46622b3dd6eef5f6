//! 调用处理模块
//!
//! 此模块包含了处理平台调用的处理器：
//! - 时间戳写入处理器

pub mod stamp;

// 重新导出主要的公共接口
pub use stamp::{StampWriter, function_handler};
