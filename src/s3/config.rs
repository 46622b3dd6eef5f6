//! S3配置模块
//!
//! 该模块负责加载 AWS 配置。凭据来自运行环境的默认凭据链，
//! 区域固定为 `us-east-1`。

use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::SdkConfig;
use aws_config::meta::region::RegionProviderChain;

/// 对象存储所在区域
pub const S3_REGION: &str = "us-east-1";

/// 加载共享的 AWS 配置。
///
/// # 返回值
///
/// 区域固定为 [`S3_REGION`] 的 `SdkConfig`。
pub async fn load_sdk_config() -> SdkConfig {
    let region_provider = RegionProviderChain::first_try(Some(Region::new(S3_REGION)));

    aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}
