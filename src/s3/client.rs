//! S3 客户端模块
//!
//! 基于 `aws-sdk-s3` 的 [`ObjectStore`] 实现。存储只缓存客户端配置，
//! 每次写入都会新建一个客户端会话，会话在离开作用域时释放
//! （包括出错和 panic 展开的路径）。

use crate::error::WriteError;
use crate::s3::config::load_sdk_config;
use crate::s3::store::{ObjectStore, ObjectWriteRequest};
use async_trait::async_trait;
use aws_sdk_s3::{Client, Config};
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::put_object::PutObjectError;
use aws_sdk_s3::primitives::ByteStream;
use tracing::{debug, error};

/// S3 对象存储
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    config: Config,
}

impl S3ObjectStore {
    /// 使用运行环境的默认 AWS 配置创建存储。
    pub async fn from_env() -> Self {
        let sdk_config = load_sdk_config().await;
        Self::from_config(Config::from(&sdk_config))
    }

    /// 使用给定的 S3 客户端配置创建存储。
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// 新建一个仅用于单次写入的客户端会话。
    fn acquire(&self) -> S3Session {
        debug!("acquired S3 session");
        S3Session {
            client: Client::from_conf(self.config.clone()),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, request: &ObjectWriteRequest) -> Result<(), WriteError> {
        let session = self.acquire();
        session.put_object(request).await
    }
}

/// 单次写入的 S3 会话，drop 时连同客户端一起释放
struct S3Session {
    client: Client,
}

impl S3Session {
    async fn put_object(&self, request: &ObjectWriteRequest) -> Result<(), WriteError> {
        let result = self
            .client
            .put_object()
            .bucket(&request.bucket_name)
            .key(&request.key)
            .content_type(request.content_type)
            .body(ByteStream::from(request.contents.clone().into_bytes()))
            .send()
            .await;

        match result {
            Ok(_) => {
                debug!(bucket = %request.bucket_name, key = %request.key, "object written");
                Ok(())
            }
            Err(e) => {
                let err = classify_put_error(e);
                error!(
                    bucket = %request.bucket_name,
                    key = %request.key,
                    error = %err,
                    "an error occurred during the PUT operation"
                );
                Err(err)
            }
        }
    }
}

impl Drop for S3Session {
    fn drop(&mut self) {
        debug!("released S3 session");
    }
}

/// 将 SDK 错误转换为 `WriteError`，服务端错误保留错误码。
fn classify_put_error(err: SdkError<PutObjectError>) -> WriteError {
    match &err {
        SdkError::ServiceError(service_err) => {
            let inner = service_err.err();
            WriteError::Service {
                code: inner.code().unwrap_or("Unknown").to_string(),
                message: inner.message().unwrap_or_default().to_string(),
            }
        }
        _ => WriteError::Transport(DisplayErrorContext(&err).to_string()),
    }
}
