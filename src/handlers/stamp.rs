use crate::config::StampConfig;
use crate::error::StampError;
use crate::s3::{ObjectStore, ObjectWriteRequest};
use crate::utils::date_format::format_utc;
use crate::utils::key::new_object_key;
use chrono::{DateTime, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span};

/// 时间戳写入器
///
/// 每次调用将当前 UTC 时间按配置的格式写入存储桶中的一个新对象，
/// 对象键为新生成的 UUID。
pub struct StampWriter<S> {
    config: StampConfig,
    store: S,
}

impl<S> StampWriter<S> {
    pub fn new(config: StampConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ObjectStore> StampWriter<S> {
    /// 写入当前时间戳。
    ///
    /// # 返回值
    ///
    /// 新对象的键。
    ///
    /// # Errors
    ///
    /// 格式字符串无效时返回 `StampError::InvalidFormat`（不会尝试写入），
    /// 写入失败时返回 `StampError::OperationFailed`。
    pub async fn invoke(&self) -> Result<String, StampError> {
        self.write_stamp(Utc::now(), new_object_key).await
    }

    /// 使用给定的时间点和键生成函数写入时间戳。
    ///
    /// 键在时间戳格式化成功之后才生成。
    pub async fn write_stamp<K>(
        &self,
        now: DateTime<Utc>,
        make_key: K,
    ) -> Result<String, StampError>
    where
        K: FnOnce() -> String,
    {
        let contents = format_utc(&self.config.date_format, &now).map_err(|e| {
            error!(date_format = %self.config.date_format, error = %e, "invalid date format");
            StampError::from(e)
        })?;
        let key = make_key();

        let request = ObjectWriteRequest::text(&self.config.bucket_name, key, contents);

        match self.store.put(&request).await {
            Ok(()) => {
                info!(bucket = %request.bucket_name, key = %request.key, "date-stamped object created");
                Ok(request.key)
            }
            Err(source) => {
                error!(
                    bucket = %request.bucket_name,
                    key = %request.key,
                    error = %source,
                    "unable to create date-stamped object"
                );
                Err(StampError::OperationFailed {
                    key: request.key,
                    bucket: request.bucket_name,
                    source,
                })
            }
        }
    }
}

/// Lambda 入口处理函数。
///
/// 事件负载被忽略，调用上下文仅用于日志。
pub async fn function_handler<S: ObjectStore>(
    event: LambdaEvent<Value>,
    writer: &StampWriter<S>,
) -> Result<String, Error> {
    let span = info_span!("invocation", request_id = %event.context.request_id);
    let key = writer.invoke().instrument(span).await?;
    Ok(key)
}
