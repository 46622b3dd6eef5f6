use lambda_runtime::{Error, run, service_fn};
use stamp_writer::{S3ObjectStore, StampConfig, StampWriter, function_handler, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 加载 .env 文件（本地运行时）
    dotenvy::dotenv().ok();

    init_tracing();

    // 冷启动时构造配置和 S3 存储
    let config = StampConfig::from_env();
    tracing::info!(
        bucket = %config.bucket_name,
        date_format = %config.date_format,
        "stamp writer configured"
    );
    let store = S3ObjectStore::from_env().await;
    let writer = StampWriter::new(config, store);

    run(service_fn(|event| function_handler(event, &writer))).await
}
