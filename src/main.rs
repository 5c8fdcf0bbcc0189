use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use file_gateway::{object_storage::ObjectStorage, server, types::Environment};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // JSON log format for deployed environments, regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
        Environment::Development => {
            fmt().with_env_filter(EnvFilter::from_default_env()).init();
        }
    }

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let object_storage = Arc::new(ObjectStorage::new(
        s3_client,
        environment.bucket_name()?,
        environment.upload_expires_secs(),
        environment.download_expires_secs(),
    ));

    server::start(environment, object_storage).await
}
