//! S3-backed presigned URL issuance
mod error;

use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::{presigning::PresigningConfig, Client as S3Client};
use chrono::Utc;
use uuid::Uuid;

pub use error::{BucketError, BucketResult};

/// Presigned URL with its validity window
#[derive(Debug, Clone)]
pub struct PresignedUrl {
    /// The presigned URL
    pub url: String,
    /// Seconds the URL stays valid after issuance
    pub expires_in_secs: u64,
}

/// Client issuing presigned upload and download URLs for a single bucket
pub struct ObjectStorage {
    s3_client: Arc<S3Client>,
    bucket_name: String,
    upload_url_expiry_secs: u64,
    download_url_expiry_secs: u64,
}

impl ObjectStorage {
    /// Creates a new object storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - Target S3 bucket
    /// * `upload_url_expiry_secs` - Validity window for presigned PUT URLs
    /// * `download_url_expiry_secs` - Validity window for presigned GET URLs
    #[must_use]
    pub const fn new(
        s3_client: Arc<S3Client>,
        bucket_name: String,
        upload_url_expiry_secs: u64,
        download_url_expiry_secs: u64,
    ) -> Self {
        Self {
            s3_client,
            bucket_name,
            upload_url_expiry_secs,
            download_url_expiry_secs,
        }
    }

    /// Builds a unique object key for an uploaded file
    ///
    /// Keys follow `uploads/{unix_seconds}_{uuid_hex}_{filename}`. The
    /// 128-bit random component keeps keys unique even when identical
    /// filenames are issued within the same second.
    #[must_use]
    pub fn build_object_key(filename: &str) -> String {
        let timestamp = Utc::now().timestamp();
        let nonce = Uuid::new_v4().simple();

        format!("uploads/{timestamp}_{nonce}_{filename}")
    }

    /// Generates a presigned URL for uploading an object with PUT
    ///
    /// When `content_type` is provided it becomes part of the signature,
    /// so the eventual PUT must carry an identical `Content-Type` header.
    /// When it is omitted the PUT may carry any or no content type.
    ///
    /// # Errors
    ///
    /// Returns `BucketError::ConfigError` if presigning config creation fails
    /// Returns `BucketError::S3Error` if presigned URL generation fails
    pub async fn presign_put(
        &self,
        object_key: &str,
        content_type: Option<&str>,
    ) -> BucketResult<PresignedUrl> {
        let presigned_config =
            PresigningConfig::expires_in(Duration::from_secs(self.upload_url_expiry_secs))
                .map_err(|e| {
                    BucketError::ConfigError(format!("Failed to create presigning config: {e}"))
                })?;

        let mut put_request = self
            .s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(object_key);

        if let Some(content_type) = content_type {
            put_request = put_request.content_type(content_type);
        }

        let presigned = put_request.presigned(presigned_config).await.map_err(|e| {
            BucketError::S3Error(format!("Failed to generate presigned PUT URL: {e}"))
        })?;

        Ok(PresignedUrl {
            url: presigned.uri().to_string(),
            expires_in_secs: self.upload_url_expiry_secs,
        })
    }

    /// Generates a presigned URL for downloading an object with GET
    ///
    /// No existence check is performed; a URL is signed even for keys that
    /// are not in the bucket, and the eventual GET fails at the storage
    /// layer instead.
    ///
    /// # Errors
    ///
    /// Returns `BucketError::ConfigError` if presigning config creation fails
    /// Returns `BucketError::S3Error` if presigned URL generation fails
    pub async fn presign_get(&self, object_key: &str) -> BucketResult<PresignedUrl> {
        let presigned_config =
            PresigningConfig::expires_in(Duration::from_secs(self.download_url_expiry_secs))
                .map_err(|e| {
                    BucketError::ConfigError(format!("Failed to create presigning config: {e}"))
                })?;

        let presigned = self
            .s3_client
            .get_object()
            .bucket(&self.bucket_name)
            .key(object_key)
            .presigned(presigned_config)
            .await
            .map_err(|e| {
                BucketError::S3Error(format!("Failed to generate presigned GET URL: {e}"))
            })?;

        Ok(PresignedUrl {
            url: presigned.uri().to_string(),
            expires_in_secs: self.download_url_expiry_secs,
        })
    }
}
