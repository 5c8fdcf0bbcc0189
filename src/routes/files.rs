use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{object_storage::ObjectStorage, types::AppError};

/// Fallback object name when the upload request does not carry one
const DEFAULT_FILENAME: &str = "file";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// Original filename, embedded in the generated object key
    pub filename: Option<String>,
    /// MIME type the client will send with the PUT, e.g. `text/plain`
    pub content_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Generated S3 key of the object
    pub object_key: String,
    /// Presigned URL to upload the object with PUT
    pub upload_url: String,
    /// Seconds the presigned URL stays valid
    pub expires_in_seconds: u64,
    /// HTTP method the client must use against the presigned URL
    pub method: String,
    /// Headers the client must send verbatim for the signature to verify
    pub required_headers: HashMap<String, String>,
}

/// Issues a presigned URL for uploading a new object
///
/// Builds a unique object key from the requested filename, then signs a
/// PUT URL for it. When the request names a content type it is included
/// in the signed parameters and echoed back in `required_headers`: the
/// upload must then send an identical `Content-Type` header or the
/// signature verification fails at the storage layer.
///
/// # Errors
///
/// Returns a 400 for a malformed JSON body and a 500 when presigning fails
#[instrument(skip(object_storage, body))]
pub async fn create_upload_url(
    Extension(object_storage): Extension<Arc<ObjectStorage>>,
    body: Bytes,
) -> Result<Json<UploadResponse>, AppError> {
    let request = parse_upload_request(&body)?;

    let filename = request.filename.as_deref().unwrap_or(DEFAULT_FILENAME);
    let object_key = ObjectStorage::build_object_key(filename);

    let presigned = object_storage
        .presign_put(&object_key, request.content_type.as_deref())
        .await?;

    tracing::info!("Issued upload URL for object: {object_key}");

    let required_headers = request.content_type.map_or_else(HashMap::new, |ct| {
        HashMap::from([("content-type".to_string(), ct)])
    });

    Ok(Json(UploadResponse {
        object_key,
        upload_url: presigned.url,
        expires_in_seconds: presigned.expires_in_secs,
        method: "PUT".to_string(),
        required_headers,
    }))
}

/// An absent or empty request body is treated as `{}`
fn parse_upload_request(body: &Bytes) -> Result<UploadRequest, AppError> {
    if body.is_empty() {
        return Ok(UploadRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Malformed upload request body: {e}");
        AppError::bad_request("Invalid JSON body")
    })
}

/// Redirects to a presigned URL for downloading an existing object
///
/// The path remainder after `/files/` is the object key (percent-decoded
/// by the `Path` extractor). No existence check is performed: a URL is
/// signed even for keys not present in the bucket, and the eventual GET
/// fails at the storage layer instead.
///
/// # Errors
///
/// Returns a 500 when presigning fails
#[instrument(skip(object_storage))]
pub async fn redirect_to_download_url(
    Extension(object_storage): Extension<Arc<ObjectStorage>>,
    Path(object_key): Path<String>,
) -> Result<Response, AppError> {
    if object_key.is_empty() {
        return Err(AppError::bad_request("objectKey is required"));
    }

    let presigned = object_storage.presign_get(&object_key).await?;

    tracing::info!("Issued download redirect for object: {object_key}");

    Ok((StatusCode::FOUND, [(header::LOCATION, presigned.url)]).into_response())
}

/// `GET /files/` carries no object key to sign
pub async fn missing_object_key() -> AppError {
    AppError::bad_request("objectKey is required")
}
