//! Uploader
//!
//! Injects the guessed content type, performs the single store call and
//! classifies the failure by HTTP status. Nothing is retried here; whatever
//! backoff the storage client does on its own is opaque to this layer.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::content_type::guess_mime_type;
use crate::storage::{ObjectStore, PutObject, StoreError};
use crate::types::{AppError, AppResult, UploadOutcome, UploadRequest};

/// Upload `body` as described by `request` and report the outcome.
pub async fn upload<S>(store: &S, request: &UploadRequest, body: &[u8]) -> UploadOutcome
where
    S: ObjectStore + ?Sized,
{
    let result = put(store, request, body).await;
    UploadOutcome::from_result(result, &request.bucket_name, &request.object_key)
}

async fn put<S>(store: &S, request: &UploadRequest, body: &[u8]) -> AppResult<()>
where
    S: ObjectStore + ?Sized,
{
    let content_type = guess_mime_type(&request.local_file_path);
    let headers = without_content_type(&request.headers);

    info!(
        bucket = %request.bucket_name,
        key = %request.object_key,
        content_type = %content_type,
        "uploading"
    );

    let object = PutObject {
        bucket: &request.bucket_name,
        key: &request.object_key,
        body,
        content_type: &content_type,
        acl: request.acl,
        headers: &headers,
    };

    store.put_object(&object).await.map_err(classify)?;

    info!(bucket = %request.bucket_name, key = %request.object_key, "upload finished");
    Ok(())
}

/// Caller headers minus any spelling of `Content-Type`.
fn without_content_type(headers: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    headers
        .iter()
        .filter(|(name, _)| !name.eq_ignore_ascii_case("content-type"))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

fn classify(err: StoreError) -> AppError {
    match err.status_code() {
        Some(403) => {
            warn!("store rejected the credentials");
            AppError::AuthorizationFailure
        }
        Some(404) => {
            warn!("bucket not found");
            AppError::BucketNotFound
        }
        _ => {
            warn!(error = %err, "upload failed");
            AppError::Unclassified(err.to_string())
        }
    }
}
