// Upload flow shared by the binary and tests

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::storage::ObjectStore;
use crate::types::{AppError, AppResult, UploadOutcome, UploadRequest};
use crate::uploader;

/// Check the local file, read it and hand it to the uploader.
///
/// Local failures come back as `Err` before the store is touched. Remote
/// failures are folded into the returned [`UploadOutcome`].
pub async fn run<S>(request: &UploadRequest, store: &S) -> AppResult<UploadOutcome>
where
    S: ObjectStore + ?Sized,
{
    let path = Path::new(&request.local_file_path);
    if !is_regular_file(path).await {
        debug!(path = %path.display(), "file does not exist");
        return Err(AppError::FileNotFound(request.local_file_path.clone()));
    }

    let body = fs::read(path).await?;
    debug!(path = %path.display(), size = body.len(), "read local file");

    Ok(uploader::upload(store, request, &body).await)
}

async fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}
