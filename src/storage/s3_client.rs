// S3 client backed by rust-s3

use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};
use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::error::S3Error;
use s3::Region;
use tracing::debug;

use super::{ObjectStore, PutObject, StoreError};
use crate::config::StorageConfig;

const ACL_HEADER: &str = "x-amz-acl";

pub struct S3Store {
    access_key_id: String,
    secret_access_key: String,
    storage: StorageConfig,
}

impl std::fmt::Debug for S3Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Store")
            .field("access_key_id", &self.access_key_id)
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}

impl S3Store {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        storage: StorageConfig,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            storage,
        }
    }

    fn region(&self) -> Result<Region, StoreError> {
        match &self.storage.endpoint {
            Some(endpoint) => Ok(Region::Custom {
                region: self.storage.region.clone(),
                endpoint: endpoint.clone(),
            }),
            None => self
                .storage
                .region
                .parse()
                .map_err(|e| StoreError::Client(format!("invalid region: {e}"))),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(&self, request: &PutObject<'_>) -> Result<(), StoreError> {
        let credentials = Credentials::new(
            Some(&self.access_key_id),
            Some(&self.secret_access_key),
            None,
            None,
            None,
        )
        .map_err(|e| StoreError::Client(format!("invalid credentials: {e}")))?;

        let mut bucket = Bucket::new(request.bucket, self.region()?, credentials)
            .map_err(|e| StoreError::Client(format!("invalid bucket: {e}")))?;
        if self.storage.path_style {
            bucket = bucket.with_path_style();
        }

        // add_header panics on malformed input, so check with the HTTP types first.
        for (name, value) in request.headers {
            check_header(name, value)?;
            bucket.add_header(name, value);
        }
        bucket.add_header(ACL_HEADER, request.acl.as_str());

        debug!(
            bucket = request.bucket,
            key = request.key,
            content_type = request.content_type,
            acl = %request.acl,
            size = request.body.len(),
            "PUT object"
        );

        let response = bucket
            .put_object_with_content_type(request.key, request.body, request.content_type)
            .await
            .map_err(map_s3_error)?;

        let code = response.status_code();
        if !(200..300).contains(&code) {
            return Err(StoreError::Status {
                code,
                body: String::from_utf8_lossy(response.bytes()).into_owned(),
            });
        }

        debug!(status = code, "PUT object finished");
        Ok(())
    }
}

fn check_header(name: &str, value: &str) -> Result<(), StoreError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| StoreError::Client(format!("invalid header name {name:?}")))?;
    HeaderValue::from_str(value)
        .map_err(|_| StoreError::Client(format!("invalid value for header {name:?}")))?;
    Ok(())
}

fn map_s3_error(err: S3Error) -> StoreError {
    match err {
        S3Error::HttpFailWithBody(code, body) => StoreError::Status { code, body },
        other => StoreError::Client(other.to_string()),
    }
}
