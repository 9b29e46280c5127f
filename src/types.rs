// Type definitions and enums

use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use validator::Validate;

/// Canned access-control policy applied to the uploaded object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Acl {
    #[default]
    Private,
    PublicRead,
    PublicReadWrite,
    AuthenticatedRead,
}

impl Acl {
    /// Wire value for the `x-amz-acl` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Acl::Private => "private",
            Acl::PublicRead => "public-read",
            Acl::PublicReadWrite => "public-read-write",
            Acl::AuthenticatedRead => "authenticated-read",
        }
    }
}

impl fmt::Display for Acl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to attempt one upload.
#[derive(Clone, Validate)]
pub struct UploadRequest {
    #[validate(length(min = 1))]
    pub access_key_id: String,

    #[validate(length(min = 1))]
    pub secret_access_key: String,

    #[validate(length(min = 1))]
    pub local_file_path: String,

    #[validate(length(min = 1))]
    pub bucket_name: String,

    #[validate(length(min = 1))]
    pub object_key: String,

    pub acl: Acl,

    /// Extra request headers. `Content-Type` is always replaced by the guessed type.
    pub headers: BTreeMap<String, String>,
}

impl fmt::Debug for UploadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadRequest")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("local_file_path", &self.local_file_path)
            .field("bucket_name", &self.bucket_name)
            .field("object_key", &self.object_key)
            .field("acl", &self.acl)
            .field("headers", &self.headers)
            .finish()
    }
}

/// Result of the remote part of an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success { bucket: String, key: String },
    AuthError,
    BucketNotFoundError,
    GenericFailure(String),
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success { .. })
    }

    /// One-line message shown to the user.
    pub fn message(&self) -> String {
        match self {
            UploadOutcome::Success { bucket, key } => {
                format!("Upload successful! Your file is now safe in {bucket}/{key}")
            }
            UploadOutcome::AuthError => AppError::AuthorizationFailure.to_string(),
            UploadOutcome::BucketNotFoundError => AppError::BucketNotFound.to_string(),
            UploadOutcome::GenericFailure(detail) => {
                AppError::Unclassified(detail.clone()).to_string()
            }
        }
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Classify a finished upload attempt.
    pub fn from_result(result: AppResult<()>, bucket: &str, key: &str) -> Self {
        match result {
            Ok(()) => UploadOutcome::Success {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            Err(AppError::AuthorizationFailure) => UploadOutcome::AuthError,
            Err(AppError::BucketNotFound) => UploadOutcome::BucketNotFoundError,
            Err(other) => UploadOutcome::GenericFailure(other.detail()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error: Missing required options: {}", .0.join(", "))]
    MissingOptions(Vec<String>),

    #[error("Error: The file does not exist!")]
    FileNotFound(String),

    #[error("Error: Invalid header {0:?}, expected NAME:VALUE")]
    InvalidHeader(String),

    #[error("Error: Could not read the file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error: Please check your credentials!")]
    AuthorizationFailure,

    #[error("Error: Your bucket does not exist (yet)")]
    BucketNotFound,

    #[error("Error: Upload failed: {0}")]
    Unclassified(String),
}

impl AppError {
    /// Missing options exit like a usage error, everything else with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::MissingOptions(_) => 2,
            _ => 1,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Unclassified(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
