// Storage layer (S3-compatible)

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::types::Acl;

pub mod s3_client;

pub use s3_client::*;

/// One object write, with its canned ACL.
#[derive(Debug, Clone)]
pub struct PutObject<'a> {
    pub bucket: &'a str,
    pub key: &'a str,
    pub body: &'a [u8],
    pub content_type: &'a str,
    pub acl: Acl,
    /// Extra headers, never containing `Content-Type`.
    pub headers: &'a BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("{0}")]
    Client(String),
}

impl StoreError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            StoreError::Status { code, .. } => Some(*code),
            StoreError::Client(_) => None,
        }
    }
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Create or overwrite an object and apply its ACL.
    async fn put_object(&self, request: &PutObject<'_>) -> Result<(), StoreError>;
}
