// bucket-drop - stores a single local file in an S3 bucket

pub mod app;
pub mod cli;
pub mod config;
pub mod content_type;
pub mod resolver;
pub mod storage;
pub mod types;
pub mod uploader;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use types::{Acl, AppError, AppResult, UploadOutcome, UploadRequest};
