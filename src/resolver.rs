//! Option resolution
//!
//! Turns parsed command-line flags plus the startup [`Config`] into an
//! [`UploadRequest`]. Flags win over environment defaults; nothing here
//! reads the process environment.

use std::collections::BTreeMap;

use tracing::debug;
use validator::Validate;

use crate::cli::Cli;
use crate::config::{Config, EnvDefaults, StorageConfig};
use crate::types::{AppError, AppResult, UploadRequest};

/// Build an upload request, or report every missing option by flag name.
pub fn resolve(cli: &Cli, env: &EnvDefaults) -> AppResult<UploadRequest> {
    let request = UploadRequest {
        access_key_id: pick(&cli.access_key_id, &env.access_key_id),
        secret_access_key: pick(&cli.secret_access_key, &env.secret_access_key),
        local_file_path: cli.filename.clone().unwrap_or_default(),
        bucket_name: cli.bucket_name.clone().unwrap_or_default(),
        object_key: cli.key_name.clone().unwrap_or_default(),
        acl: cli.acl,
        headers: parse_headers(&cli.headers)?,
    };

    if let Err(errors) = request.validate() {
        let mut missing: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| flag_for_field(&**field).to_string())
            .collect();
        missing.sort();
        debug!(?missing, "insufficient options");
        return Err(AppError::MissingOptions(missing));
    }

    Ok(request)
}

/// Storage location: flags first, then the startup configuration.
pub fn resolve_storage(cli: &Cli, config: &Config) -> StorageConfig {
    StorageConfig {
        region: cli
            .region
            .clone()
            .filter(|region| !region.is_empty())
            .unwrap_or_else(|| config.storage.region.clone()),
        endpoint: cli
            .endpoint
            .clone()
            .filter(|endpoint| !endpoint.is_empty())
            .or_else(|| config.storage.endpoint.clone()),
        path_style: cli.path_style || config.storage.path_style,
    }
}

fn pick(flag: &Option<String>, fallback: &Option<String>) -> String {
    flag.as_ref()
        .filter(|value| !value.is_empty())
        .or(fallback.as_ref())
        .cloned()
        .unwrap_or_default()
}

/// Parse `NAME:VALUE` pairs. Later duplicates replace earlier ones.
pub fn parse_headers(raw: &[String]) -> AppResult<BTreeMap<String, String>> {
    let mut headers = BTreeMap::new();
    for entry in raw {
        let (name, value) = entry
            .split_once(':')
            .ok_or_else(|| AppError::InvalidHeader(entry.clone()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidHeader(entry.clone()));
        }
        headers.insert(name.to_string(), value.trim().to_string());
    }
    Ok(headers)
}

fn flag_for_field(field: &str) -> &'static str {
    match field {
        "access_key_id" => "--aws_access_key_id",
        "secret_access_key" => "--aws_secret_access_key",
        "local_file_path" => "--filename",
        "bucket_name" => "--bucketname",
        "object_key" => "--keyname",
        _ => "unknown option",
    }
}
