use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub env: EnvDefaults,
    pub storage: StorageConfig,
}

/// Credential defaults read from the environment once at startup.
#[derive(Clone, Default)]
pub struct EnvDefaults {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl std::fmt::Debug for EnvDefaults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvDefaults")
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub region: String,
    pub endpoint: Option<String>,
    pub path_style: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            endpoint: None,
            path_style: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| var(name).filter(|value| !value.is_empty());

        Ok(Self {
            env: EnvDefaults {
                access_key_id: non_empty("AWS_ACCESS_KEY_ID"),
                secret_access_key: non_empty("AWS_SECRET_ACCESS_KEY"),
            },
            storage: StorageConfig {
                region: non_empty("AWS_REGION")
                    .or_else(|| non_empty("AWS_DEFAULT_REGION"))
                    .unwrap_or_else(|| "us-east-1".to_string()),
                endpoint: non_empty("S3_ENDPOINT"),
                path_style: non_empty("S3_PATH_STYLE")
                    .unwrap_or_else(|| "false".to_string())
                    .parse()
                    .context("S3_PATH_STYLE must be true or false")?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = Config::from_vars(lookup(&[])).unwrap();
        assert!(config.env.access_key_id.is_none());
        assert!(config.env.secret_access_key.is_none());
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_reads_credentials_and_storage() {
        let config = Config::from_vars(lookup(&[
            ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
            ("S3_ENDPOINT", "http://localhost:9000"),
            ("S3_PATH_STYLE", "true"),
        ]))
        .unwrap();

        assert_eq!(config.env.access_key_id.as_deref(), Some("AKIDEXAMPLE"));
        assert_eq!(config.env.secret_access_key.as_deref(), Some("secret"));
        assert_eq!(config.storage.region, "eu-west-1");
        assert_eq!(config.storage.endpoint.as_deref(), Some("http://localhost:9000"));
        assert!(config.storage.path_style);
    }

    #[test]
    fn test_aws_region_wins_over_default_region() {
        let config = Config::from_vars(lookup(&[
            ("AWS_REGION", "ap-south-1"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ]))
        .unwrap();
        assert_eq!(config.storage.region, "ap-south-1");
    }

    #[test]
    fn test_empty_values_are_absent() {
        let config = Config::from_vars(lookup(&[("AWS_ACCESS_KEY_ID", "")])).unwrap();
        assert!(config.env.access_key_id.is_none());
    }

    #[test]
    fn test_invalid_path_style_rejected() {
        assert!(Config::from_vars(lookup(&[("S3_PATH_STYLE", "maybe")])).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::from_vars(lookup(&[("AWS_SECRET_ACCESS_KEY", "hunter2")])).unwrap();
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
