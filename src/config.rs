use url::Url;

use crate::error::ConfigError;
use crate::models::Credentials;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for one scan, fixed at startup.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub collection_path: String,
    pub base_url: String,
    pub credentials: Option<Credentials>,
    pub timeout_secs: u64,
}

impl ScanConfig {
    pub fn new(
        collection_path: impl Into<String>,
        base_url: &str,
        identifier: Option<String>,
        secret: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, ConfigError> {
        let base_url = Self::validate_base_url(base_url)?;

        let credentials = match (identifier, secret) {
            (Some(identifier), Some(secret)) => Some(Credentials::new(identifier, secret)),
            (Some(_), None) => return Err(ConfigError::MissingSecret),
            (None, _) => None,
        };

        Ok(Self {
            collection_path: collection_path.into(),
            base_url,
            credentials,
            timeout_secs: timeout_secs.max(1),
        })
    }

    fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        let parsed = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if parsed.host_str().is_none() {
            return Err(invalid("missing host"));
        }

        Ok(raw.trim_end_matches('/').to_string())
    }
}
