use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_aux::prelude::deserialize_vec_from_string_or_vec;

use crate::sender::Credentials;

/// SDK configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. smarty.yaml file (if exists)
/// 3. Environment variables with SMARTY_ prefix (always wins)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SdkConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Credentials. Either `auth_id` + `auth_token` (server-side secret pair) or
/// `key` (embedded key, optionally with a `referer`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    pub auth_id: Option<String>,
    pub auth_token: Option<String>,
    pub key: Option<String>,
    pub referer: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Overrides the family's default base URL.
    pub base_url: Option<String>,

    /// Licenses sent with every request.
    /// Accepts either an array or comma-separated string.
    /// Example: `["us-core-cloud"]` or `"us-core-cloud,us-rooftop-geocoding-cloud"`
    #[serde(default, deserialize_with = "deserialize_licenses")]
    pub licenses: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Deserialize licenses from comma-separated string or array, filtering empty values.
fn deserialize_licenses<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let licenses: Vec<String> = deserialize_vec_from_string_or_vec(deserializer)?;
    Ok(licenses
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

// serde takes defaults as function pointers
#[allow(clippy::missing_const_for_fn)]
fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            base_url: None,
            licenses: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl SdkConfig {
    /// Load configuration from all sources.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("smarty.yaml")
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("SMARTY_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.credentials()?;

        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "http.timeout_secs cannot be 0".into(),
            ));
        }

        if let Some(url) = &self.http.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "http.base_url '{url}' must start with http:// or https://"
                )));
            }
        }

        Ok(())
    }

    /// Credentials described by the `auth` section. A complete id/token pair
    /// takes precedence over a key.
    ///
    /// # Errors
    /// Returns a validation error when no credentials are configured or only
    /// half of the id/token pair is set.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let auth = &self.auth;
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_string);

        match (present(&auth.auth_id), present(&auth.auth_token)) {
            (Some(id), Some(token)) => Ok(Credentials::new_static(id, token)),
            (Some(_), None) => Err(ConfigError::Validation(
                "auth.auth_token is required when auth.auth_id is set".into(),
            )),
            (None, Some(_)) => Err(ConfigError::Validation(
                "auth.auth_id is required when auth.auth_token is set".into(),
            )),
            (None, None) => present(&auth.key)
                .map(|key| Credentials::new_shared(key, present(&auth.referer)))
                .ok_or_else(|| {
                    ConfigError::Validation(
                        "credentials are required. Set SMARTY_AUTH__AUTH_ID and SMARTY_AUTH__AUTH_TOKEN, or SMARTY_AUTH__KEY.".into(),
                    )
                }),
        }
    }
}
