//! Factory for family clients backed by [`HttpSender`].
//!
//! ```ignore
//! let config = SdkConfig::load()?;
//! let client = ClientBuilder::from_config(&config)?.build_us_street_client()?;
//! ```

use std::time::Duration;

use crate::config::{ConfigError, SdkConfig};
use crate::errors::SdkError;
use crate::sender::{Credentials, HttpSender};
use crate::{
    international_autocomplete, international_street, us_autocomplete_pro, us_enrichment,
    us_extract, us_reverse_geo, us_street, us_zipcode,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds one client per API family from shared credentials and HTTP options.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    credentials: Credentials,
    base_url: Option<String>,
    timeout: Duration,
    licenses: Vec<String>,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    #[must_use]
    pub const fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            licenses: Vec::new(),
            http_client: None,
        }
    }

    /// Builder seeded from the `auth` and `http` configuration sections.
    ///
    /// # Errors
    /// Returns [`ConfigError::Validation`] when the configuration carries no
    /// usable credentials.
    pub fn from_config(config: &SdkConfig) -> Result<Self, ConfigError> {
        let mut builder = Self::new(config.credentials()?)
            .with_timeout(Duration::from_secs(config.http.timeout_secs))
            .with_licenses(config.http.licenses.clone());
        builder.base_url.clone_from(&config.http.base_url);
        Ok(builder)
    }

    /// Send every request to `base_url` instead of the family's default.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Ignored when a client is supplied through [`with_http_client`](Self::with_http_client).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_licenses(mut self, licenses: Vec<String>) -> Self {
        self.licenses = licenses;
        self
    }

    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// The sender a family client would use, pointed at `default_base_url`
    /// unless a base URL override is set.
    ///
    /// # Errors
    /// Returns [`SdkError::Request`] when the HTTP client cannot be built.
    pub fn build_sender(&self, default_base_url: &str) -> Result<HttpSender, SdkError> {
        let client = match &self.http_client {
            Some(client) => client.clone(),
            None => reqwest::Client::builder().timeout(self.timeout).build()?,
        };
        let base_url = self.base_url.as_deref().unwrap_or(default_base_url);

        tracing::debug!(
            base_url,
            timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            licenses = self.licenses.len(),
            "building smarty sender"
        );

        Ok(
            HttpSender::with_client(client, base_url, self.credentials.clone())
                .with_licenses(self.licenses.clone()),
        )
    }

    /// # Errors
    /// Returns [`SdkError::Request`] when the HTTP client cannot be built.
    pub fn build_us_enrichment_client(&self) -> Result<us_enrichment::Client<HttpSender>, SdkError> {
        Ok(us_enrichment::Client::new(
            self.build_sender(us_enrichment::DEFAULT_BASE_URL)?,
        ))
    }

    /// # Errors
    /// Returns [`SdkError::Request`] when the HTTP client cannot be built.
    pub fn build_us_reverse_geo_client(
        &self,
    ) -> Result<us_reverse_geo::Client<HttpSender>, SdkError> {
        Ok(us_reverse_geo::Client::new(
            self.build_sender(us_reverse_geo::DEFAULT_BASE_URL)?,
        ))
    }

    /// # Errors
    /// Returns [`SdkError::Request`] when the HTTP client cannot be built.
    pub fn build_us_zipcode_client(&self) -> Result<us_zipcode::Client<HttpSender>, SdkError> {
        Ok(us_zipcode::Client::new(
            self.build_sender(us_zipcode::DEFAULT_BASE_URL)?,
        ))
    }

    /// # Errors
    /// Returns [`SdkError::Request`] when the HTTP client cannot be built.
    pub fn build_us_street_client(&self) -> Result<us_street::Client<HttpSender>, SdkError> {
        Ok(us_street::Client::new(
            self.build_sender(us_street::DEFAULT_BASE_URL)?,
        ))
    }

    /// # Errors
    /// Returns [`SdkError::Request`] when the HTTP client cannot be built.
    pub fn build_us_autocomplete_pro_client(
        &self,
    ) -> Result<us_autocomplete_pro::Client<HttpSender>, SdkError> {
        Ok(us_autocomplete_pro::Client::new(
            self.build_sender(us_autocomplete_pro::DEFAULT_BASE_URL)?,
        ))
    }

    /// # Errors
    /// Returns [`SdkError::Request`] when the HTTP client cannot be built.
    pub fn build_us_extract_client(&self) -> Result<us_extract::Client<HttpSender>, SdkError> {
        Ok(us_extract::Client::new(
            self.build_sender(us_extract::DEFAULT_BASE_URL)?,
        ))
    }

    /// # Errors
    /// Returns [`SdkError::Request`] when the HTTP client cannot be built.
    pub fn build_international_street_client(
        &self,
    ) -> Result<international_street::Client<HttpSender>, SdkError> {
        Ok(international_street::Client::new(
            self.build_sender(international_street::DEFAULT_BASE_URL)?,
        ))
    }

    /// # Errors
    /// Returns [`SdkError::Request`] when the HTTP client cannot be built.
    pub fn build_international_autocomplete_client(
        &self,
    ) -> Result<international_autocomplete::Client<HttpSender>, SdkError> {
        Ok(international_autocomplete::Client::new(
            self.build_sender(international_autocomplete::DEFAULT_BASE_URL)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ClientBuilder {
        ClientBuilder::new(Credentials::new_static("id", "token"))
    }

    #[test]
    fn test_family_default_base_url() {
        let sender = builder()
            .build_sender(us_street::DEFAULT_BASE_URL)
            .expect("sender");
        assert_eq!(
            sender.base_url(),
            "https://us-street.api.smarty.com/street-address"
        );
    }

    #[test]
    fn test_base_url_override() {
        let sender = builder()
            .with_base_url("http://localhost:9000")
            .build_sender(us_zipcode::DEFAULT_BASE_URL)
            .expect("sender");
        assert_eq!(sender.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_from_config_requires_credentials() {
        let result = ClientBuilder::from_config(&SdkConfig::default());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_from_config_copies_http_section() {
        let mut config = SdkConfig::default();
        config.auth.key = Some("embedded".into());
        config.http.timeout_secs = 3;
        config.http.base_url = Some("http://127.0.0.1:1".into());
        config.http.licenses = vec!["us-core-cloud".into()];

        let builder = ClientBuilder::from_config(&config).expect("builder");
        assert_eq!(builder.timeout, Duration::from_secs(3));
        assert_eq!(builder.licenses, vec!["us-core-cloud"]);
        assert_eq!(builder.base_url.as_deref(), Some("http://127.0.0.1:1"));
        assert_eq!(builder.credentials, Credentials::new_shared("embedded", None));
    }
}
