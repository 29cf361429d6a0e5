//! HTTP implementation of [`Sender`].
//!
//! One request per call. Retries, batching and rate limiting are left to the
//! `reqwest::Client` passed in through [`HttpSender::with_client`] or to the
//! caller.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, REFERER};
use serde_json::Value;

use super::{Credentials, Sender};
use crate::errors::SdkError;
use crate::request::{Body, Method, Request};

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("smarty (sdk:rust@", env!("CARGO_PKG_VERSION"), ")");

/// HTTP-based implementation of `Sender`.
pub struct HttpSender {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    licenses: Vec<String>,
}

impl HttpSender {
    /// Create a sender for `base_url` with a default `reqwest::Client`.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, credentials)
    }

    /// Create a sender with a custom `reqwest::Client` (timeouts, proxies).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            credentials,
            licenses: Vec::new(),
        }
    }

    /// Send `license` with every request.
    #[must_use]
    pub fn with_licenses(mut self, licenses: Vec<String>) -> Self {
        self.licenses = licenses;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a request path. The path is appended verbatim.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{}", path.trim_start_matches('/'))
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
        }
    }
}

#[async_trait]
impl Sender for HttpSender {
    async fn send(&self, request: Request) -> Result<Value, SdkError> {
        let url = self.url_for(&request.path);

        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&request.parameters)
            .query(&self.credentials.query_pairs());

        if !self.licenses.is_empty() {
            builder = builder.query(&[("license", self.licenses.join(","))]);
        }

        if let Some(referer) = self.credentials.referer() {
            builder = builder.header(REFERER, referer);
        }

        builder = match request.body {
            Some(Body::Json(value)) => builder.json(&value),
            Some(Body::Text(text)) => builder.header(CONTENT_TYPE, "text/plain").body(text),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(
                        status = status.as_u16(),
                        error = %e,
                        "failed to read smarty error body"
                    );
                    String::new()
                }
            };
            tracing::warn!(
                status = status.as_u16(),
                path = %request.path,
                "smarty request rejected"
            );
            return Err(SdkError::from_status(status.as_u16(), message));
        }

        let bytes = response.bytes().await?;
        tracing::debug!(
            status = status.as_u16(),
            path = %request.path,
            bytes = bytes.len(),
            "smarty request completed"
        );

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
