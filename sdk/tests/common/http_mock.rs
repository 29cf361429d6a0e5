//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing. Use it to stand in for the Smarty APIs in integration
//! tests of `HttpSender` and the family clients.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_lookup() {
//!     let server = MockHttpServer::start().await;
//!
//!     server
//!         .expect_get("/lookup/0/property/principal")
//!         .with_query("auth-id", "id")
//!         .respond_with_json(json!([{"smarty_key": "0"}]))
//!         .mount()
//!         .await;
//!
//!     let sender = HttpSender::new(server.url_for("/lookup"), credentials);
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)` or `.respond_with_body(string)`
//! - **Error response**: `.respond_with_status(503)`, optionally `.with_json_response(value)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` then `server.verify().await`

#![allow(dead_code)]

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

/// A running stub server.
pub struct MockHttpServer {
    server: MockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the server, without a trailing slash.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Absolute URL for `path` on the server.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.server.uri())
    }

    /// The underlying `wiremock` server, for matchers the helper does not cover.
    pub const fn inner(&self) -> &MockServer {
        &self.server
    }

    /// Panic unless every mounted expectation was met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }

    /// Requests received so far.
    pub async fn received(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    pub fn expect_get(&self, route: &str) -> StubBuilder<'_> {
        StubBuilder::new(self, Mock::given(method("GET")).and(path(route)))
    }

    pub fn expect_post(&self, route: &str) -> StubBuilder<'_> {
        StubBuilder::new(self, Mock::given(method("POST")).and(path(route)))
    }
}

/// Declarative stub; nothing is registered until [`mount`](Self::mount).
pub struct StubBuilder<'a> {
    server: &'a MockHttpServer,
    mock: MockBuilder,
    response: ResponseTemplate,
    times: Option<u64>,
}

impl<'a> StubBuilder<'a> {
    fn new(server: &'a MockHttpServer, mock: MockBuilder) -> Self {
        Self {
            server,
            mock,
            response: ResponseTemplate::new(200),
            times: None,
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.mock = self.mock.and(header(name, value));
        self
    }

    pub fn with_query(mut self, name: &'static str, value: &'static str) -> Self {
        self.mock = self.mock.and(query_param(name, value));
        self
    }

    pub fn with_body(mut self, body: &'static str) -> Self {
        self.mock = self.mock.and(body_string(body));
        self
    }

    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.response = ResponseTemplate::new(200).set_body_json(body);
        self
    }

    pub fn respond_with_body(mut self, body: &str) -> Self {
        self.response = ResponseTemplate::new(200).set_body_string(body);
        self
    }

    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.response = ResponseTemplate::new(status);
        self
    }

    /// Attach a JSON body to the current response, keeping its status.
    pub fn with_json_response(mut self, body: Value) -> Self {
        self.response = self.response.set_body_json(body);
        self
    }

    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.response = self.response.set_delay(delay);
        self
    }

    pub fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut mock = self.mock.respond_with(self.response);
        if let Some(times) = self.times {
            mock = mock.expect(times);
        }
        mock.mount(&self.server.server).await;
    }
}
