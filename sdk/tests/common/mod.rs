//! Common test utilities for integration tests.
//!
//! - [`http_mock::MockHttpServer`] - `wiremock` stub server for `HttpSender` tests
//! - [`credentials`] - fixed credentials matched by the stubs
//!
//! Client-level tests that never touch the network use
//! `smarty_sdk::sender::mock::MockSender` instead (enabled through the
//! `test-utils` feature in dev-dependencies).

#![allow(dead_code)]

pub mod http_mock;

use smarty_sdk::Credentials;

pub const AUTH_ID: &str = "test-auth-id";
pub const AUTH_TOKEN: &str = "test-auth-token";

pub fn credentials() -> Credentials {
    Credentials::new_static(AUTH_ID, AUTH_TOKEN)
}
