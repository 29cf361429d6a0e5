//! Transport abstraction used by every client.
//!
//! # Architecture
//!
//! - [`Sender`] - Trait with the single operation clients depend on
//! - [`HttpSender`] - Real HTTP implementation using reqwest
//! - [`mock::MockSender`] - Mock for unit tests (behind `test-utils` feature)
//!
//! # Testing Patterns
//!
//! ## Unit Tests (Mock Implementation)
//!
//! ```ignore
//! use std::sync::Arc;
//! use smarty_sdk::sender::mock::MockSender;
//! use smarty_sdk::us_enrichment::{Client, Lookup};
//!
//! let sender = Arc::new(MockSender::new());
//! sender.set_payload(json!({"smarty_key": "0"}));
//!
//! let client = Client::new(Arc::clone(&sender));
//! let mut lookup = Lookup::new("0");
//! client.send_principal(Some(&mut lookup))?.await?;
//!
//! assert_eq!(sender.requests()[0].path, "0/property/principal");
//! ```
//!
//! ## Integration Tests (HTTP Stubbing)
//!
//! Use `MockHttpServer` from `tests/common` to exercise [`HttpSender`]
//! against stubbed responses.

mod credentials;
mod http;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SdkError;
use crate::request::Request;

pub use credentials::Credentials;
pub use http::{HttpSender, USER_AGENT};

/// Executes a prepared request and returns the raw payload.
///
/// Implementations own everything below the request description: URL
/// assembly, authentication, retries, status handling. Whatever error they
/// return reaches the caller unchanged.
#[async_trait]
pub trait Sender: Send + Sync {
    async fn send(&self, request: Request) -> Result<Value, SdkError>;
}

#[async_trait]
impl<T: Sender + ?Sized> Sender for Arc<T> {
    async fn send(&self, request: Request) -> Result<Value, SdkError> {
        (**self).send(request).await
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{Request, SdkError, Sender, Value};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock implementation of `Sender` for unit tests.
    ///
    /// Configure the outcome with `set_payload` / `set_error` and inspect
    /// what the client built with `requests()`. Without a configured
    /// outcome every call resolves to an empty object.
    pub struct MockSender {
        result: Mutex<Option<Result<Value, SdkError>>>,
        requests: Mutex<Vec<Request>>,
    }

    impl MockSender {
        pub fn new() -> Self {
            Self {
                result: Mutex::new(None),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Resolve the next call with `payload`.
        pub fn set_payload(&self, payload: Value) {
            *self.result.lock().unwrap() = Some(Ok(payload));
        }

        /// Fail the next call with `error`.
        pub fn set_error(&self, error: SdkError) {
            *self.result.lock().unwrap() = Some(Err(error));
        }

        /// All requests received so far.
        pub fn requests(&self) -> Vec<Request> {
            self.requests.lock().unwrap().clone()
        }

        /// The most recent request, if any.
        pub fn last_request(&self) -> Option<Request> {
            self.requests.lock().unwrap().last().cloned()
        }
    }

    impl Default for MockSender {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl Sender for MockSender {
        async fn send(&self, request: Request) -> Result<Value, SdkError> {
            self.requests.lock().unwrap().push(request);

            self.result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Value::Object(serde_json::Map::new())))
        }
    }
}
