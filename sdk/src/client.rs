//! Generic lookup client shared by every API family.
//!
//! A family describes each of its endpoints once, as an [`Endpoint`] entry:
//! the HTTP method, a [`PathTemplate`] and the function that attaches the
//! decoded payload to the lookup. [`LookupClient::prepare`] turns an
//! endpoint and a lookup into a [`PreparedSend`] in two phases:
//!
//! 1. Synchronously: reject a missing lookup, run the lookup's own
//!    validation, build the [`Request`]. Errors here are caller misuse and
//!    are returned before any I/O.
//! 2. Asynchronously (`.await`): hand the request to the [`Sender`], then
//!    attach the decoded response. Sender errors propagate unchanged and the
//!    lookup is left untouched.
//!
//! ```ignore
//! let mut lookup = Lookup::new("1962995076");
//! client.send_principal(Some(&mut lookup))?.await?;
//! let response = lookup.response.as_ref();
//! ```

use std::future::{Future, IntoFuture};
use std::pin::Pin;

use serde_json::Value;

use crate::errors::SdkError;
use crate::request::{Body, Method, Parameters, Request};
use crate::sender::Sender;

/// A request object that a client can send.
pub trait Lookup: Send {
    /// Query parameters for this lookup; absent fields are left out.
    fn parameters(&self) -> Parameters;

    /// Identifying key interpolated by [`PathTemplate::Key`] and
    /// [`PathTemplate::KeySuffix`].
    fn path_key(&self) -> Option<&str> {
        None
    }

    fn body(&self) -> Option<Body> {
        None
    }

    /// Client-side checks run before dispatch.
    ///
    /// # Errors
    /// Returns a caller-misuse error when the lookup cannot be sent.
    fn validate(&self) -> Result<(), SdkError> {
        Ok(())
    }
}

/// How an endpoint's path is built from the lookup's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathTemplate {
    /// The sender's base URL itself.
    Root,
    /// The key alone, or the base URL when the lookup has no key.
    Key,
    /// `<key>/<suffix>`
    KeySuffix(&'static str),
}

impl PathTemplate {
    /// Render the path. The key is inserted verbatim, without escaping.
    #[must_use]
    pub fn render(self, key: Option<&str>) -> String {
        match self {
            Self::Root => String::new(),
            Self::Key => key.unwrap_or_default().to_string(),
            Self::KeySuffix(suffix) => format!("{}/{suffix}", key.unwrap_or_default()),
        }
    }
}

/// Assigns a successful payload to the lookup.
pub type Attach<L> = fn(&mut L, Value) -> Result<(), SdkError>;

/// One sub-resource of an API family.
pub struct Endpoint<L> {
    pub name: &'static str,
    pub method: Method,
    pub path: PathTemplate,
    pub attach: Attach<L>,
}

impl<L: Lookup> Endpoint<L> {
    /// Build the request for `lookup` without validating it.
    #[must_use]
    pub fn request_for(&self, lookup: &L) -> Request {
        Request {
            method: self.method,
            path: self.path.render(lookup.path_key()),
            parameters: lookup.parameters(),
            body: lookup.body(),
        }
    }
}

/// Client parameterized by the endpoint table handed to [`prepare`](Self::prepare).
///
/// Holds no state besides the sender. Sending the same lookup twice is
/// last-write-wins on its result slot.
pub struct LookupClient<S> {
    sender: S,
}

impl<S: Sender> LookupClient<S> {
    pub const fn new(sender: S) -> Self {
        Self { sender }
    }

    #[must_use]
    pub const fn sender(&self) -> &S {
        &self.sender
    }

    /// Validate `lookup` and build its request for `endpoint`.
    ///
    /// # Errors
    /// Returns [`SdkError::UndefinedLookup`] when `lookup` is `None`, or the
    /// lookup's own validation error. Nothing has been sent in either case.
    pub fn prepare<'a, L: Lookup>(
        &'a self,
        endpoint: &'a Endpoint<L>,
        lookup: Option<&'a mut L>,
    ) -> Result<PreparedSend<'a, S, L>, SdkError> {
        let lookup = lookup.ok_or(SdkError::UndefinedLookup)?;
        lookup.validate()?;
        let request = endpoint.request_for(lookup);

        Ok(PreparedSend {
            sender: &self.sender,
            endpoint,
            lookup,
            request,
        })
    }
}

/// A validated send that has not been dispatched yet.
///
/// Await it (or call [`dispatch`](Self::dispatch)) to execute the request.
/// The lookup's result slot is only written once the sender has resolved
/// successfully.
pub struct PreparedSend<'a, S, L> {
    sender: &'a S,
    endpoint: &'a Endpoint<L>,
    lookup: &'a mut L,
    request: Request,
}

impl<'a, S: Sender, L: Lookup> PreparedSend<'a, S, L> {
    /// The request that will be handed to the sender.
    #[must_use]
    pub const fn request(&self) -> &Request {
        &self.request
    }

    #[must_use]
    pub const fn endpoint_name(&self) -> &'static str {
        self.endpoint.name
    }

    /// Send the request and attach the response to the lookup.
    ///
    /// # Errors
    /// Returns the sender's error unchanged, or [`SdkError::Decode`] when the
    /// payload does not fit the endpoint's response shape.
    pub async fn dispatch(self) -> Result<(), SdkError> {
        let payload = self.sender.send(self.request).await?;
        (self.endpoint.attach)(self.lookup, payload)
    }
}

impl<'a, S: Sender + 'a, L: Lookup + 'a> IntoFuture for PreparedSend<'a, S, L> {
    type Output = Result<(), SdkError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.dispatch())
    }
}
