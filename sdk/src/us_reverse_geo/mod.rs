//! US reverse geocoding: nearest addresses to a coordinate.

mod types;

use serde::Serialize;
use serde_json::Value;

use crate::client::{self, Endpoint, LookupClient, PathTemplate, PreparedSend};
use crate::errors::SdkError;
use crate::payload::decode;
use crate::request::{Method, Parameters};
use crate::sender::Sender;

pub use types::{Address, Coordinate, Response, ResultItem};

pub const DEFAULT_BASE_URL: &str = "https://us-reverse-geo.api.smarty.com/lookup";

/// A reverse-geocoding request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lookup {
    pub latitude: f64,
    pub longitude: f64,
    pub source: Option<String>,
    pub response: Option<Response>,
}

impl Lookup {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl client::Lookup for Lookup {
    fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("latitude", Some(format!("{:.8}", self.latitude).as_str()))
            .with("longitude", Some(format!("{:.8}", self.longitude).as_str()))
            .with("source", self.source.as_deref())
    }
}

pub static LOOKUP: Endpoint<Lookup> = Endpoint {
    name: "reverse-geo",
    method: Method::Get,
    path: PathTemplate::Root,
    attach: attach_response,
};

fn attach_response(lookup: &mut Lookup, payload: Value) -> Result<(), SdkError> {
    lookup.response = Some(decode(payload)?);
    Ok(())
}

/// Client for the US reverse geocoding API.
pub struct Client<S> {
    inner: LookupClient<S>,
}

impl<S: Sender> Client<S> {
    pub const fn new(sender: S) -> Self {
        Self {
            inner: LookupClient::new(sender),
        }
    }

    /// # Errors
    /// [`SdkError::UndefinedLookup`] when `lookup` is `None`.
    pub fn send<'a>(
        &'a self,
        lookup: Option<&'a mut Lookup>,
    ) -> Result<PreparedSend<'a, S, Lookup>, SdkError> {
        self.inner.prepare(&LOOKUP, lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Lookup as _;

    #[test]
    fn test_coordinates_use_eight_decimals() {
        let lookup = Lookup::new(40.111_111_111_1, -111.5);
        let params = lookup.parameters();
        assert_eq!(params.get("latitude"), Some("40.11111111"));
        assert_eq!(params.get("longitude"), Some("-111.50000000"));
        assert_eq!(params.get("source"), None);
    }

    #[test]
    fn test_source_is_sent_when_set() {
        let lookup = Lookup::new(0.0, 0.0).with_source("all");
        assert_eq!(lookup.parameters().get("source"), Some("all"));
    }
}
