//! Address extraction from free text.
//!
//! The text travels as a `text/plain` POST body; the options go on the
//! query string. Verified addresses carry full US street candidates.

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_default_from_null;
use serde_json::Value;

use crate::client::{self, Endpoint, LookupClient, PathTemplate, PreparedSend};
use crate::errors::SdkError;
use crate::payload::decode;
use crate::request::{Body, Method, Parameters};
use crate::sender::Sender;
use crate::us_street::Candidate;

pub const DEFAULT_BASE_URL: &str = "https://us-extract.api.smarty.com";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lookup {
    pub text: String,
    pub html: Option<bool>,
    pub aggressive: Option<bool>,
    pub addresses_have_line_breaks: Option<bool>,
    pub addresses_per_line: Option<u32>,
    pub result: Option<ExtractResult>,
}

impl Lookup {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl client::Lookup for Lookup {
    fn parameters(&self) -> Parameters {
        Parameters::new()
            .with_display("html", self.html)
            .with_display("aggressive", self.aggressive)
            .with_display("addr_line_breaks", self.addresses_have_line_breaks)
            .with_display("addr_per_line", self.addresses_per_line)
    }

    fn body(&self) -> Option<Body> {
        Some(Body::Text(self.text.clone()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractResult {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub meta: Metadata,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub lines: u32,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub unicode: bool,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub address_count: u32,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub verified_count: u32,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub bytes: u32,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub character_count: u32,
}

/// One address found in the text, with its position and any candidates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub text: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub verified: bool,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub line: u32,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub start: u32,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub end: u32,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub api_output: Vec<Candidate>,
}

pub static EXTRACT: Endpoint<Lookup> = Endpoint {
    name: "extract",
    method: Method::Post,
    path: PathTemplate::Root,
    attach: attach_result,
};

fn attach_result(lookup: &mut Lookup, payload: Value) -> Result<(), SdkError> {
    lookup.result = Some(decode(payload)?);
    Ok(())
}

/// Client for the US extract API.
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
        self.inner.prepare(&EXTRACT, lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Lookup as _;

    #[test]
    fn test_options_and_body() {
        let lookup = Lookup {
            html: Some(true),
            aggressive: Some(false),
            addresses_per_line: Some(2),
            ..Lookup::new("Meet me at 3214 N University Ave Provo UT 84604")
        };

        assert_eq!(
            lookup.parameters(),
            Parameters::from_iter([
                ("html", "true"),
                ("aggressive", "false"),
                ("addr_per_line", "2"),
            ])
        );
        assert_eq!(
            lookup.body(),
            Some(Body::Text(
                "Meet me at 3214 N University Ave Provo UT 84604".into()
            ))
        );
    }
}
