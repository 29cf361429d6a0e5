//! International address autocomplete.
//!
//! A first lookup returns address suggestions and grouped entries. Sending
//! again with a suggestion's `address_id` set expands that entry: the id
//! becomes the request path.

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_default_from_null;
use serde_json::Value;

use crate::client::{self, Endpoint, LookupClient, PathTemplate, PreparedSend};
use crate::errors::SdkError;
use crate::payload::decode;
use crate::request::{Method, Parameters};
use crate::sender::Sender;

pub const DEFAULT_BASE_URL: &str = "https://international-autocomplete.api.smarty.com/v2/lookup";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub search: Option<String>,
    /// ISO-3 country code.
    pub country: String,
    pub max_results: Option<u32>,
    pub include_only_administrative_area: Option<String>,
    pub include_only_locality: Option<String>,
    pub include_only_postal_code: Option<String>,
    pub address_id: Option<String>,
    pub result: Vec<Suggestion>,
}

impl Lookup {
    pub fn new(search: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            country: country.into(),
            ..Self::default()
        }
    }

    /// Follow-up lookup expanding the entry `address_id`.
    pub fn expand(address_id: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            address_id: Some(address_id.into()),
            country: country.into(),
            ..Self::default()
        }
    }
}

impl client::Lookup for Lookup {
    fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("search", self.search.as_deref())
            .with("country", Some(self.country.as_str()))
            .with_display("max_results", self.max_results)
            .with(
                "include_only_administrative_area",
                self.include_only_administrative_area.as_deref(),
            )
            .with("include_only_locality", self.include_only_locality.as_deref())
            .with(
                "include_only_postal_code",
                self.include_only_postal_code.as_deref(),
            )
    }

    fn path_key(&self) -> Option<&str> {
        self.address_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// A suggestion is either a full address or, when `entries` is non-zero, a
/// group to expand through its `address_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suggestion {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub street: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub locality: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub administrative_area: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub postal_code: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub country_iso3: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub entries: u32,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub address_text: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub address_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Payload {
    candidates: Option<Vec<Suggestion>>,
}

pub static LOOKUP: Endpoint<Lookup> = Endpoint {
    name: "international-autocomplete",
    method: Method::Get,
    path: PathTemplate::Key,
    attach: attach_candidates,
};

fn attach_candidates(lookup: &mut Lookup, payload: Value) -> Result<(), SdkError> {
    let payload: Payload = decode(payload)?;
    lookup.result = payload.candidates.unwrap_or_default();
    Ok(())
}

/// Client for the international autocomplete API.
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
    use serde_json::json;

    #[test]
    fn test_search_uses_base_url() {
        let lookup = Lookup::new("Louis", "FRA");
        let request = LOOKUP.request_for(&lookup);

        assert_eq!(request.path, "");
        assert_eq!(
            request.parameters,
            Parameters::from_iter([("search", "Louis"), ("country", "FRA")])
        );
    }

    #[test]
    fn test_address_id_becomes_path() {
        let lookup = Lookup::expand("abc123", "FRA");
        let request = LOOKUP.request_for(&lookup);

        assert_eq!(request.path, "abc123");
        assert_eq!(request.parameters.get("search"), None);
    }

    #[test]
    fn test_missing_candidates_attach_empty_list() {
        let mut lookup = Lookup::new("zzz", "FRA");
        attach_candidates(&mut lookup, json!({})).expect("attach");
        assert!(lookup.result.is_empty());

        attach_candidates(
            &mut lookup,
            json!({"candidates": [{"address_text": "Rue Louis 12", "entries": 3, "address_id": "x"}]}),
        )
        .expect("attach");
        assert_eq!(lookup.result.len(), 1);
        assert_eq!(lookup.result[0].entries, 3);
    }
}
