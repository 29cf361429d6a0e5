//! US address autocomplete (pro).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_default_from_null;
use serde_json::Value;

use crate::client::{self, Endpoint, LookupClient, PathTemplate, PreparedSend};
use crate::errors::SdkError;
use crate::payload::decode;
use crate::request::{Method, Parameters};
use crate::sender::Sender;

pub const DEFAULT_BASE_URL: &str = "https://us-autocomplete-pro.api.smarty.com/lookup";

/// Whether suggestions near the caller's IP location are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geolocation {
    None,
    City,
}

impl fmt::Display for Geolocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::City => "city",
        })
    }
}

/// An autocomplete request. List filters are sent `;`-separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub search: String,
    pub selected: Option<String>,
    pub max_results: Option<u32>,
    pub include_only_cities: Vec<String>,
    pub include_only_states: Vec<String>,
    pub include_only_zip_codes: Vec<String>,
    pub exclude_states: Vec<String>,
    pub prefer_cities: Vec<String>,
    pub prefer_states: Vec<String>,
    pub prefer_zip_codes: Vec<String>,
    pub prefer_ratio: Option<u32>,
    pub prefer_geolocation: Option<Geolocation>,
    pub source: Option<String>,
    pub result: Vec<Suggestion>,
}

impl Lookup {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }
}

impl client::Lookup for Lookup {
    fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("search", Some(self.search.as_str()))
            .with("selected", self.selected.as_deref())
            .with_display("max_results", self.max_results)
            .with_list("include_only_cities", &self.include_only_cities)
            .with_list("include_only_states", &self.include_only_states)
            .with_list("include_only_zip_codes", &self.include_only_zip_codes)
            .with_list("exclude_states", &self.exclude_states)
            .with_list("prefer_cities", &self.prefer_cities)
            .with_list("prefer_states", &self.prefer_states)
            .with_list("prefer_zip_codes", &self.prefer_zip_codes)
            .with_display("prefer_ratio", self.prefer_ratio)
            .with_display("prefer_geolocation", self.prefer_geolocation)
            .with("source", self.source.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suggestion {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub street_line: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub secondary: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub city: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub state: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub zipcode: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub entries: u32,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub source: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Payload {
    suggestions: Option<Vec<Suggestion>>,
}

pub static LOOKUP: Endpoint<Lookup> = Endpoint {
    name: "autocomplete-pro",
    method: Method::Get,
    path: PathTemplate::Root,
    attach: attach_suggestions,
};

fn attach_suggestions(lookup: &mut Lookup, payload: Value) -> Result<(), SdkError> {
    let payload: Payload = decode(payload)?;
    lookup.result = payload.suggestions.unwrap_or_default();
    Ok(())
}

/// Client for the US autocomplete pro API.
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
    use serde_json::json;

    #[test]
    fn test_list_filters_are_joined() {
        let lookup = Lookup {
            include_only_cities: vec!["DENVER,CO".into(), "ORLANDO,FL".into()],
            include_only_states: vec!["CO".into()],
            prefer_geolocation: Some(Geolocation::None),
            prefer_ratio: Some(3),
            ..Lookup::new("4770 Lincoln")
        };
        let params = lookup.parameters();

        assert_eq!(params.get("search"), Some("4770 Lincoln"));
        assert_eq!(params.get("include_only_cities"), Some("DENVER,CO;ORLANDO,FL"));
        assert_eq!(params.get("include_only_states"), Some("CO"));
        assert_eq!(params.get("prefer_geolocation"), Some("none"));
        assert_eq!(params.get("prefer_ratio"), Some("3"));
        assert_eq!(params.get("exclude_states"), None);
    }

    #[test]
    fn test_null_suggestions_attach_empty_list() {
        let mut lookup = Lookup::new("zzz");
        attach_suggestions(&mut lookup, json!({"suggestions": null})).expect("attach");
        assert!(lookup.result.is_empty());
    }
}
