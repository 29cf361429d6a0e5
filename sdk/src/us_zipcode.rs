//! US city/state/ZIP Code lookup.

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_default_from_null;
use serde_json::Value;

use crate::client::{self, Endpoint, LookupClient, PathTemplate, PreparedSend};
use crate::errors::SdkError;
use crate::payload::decode_first;
use crate::request::{Method, Parameters};
use crate::sender::Sender;

pub const DEFAULT_BASE_URL: &str = "https://us-zipcode.api.smarty.com/lookup";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lookup {
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub input_id: Option<String>,
    pub result: Option<ZipcodeResult>,
}

impl Lookup {
    /// Lookup by city and state.
    pub fn city_state(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            state: Some(state.into()),
            ..Self::default()
        }
    }

    /// Lookup by ZIP Code.
    pub fn zipcode(zipcode: impl Into<String>) -> Self {
        Self {
            zipcode: Some(zipcode.into()),
            ..Self::default()
        }
    }
}

impl client::Lookup for Lookup {
    fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("city", self.city.as_deref())
            .with("state", self.state.as_deref())
            .with("zipcode", self.zipcode.as_deref())
            .with("input_id", self.input_id.as_deref())
    }
}

/// Result for one input. `status`/`reason` are set when the input was invalid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZipcodeResult {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub input_index: u32,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub input_id: String,
    pub status: Option<String>,
    pub reason: Option<String>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub city_states: Vec<CityState>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub zipcodes: Vec<Zipcode>,
}

impl ZipcodeResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.status.is_none() && self.reason.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityState {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub city: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub state_abbreviation: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub state: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub mailable_city: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zipcode {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub zipcode: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub zipcode_type: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub default_city: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub county_fips: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub county_name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub state_abbreviation: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub latitude: f64,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub longitude: f64,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub precision: String,
}

pub static LOOKUP: Endpoint<Lookup> = Endpoint {
    name: "zipcode",
    method: Method::Get,
    path: PathTemplate::Root,
    attach: attach_result,
};

fn attach_result(lookup: &mut Lookup, payload: Value) -> Result<(), SdkError> {
    lookup.result = Some(decode_first(payload)?);
    Ok(())
}

/// Client for the US ZIP Code API.
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
