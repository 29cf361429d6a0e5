//! International street address validation.
//!
//! Lookups are checked client-side before anything is sent; an insufficient
//! lookup fails with [`SdkError::UnprocessableEntity`] and the sender is
//! never called.

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_default_from_null;
use serde_json::Value;

use crate::client::{self, Endpoint, LookupClient, PathTemplate, PreparedSend};
use crate::errors::SdkError;
use crate::payload::decode_list;
use crate::request::{Method, Parameters};
use crate::sender::Sender;

pub const DEFAULT_BASE_URL: &str = "https://international-street.api.smarty.com/verify";

const MISSING_COUNTRY: &str = "Country field is required.";
const MISSING_ADDRESS: &str = "Either freeform or address1 is required.";
const INSUFFICIENT: &str =
    "Insufficient information: One or more required fields were not set on the lookup.";
const INVALID_GEOCODE: &str = "Invalid input: geocode can only be set to 'true' or 'false'.";
const INVALID_LANGUAGE: &str = "Invalid input: language can only be set to 'latin' or 'native'.";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lookup {
    pub country: Option<String>,
    pub freeform: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub address4: Option<String>,
    pub organization: Option<String>,
    pub locality: Option<String>,
    pub administrative_area: Option<String>,
    pub postal_code: Option<String>,
    /// `"true"` or `"false"`.
    pub geocode: Option<String>,
    /// `"native"` or `"latin"`.
    pub language: Option<String>,
    pub input_id: Option<String>,
    pub result: Vec<Candidate>,
}

impl Lookup {
    /// Lookup with a single free-form address line.
    pub fn freeform(country: impl Into<String>, freeform: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            freeform: Some(freeform.into()),
            ..Self::default()
        }
    }

    /// Lookup with a structured first address line.
    pub fn address(country: impl Into<String>, address1: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            address1: Some(address1.into()),
            ..Self::default()
        }
    }

    fn has_enough_info(&self) -> Result<(), SdkError> {
        if !is_set(self.country.as_ref()) {
            return Err(SdkError::UnprocessableEntity(MISSING_COUNTRY.into()));
        }
        if is_set(self.freeform.as_ref()) {
            return Ok(());
        }
        if !is_set(self.address1.as_ref()) {
            return Err(SdkError::UnprocessableEntity(MISSING_ADDRESS.into()));
        }
        if is_set(self.postal_code.as_ref()) {
            return Ok(());
        }
        if !is_set(self.locality.as_ref()) || !is_set(self.administrative_area.as_ref()) {
            return Err(SdkError::UnprocessableEntity(INSUFFICIENT.into()));
        }
        Ok(())
    }

    fn has_valid_options(&self) -> Result<(), SdkError> {
        if !one_of(self.geocode.as_deref(), &["true", "false"]) {
            return Err(SdkError::UnprocessableEntity(INVALID_GEOCODE.into()));
        }
        if !one_of(self.language.as_deref(), &["native", "latin"]) {
            return Err(SdkError::UnprocessableEntity(INVALID_LANGUAGE.into()));
        }
        Ok(())
    }
}

fn is_set(field: Option<&String>) -> bool {
    field.is_some_and(|v| !v.is_empty())
}

/// Unset options are always accepted.
fn one_of(value: Option<&str>, allowed: &[&str]) -> bool {
    value.is_none_or(|v| allowed.iter().any(|a| v.eq_ignore_ascii_case(a)))
}

impl client::Lookup for Lookup {
    fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("country", self.country.as_deref())
            .with("freeform", self.freeform.as_deref())
            .with("address1", self.address1.as_deref())
            .with("address2", self.address2.as_deref())
            .with("address3", self.address3.as_deref())
            .with("address4", self.address4.as_deref())
            .with("organization", self.organization.as_deref())
            .with("locality", self.locality.as_deref())
            .with("administrative_area", self.administrative_area.as_deref())
            .with("postal_code", self.postal_code.as_deref())
            .with("geocode", self.geocode.as_deref())
            .with("language", self.language.as_deref())
            .with("input_id", self.input_id.as_deref())
    }

    fn validate(&self) -> Result<(), SdkError> {
        self.has_enough_info()?;
        self.has_valid_options()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub input_id: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub organization: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub address1: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub address2: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub address3: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub address4: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub components: Components,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub metadata: Metadata,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub analysis: Analysis,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub country_iso_3: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub super_administrative_area: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub administrative_area: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub sub_administrative_area: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub dependent_locality: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub locality: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub postal_code: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub postal_code_short: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub postal_code_extra: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub premise: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub premise_number: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub thoroughfare: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub thoroughfare_name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub thoroughfare_type: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub sub_building: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub building: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub post_box: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub latitude: f64,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub longitude: f64,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub geocode_precision: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub max_geocode_precision: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub address_format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analysis {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub verification_status: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub address_precision: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub max_address_precision: String,
}

pub static VERIFY: Endpoint<Lookup> = Endpoint {
    name: "international-street",
    method: Method::Get,
    path: PathTemplate::Root,
    attach: attach_candidates,
};

fn attach_candidates(lookup: &mut Lookup, payload: Value) -> Result<(), SdkError> {
    lookup.result = decode_list(payload)?;
    Ok(())
}

/// Client for the international street API.
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
    /// [`SdkError::UndefinedLookup`] when `lookup` is `None`, or
    /// [`SdkError::UnprocessableEntity`] when the lookup does not carry
    /// enough information or has an invalid option.
    pub fn send<'a>(
        &'a self,
        lookup: Option<&'a mut Lookup>,
    ) -> Result<PreparedSend<'a, S, Lookup>, SdkError> {
        self.inner.prepare(&VERIFY, lookup)
    }
}
