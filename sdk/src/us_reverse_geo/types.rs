//! Data types for reverse-geocoding responses.

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_default_from_null;

/// Addresses near the requested coordinate, closest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub results: Vec<ResultItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultItem {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub distance: f64,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub address: Address,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub smarty_key: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub street: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub city: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub state_abbreviation: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub zipcode: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinate {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub latitude: f64,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub longitude: f64,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub accuracy: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub license: u32,
}
