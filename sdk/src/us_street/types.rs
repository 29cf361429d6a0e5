//! Data types for US street candidates.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_default_from_null;

/// How strictly the API matches the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    #[default]
    Strict,
    Invalid,
    Enhanced,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strict => "strict",
            Self::Invalid => "invalid",
            Self::Enhanced => "enhanced",
        })
    }
}

/// One validated address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub input_id: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub input_index: u32,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub candidate_index: u32,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub addressee: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub delivery_line_1: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub delivery_line_2: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub last_line: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub delivery_point_barcode: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub smarty_key: String,
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
    pub primary_number: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub street_predirection: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub street_name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub street_suffix: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub street_postdirection: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub secondary_designator: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub secondary_number: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub city_name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub state_abbreviation: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub zipcode: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub plus4_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub record_type: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub county_fips: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub county_name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub latitude: f64,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub longitude: f64,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub precision: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub time_zone: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub rdi: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analysis {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub dpv_match_code: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub dpv_footnotes: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub dpv_vacant: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub active: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub footnotes: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub enhanced_match: String,
}
