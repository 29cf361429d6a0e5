//! Response shapes for the enrichment endpoints.
//!
//! Every endpoint returns the same envelope (key, dataset, subset) around an
//! endpoint-specific `attributes` object. Attribute values arrive as strings
//! or numbers depending on the dataset and are kept as strings.

use serde::{Deserialize, Serialize};

use crate::payload::lenient_string;

/// One enrichment record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response<A> {
    pub smarty_key: String,
    pub data_set_name: String,
    pub data_subset_name: String,
    pub attributes: A,
}

pub type PrincipalResponse = Response<PrincipalAttributes>;
pub type FinancialResponse = Response<FinancialAttributes>;
pub type GeoResponse = Response<GeoAttributes>;

/// The response attached to a lookup, tagged by the endpoint that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "endpoint", rename_all = "snake_case")]
pub enum EnrichmentResponse {
    Principal(PrincipalResponse),
    Financial(FinancialResponse),
    Geo(GeoResponse),
}

impl EnrichmentResponse {
    #[must_use]
    pub const fn as_principal(&self) -> Option<&PrincipalResponse> {
        match self {
            Self::Principal(r) => Some(r),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_financial(&self) -> Option<&FinancialResponse> {
        match self {
            Self::Financial(r) => Some(r),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_geo(&self) -> Option<&GeoResponse> {
        match self {
            Self::Geo(r) => Some(r),
            _ => None,
        }
    }

    #[must_use]
    pub fn smarty_key(&self) -> &str {
        match self {
            Self::Principal(r) => &r.smarty_key,
            Self::Financial(r) => &r.smarty_key,
            Self::Geo(r) => &r.smarty_key,
        }
    }
}

/// Property attributes from `property/principal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalAttributes {
    #[serde(default, deserialize_with = "lenient_string")]
    pub acres: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assessed_value: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bathrooms_total: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bedrooms: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub building_sqft: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub construction_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub deed_sale_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub deed_sale_price: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub land_use_standard: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub lot_sqft: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub owner_full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub owner_occupancy_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub stories_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tax_fiscal_year: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year_built: Option<String>,
}

/// Tax, deed and mortgage attributes from `property/financial`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialAttributes {
    #[serde(default, deserialize_with = "lenient_string")]
    pub assessed_improvement_percent: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assessed_improvement_value: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assessed_land_value: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assessed_value: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assessor_last_update: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assessor_taxroll_update: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact_city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact_state: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub deed_sale_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub deed_sale_price: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub market_value_year: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mortgage_amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub owner_full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tax_billed_amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tax_fiscal_year: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub total_market_value: Option<String>,
}

/// Census and statistical-area attributes from `geo-reference`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoAttributes {
    pub census_block: CensusBlock,
    pub census_county_division: CensusCountyDivision,
    pub census_tract: CensusTract,
    pub core_based_stat_area: CoreBasedStatArea,
    pub place: Place,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusBlock {
    #[serde(default, deserialize_with = "lenient_string")]
    pub accuracy: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub geoid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusCountyDivision {
    #[serde(default, deserialize_with = "lenient_string")]
    pub accuracy: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusTract {
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreBasedStatArea {
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default, deserialize_with = "lenient_string")]
    pub accuracy: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub place_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::decode;
    use serde_json::json;

    #[test]
    fn test_financial_from_raw() {
        let response: FinancialResponse = decode(json!({
            "smarty_key": "a",
            "data_set_name": "b",
            "data_subset_name": "c",
            "attributes": {
                "assessed_improvement_percent": "1",
                "assessed_value": 250_000,
                "unknown_field": "ignored"
            }
        }))
        .expect("decode");

        assert_eq!(response.smarty_key, "a");
        assert_eq!(response.data_set_name, "b");
        assert_eq!(response.data_subset_name, "c");
        assert_eq!(
            response.attributes.assessed_improvement_percent.as_deref(),
            Some("1")
        );
        assert_eq!(response.attributes.assessed_value.as_deref(), Some("250000"));
        assert!(response.attributes.mortgage_amount.is_none());
    }

    #[test]
    fn test_geo_nested_sections_default() {
        let response: GeoResponse = decode(json!({
            "smarty_key": "a",
            "attributes": {
                "census_block": {"accuracy": "block", "geoid": "490351128022006"},
                "place": {"name": "Salt Lake City", "type": "incorporated"}
            }
        }))
        .expect("decode");

        let attrs = &response.attributes;
        assert_eq!(attrs.census_block.geoid.as_deref(), Some("490351128022006"));
        assert_eq!(attrs.place.place_type.as_deref(), Some("incorporated"));
        assert_eq!(attrs.census_tract, CensusTract::default());
        assert_eq!(response.data_set_name, "");
    }

    #[test]
    fn test_accessors_match_variant() {
        let principal = EnrichmentResponse::Principal(PrincipalResponse {
            smarty_key: "k".into(),
            ..PrincipalResponse::default()
        });
        assert!(principal.as_principal().is_some());
        assert!(principal.as_financial().is_none());
        assert!(principal.as_geo().is_none());
        assert_eq!(principal.smarty_key(), "k");
    }
}
