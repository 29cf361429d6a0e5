//! US property enrichment.
//!
//! One lookup shape (a Smarty key plus optional filters) shared by three
//! sub-resources:
//!
//! | Operation | Path |
//! |---|---|
//! | [`Client::send_principal`] | `<key>/property/principal` |
//! | [`Client::send_financial`] | `<key>/property/financial` |
//! | [`Client::send_geo`] | `<key>/geo-reference` |
//!
//! ```ignore
//! use smarty_sdk::us_enrichment::{Client, Lookup};
//!
//! let mut lookup = Lookup::new("1962995076").with_include("assessed_value");
//! client.send_financial(Some(&mut lookup))?.await?;
//! let financial = lookup.response.as_ref().and_then(|r| r.as_financial());
//! ```

mod client;
mod lookup;
mod response;

pub use client::{Client, FINANCIAL, GEO, PRINCIPAL};
pub use lookup::Lookup;
pub use response::{
    CensusBlock, CensusCountyDivision, CensusTract, CoreBasedStatArea, EnrichmentResponse,
    FinancialAttributes, FinancialResponse, GeoAttributes, GeoResponse, Place,
    PrincipalAttributes, PrincipalResponse, Response,
};

pub const DEFAULT_BASE_URL: &str = "https://us-enrichment.api.smarty.com/lookup";
