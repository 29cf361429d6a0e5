//! Client-level tests for US property enrichment using `MockSender`.
//!
//! These cover request construction, error propagation and response
//! attachment without any network I/O.

use serde_json::json;
use smarty_sdk::request::Parameters;
use smarty_sdk::sender::mock::MockSender;
use smarty_sdk::us_enrichment::{
    CensusBlock, Client, EnrichmentResponse, FinancialAttributes, FinancialResponse,
    GeoAttributes, GeoResponse, Lookup, Place, PrincipalAttributes, PrincipalResponse,
};
use smarty_sdk::SdkError;

fn client() -> Client<MockSender> {
    Client::new(MockSender::new())
}

#[tokio::test]
async fn test_principal_request_with_key_only() {
    let client = client();
    let mut lookup = Lookup::new("0");

    client
        .send_principal(Some(&mut lookup))
        .expect("valid lookup")
        .await
        .expect("send");

    let request = client.sender().last_request().expect("request sent");
    assert_eq!(request.path, "0/property/principal");
    assert_eq!(request.parameters, Parameters::new());
}

#[tokio::test]
async fn test_financial_request_with_all_filters() {
    let client = client();
    let mut lookup = Lookup::from_parts("0", Some("1"), Some("2"), Some("3"), Some("4"));

    client
        .send_financial(Some(&mut lookup))
        .expect("valid lookup")
        .await
        .expect("send");

    let request = client.sender().last_request().expect("request sent");
    assert_eq!(request.path, "0/property/financial");
    assert_eq!(
        request.parameters,
        Parameters::from_iter([
            ("include", "1"),
            ("exclude", "2"),
            ("dataset", "3"),
            ("data_subset", "4"),
        ])
    );
}

#[tokio::test]
async fn test_geo_request_with_include() {
    let client = client();
    let mut lookup = Lookup::new("0").with_include("1");

    client
        .send_geo(Some(&mut lookup))
        .expect("valid lookup")
        .await
        .expect("send");

    let request = client.sender().last_request().expect("request sent");
    assert_eq!(request.path, "0/geo-reference");
    assert_eq!(request.parameters, Parameters::from_iter([("include", "1")]));
}

#[test]
fn test_missing_lookup_is_rejected_before_sending() {
    let client = client();

    assert!(matches!(
        client.send_principal(None),
        Err(SdkError::UndefinedLookup)
    ));
    assert!(matches!(
        client.send_financial(None),
        Err(SdkError::UndefinedLookup)
    ));
    assert!(matches!(client.send_geo(None), Err(SdkError::UndefinedLookup)));
    assert!(client.sender().requests().is_empty());
}

#[tokio::test]
async fn test_sender_error_propagates_unchanged() {
    let client = client();
    client.sender().set_error(SdkError::BadCredentials);
    let mut lookup = Lookup::new("0");

    let result = client
        .send_principal(Some(&mut lookup))
        .expect("valid lookup")
        .await;

    assert!(matches!(result, Err(SdkError::BadCredentials)));
    assert!(lookup.response.is_none());
}

#[tokio::test]
async fn test_empty_payload_attaches_default_response() {
    let cases = [json!({}), json!(null), json!([])];

    for payload in cases {
        let client = client();

        client.sender().set_payload(payload.clone());
        let mut principal = Lookup::new("0");
        client
            .send_principal(Some(&mut principal))
            .expect("valid lookup")
            .await
            .expect("send");
        assert_eq!(
            principal.response,
            Some(EnrichmentResponse::Principal(PrincipalResponse::default())),
            "payload: {payload}"
        );

        client.sender().set_payload(payload.clone());
        let mut financial = Lookup::new("0");
        client
            .send_financial(Some(&mut financial))
            .expect("valid lookup")
            .await
            .expect("send");
        assert_eq!(
            financial.response,
            Some(EnrichmentResponse::Financial(FinancialResponse::default())),
            "payload: {payload}"
        );

        client.sender().set_payload(payload.clone());
        let mut geo = Lookup::new("0");
        client
            .send_geo(Some(&mut geo))
            .expect("valid lookup")
            .await
            .expect("send");
        assert_eq!(
            geo.response,
            Some(EnrichmentResponse::Geo(GeoResponse::default())),
            "payload: {payload}"
        );
    }
}

#[tokio::test]
async fn test_principal_payload_is_attached() {
    let client = client();
    client.sender().set_payload(json!([{
        "smarty_key": "1962995076",
        "data_set_name": "property",
        "data_subset_name": "principal",
        "attributes": {
            "bedrooms": 3,
            "owner_full_name": "JANE DOE",
            "year_built": "1998"
        }
    }]));
    let mut lookup = Lookup::new("1962995076");

    client
        .send_principal(Some(&mut lookup))
        .expect("valid lookup")
        .await
        .expect("send");

    let expected = PrincipalResponse {
        smarty_key: "1962995076".into(),
        data_set_name: "property".into(),
        data_subset_name: "principal".into(),
        attributes: PrincipalAttributes {
            bedrooms: Some("3".into()),
            owner_full_name: Some("JANE DOE".into()),
            year_built: Some("1998".into()),
            ..PrincipalAttributes::default()
        },
    };
    assert_eq!(lookup.response, Some(EnrichmentResponse::Principal(expected)));
}

#[tokio::test]
async fn test_financial_payload_is_attached() {
    let client = client();
    client.sender().set_payload(json!({
        "smarty_key": "a",
        "data_set_name": "property",
        "data_subset_name": "financial",
        "attributes": {"assessed_value": "250000", "mortgage_amount": 180_000}
    }));
    let mut lookup = Lookup::new("a");

    client
        .send_financial(Some(&mut lookup))
        .expect("valid lookup")
        .await
        .expect("send");

    let expected = FinancialResponse {
        smarty_key: "a".into(),
        data_set_name: "property".into(),
        data_subset_name: "financial".into(),
        attributes: FinancialAttributes {
            assessed_value: Some("250000".into()),
            mortgage_amount: Some("180000".into()),
            ..FinancialAttributes::default()
        },
    };
    assert_eq!(lookup.response, Some(EnrichmentResponse::Financial(expected)));
}

#[tokio::test]
async fn test_geo_payload_is_attached() {
    let client = client();
    client.sender().set_payload(json!([{
        "smarty_key": "a",
        "data_set_name": "geo-reference",
        "attributes": {
            "census_block": {"accuracy": "block", "geoid": "490351128022006"},
            "place": {"code": "4967000", "name": "Salt Lake City", "type": "incorporated"}
        }
    }]));
    let mut lookup = Lookup::new("a");

    client
        .send_geo(Some(&mut lookup))
        .expect("valid lookup")
        .await
        .expect("send");

    let expected = GeoResponse {
        smarty_key: "a".into(),
        data_set_name: "geo-reference".into(),
        data_subset_name: String::new(),
        attributes: GeoAttributes {
            census_block: CensusBlock {
                accuracy: Some("block".into()),
                geoid: Some("490351128022006".into()),
            },
            place: Place {
                accuracy: None,
                code: Some("4967000".into()),
                name: Some("Salt Lake City".into()),
                place_type: Some("incorporated".into()),
            },
            ..GeoAttributes::default()
        },
    };
    assert_eq!(lookup.response, Some(EnrichmentResponse::Geo(expected)));
}

#[tokio::test]
async fn test_resend_replaces_response() {
    let client = client();
    let mut lookup = Lookup::new("a");

    client.sender().set_payload(json!({"smarty_key": "first"}));
    client
        .send_principal(Some(&mut lookup))
        .expect("valid lookup")
        .await
        .expect("send");

    client.sender().set_payload(json!({"smarty_key": "second"}));
    client
        .send_geo(Some(&mut lookup))
        .expect("valid lookup")
        .await
        .expect("send");

    let response = lookup.response.expect("response attached");
    assert!(response.as_geo().is_some());
    assert_eq!(response.smarty_key(), "second");
    assert_eq!(client.sender().requests().len(), 2);
}
