//! Integration tests for `DistanceClient` using wiremock HTTP mocks.

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vdq_core::QuoteParams;
use vdq_distance::{DistanceClient, DistanceError};

fn test_client(base_url: &str) -> DistanceClient {
    DistanceClient::with_base_url(30, base_url).expect("client construction should not fail")
}

fn test_params() -> QuoteParams {
    QuoteParams {
        dealer_postcode: "SW15 5PU".to_owned(),
        customer_postcode: "GU15 1AX".to_owned(),
        cost_per_mile: 2.0,
        free_distance: 20.0,
        minimum_cost: 50.0,
        deduct_free_distance: true,
        maximum_distance: 300.0,
    }
}

async fn mount_miles(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/api/vehicle-delivery-distance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn lookup_sends_the_service_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/vehicle-delivery-distance"))
        .and(body_json(serde_json::json!({
            "DealerAddress": { "Postcode": "SW15 5PU" },
            "CustomerAddress": { "Postcode": "GU15 1AX" },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "Miles": 71.2 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .lookup("SW15 5PU", "GU15 1AX")
        .await
        .expect("should parse distance");

    assert_eq!(result.miles, Some(serde_json::json!(71.2)));
}

#[tokio::test]
async fn quote_prices_a_deliverable_journey() {
    let server = MockServer::start().await;
    mount_miles(&server, serde_json::json!({ "Miles": 100.0 })).await;

    let res = test_client(&server.uri()).quote(&test_params()).await;

    assert!(res.has_result);
    assert!(res.can_deliver);
    assert_eq!(res.total_miles, Some(100.0));
    assert_eq!(res.charged_miles, Some(80.0));
    assert_eq!(res.cost_estimate, Some(160.0));
    assert_eq!(res.used_minimum_cost, Some(false));
    assert_eq!(res.errors, None);
    assert_eq!(res.error_code, None);
}

#[tokio::test]
async fn quote_refuses_journey_at_the_maximum_distance() {
    let server = MockServer::start().await;
    mount_miles(&server, serde_json::json!({ "Miles": 300.0 })).await;

    let res = test_client(&server.uri()).quote(&test_params()).await;

    assert!(res.has_result);
    assert!(!res.can_deliver);
    assert_eq!(res.total_miles, Some(300.0));
}

#[tokio::test]
async fn quote_maps_null_miles_to_invalid_postcode() {
    let server = MockServer::start().await;
    mount_miles(&server, serde_json::json!({ "Miles": null })).await;

    let res = test_client(&server.uri()).quote(&test_params()).await;

    assert!(!res.has_result);
    assert_eq!(res.error_code, Some(400));
    assert_eq!(res.errors.unwrap().error, "Invalid postcode");
}

#[tokio::test]
async fn quote_maps_unparseable_miles_to_calculation_failure() {
    let server = MockServer::start().await;
    mount_miles(&server, serde_json::json!({ "Miles": "seventy-one" })).await;

    let res = test_client(&server.uri()).quote(&test_params()).await;

    assert!(!res.has_result);
    assert_eq!(res.error_code, Some(500));
    assert_eq!(res.errors.unwrap().error, "Failed to calculate cost");
}

#[tokio::test]
async fn quote_maps_http_400_to_invalid_postcode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/vehicle-delivery-distance"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let res = test_client(&server.uri()).quote(&test_params()).await;

    assert!(!res.has_result);
    assert!(!res.can_deliver);
    assert_eq!(res.error_code, Some(400));
    assert_eq!(res.errors.unwrap().error, "Invalid postcode");
}

#[tokio::test]
async fn quote_maps_http_500_to_calculation_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/vehicle-delivery-distance"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let res = test_client(&server.uri()).quote(&test_params()).await;

    assert!(!res.has_result);
    assert_eq!(res.error_code, Some(500));
    assert_eq!(res.errors.unwrap().error, "Failed to calculate cost");
}

#[tokio::test]
async fn quote_keeps_unusual_upstream_codes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/vehicle-delivery-distance"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let res = test_client(&server.uri()).quote(&test_params()).await;

    // Non-500 codes keep their number but read as a postcode problem.
    assert_eq!(res.error_code, Some(502));
    assert_eq!(res.errors.unwrap().error, "Invalid postcode");
}

#[tokio::test]
async fn lookup_surfaces_undecodable_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/vehicle-delivery-distance"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .lookup("SW15 5PU", "GU15 1AX")
        .await
        .unwrap_err();

    assert!(matches!(err, DistanceError::Deserialize { .. }));
    assert_eq!(err.status_code(), 500);
}
