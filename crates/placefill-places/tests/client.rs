//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use placefill_core::ApiShape;
use placefill_places::{PlacesClient, PlacesError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(shape: ApiShape, base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", shape, 5, "placefill-test/0.1", base_url)
        .expect("client construction should not fail")
}

// ---------------------------------------------------------------------------
// Legacy shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn legacy_text_search_returns_candidates_in_order() {
    let server = MockServer::start().await;

    let body = json!({
        "status": "OK",
        "results": [
            { "place_id": "first", "name": "Acme Plumbing", "formatted_address": "1 Main St" },
            { "place_id": "second", "name": "Acme Plumbing Annex" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/maps/api/place/textsearch/json"))
        .and(query_param("query", "Acme Austin USA"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(ApiShape::Legacy, &server.uri());
    let candidates = client
        .text_search("Acme Austin USA")
        .await
        .expect("should parse search results");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].id, "first");
    assert_eq!(candidates[0].display_name.as_deref(), Some("Acme Plumbing"));
    assert_eq!(candidates[1].id, "second");
}

#[tokio::test]
async fn current_search_drops_later_places_without_an_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "places": [
                { "id": "ChIJabc", "displayName": { "text": "Acme" } },
                { "displayName": { "text": "Nameless" } },
                { "id": "ChIJdef" }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(ApiShape::Current, &server.uri());
    let candidates = client.text_search("Acme Austin USA").await.unwrap();
    let ids: Vec<_> = candidates.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["ChIJabc", "ChIJdef"]);
}

#[tokio::test]
async fn legacy_search_without_id_on_first_result_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [{ "name": "no id here" }, { "place_id": "second" }]
        })))
        .mount(&server)
        .await;

    let client = test_client(ApiShape::Legacy, &server.uri());
    let err = client.text_search("Acme Austin USA").await.unwrap_err();
    assert!(
        matches!(err, PlacesError::MissingField { field: "place_id", .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn legacy_zero_results_is_empty_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/textsearch/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "ZERO_RESULTS", "results": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(ApiShape::Legacy, &server.uri());
    let candidates = client.text_search("Nowhere USA").await.unwrap();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn legacy_request_denied_surfaces_api_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        })))
        .mount(&server)
        .await;

    let client = test_client(ApiShape::Legacy, &server.uri());
    let err = client.text_search("Acme Austin USA").await.unwrap_err();
    assert!(
        matches!(err, PlacesError::ApiStatus { ref status, ref message }
            if status == "REQUEST_DENIED" && message.as_deref() == Some("The provided API key is invalid.")),
        "expected ApiStatus(REQUEST_DENIED), got: {err:?}"
    );
}

#[tokio::test]
async fn legacy_details_merges_requested_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/details/json"))
        .and(query_param("place_id", "ChIJ123"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": {
                "name": "Acme Plumbing",
                "formatted_phone_number": "(512) 555-0100",
                "opening_hours": { "periods": [
                    { "open": { "day": 1, "time": "0900" }, "close": { "day": 1, "time": "1700" } }
                ] }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(ApiShape::Legacy, &server.uri());
    let details = client.place_details("ChIJ123").await.unwrap();
    assert_eq!(details.id, "ChIJ123", "id falls back to the requested place_id");
    assert_eq!(details.phone.as_deref(), Some("(512) 555-0100"));
    assert_eq!(details.opening_hours.unwrap().periods.len(), 1);
}

#[tokio::test]
async fn legacy_details_not_found_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "NOT_FOUND" })))
        .mount(&server)
        .await;

    let client = test_client(ApiShape::Legacy, &server.uri());
    let err = client.place_details("gone").await.unwrap_err();
    assert!(matches!(err, PlacesError::ApiStatus { ref status, .. } if status == "NOT_FOUND"));
}

// ---------------------------------------------------------------------------
// Current shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn current_text_search_posts_query_with_key_and_field_mask() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .and(body_json(json!({ "textQuery": "Acme Austin USA" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "places": [{
                "id": "ChIJabc",
                "displayName": { "text": "Acme Plumbing", "languageCode": "en" },
                "websiteUri": "https://acmeplumbing.com/",
                "userRatingCount": 12
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(ApiShape::Current, &server.uri());
    let candidates = client.text_search("Acme Austin USA").await.unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, "ChIJabc");
    assert_eq!(candidates[0].website.as_deref(), Some("https://acmeplumbing.com/"));
    assert_eq!(candidates[0].rating_count, Some(12));

    let requests = server.received_requests().await.unwrap();
    let mask = requests[0]
        .headers
        .get("X-Goog-FieldMask")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(mask.contains("places.regularOpeningHours"), "field mask: {mask}");
}

#[tokio::test]
async fn current_empty_response_means_no_places() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = test_client(ApiShape::Current, &server.uri());
    assert!(client.text_search("Nowhere USA").await.unwrap().is_empty());
}

#[tokio::test]
async fn current_details_fetches_single_place() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/places/ChIJabc"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ChIJabc",
            "nationalPhoneNumber": "(512) 555-0100",
            "businessStatus": "OPERATIONAL"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(ApiShape::Current, &server.uri());
    let details = client.place_details("ChIJabc").await.unwrap();
    assert_eq!(details.phone.as_deref(), Some("(512) 555-0100"));
    assert_eq!(details.business_status.as_deref(), Some("OPERATIONAL"));
}

// ---------------------------------------------------------------------------
// Transport-level failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_status_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(403).set_body_string("PERMISSION_DENIED"))
        .mount(&server)
        .await;

    let client = test_client(ApiShape::Current, &server.uri());
    let err = client.text_search("Acme Austin USA").await.unwrap_err();
    assert!(
        matches!(err, PlacesError::UnexpectedStatus { status: 403, ref body, .. } if body == "PERMISSION_DENIED"),
        "expected UnexpectedStatus(403), got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(ApiShape::Legacy, &server.uri());
    let err = client.text_search("Acme Austin USA").await.unwrap_err();
    assert!(matches!(err, PlacesError::Deserialize { .. }), "got: {err:?}");
}

#[tokio::test]
async fn transport_errors_do_not_leak_api_key() {
    // Nothing listens on port 1.
    let client = test_client(ApiShape::Legacy, "http://127.0.0.1:1");
    let err = client.text_search("Acme Austin USA").await.unwrap_err();
    assert!(matches!(err, PlacesError::Http(_)), "got: {err:?}");
    assert!(!err.to_string().contains("test-key"));
}
