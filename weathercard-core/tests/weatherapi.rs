//! Integration tests for `WeatherApiProvider` using wiremock HTTP mocks.

use weathercard_core::{
    FetchError, FetchOutcome, Icon, Node, TextRole, WeatherApiProvider, WeatherProvider, Widget,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_provider(base_url: &str) -> WeatherApiProvider {
    WeatherApiProvider::with_base_url("test-key".to_string(), base_url)
}

fn austin_body() -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": "Austin",
            "region": "Texas",
            "country": "United States of America",
        },
        "current": {
            "temp_f": 72.4,
            "temp_c": 22.4,
            "feelslike_f": 74.6,
            "feelslike_c": 23.7,
            "humidity": 48,
            "wind_mph": 4.3,
            "wind_kph": 6.8,
            "is_day": 1,
            "condition": { "text": "Sunny", "code": 1000 },
            "last_updated_epoch": 1_754_000_000,
        },
    })
}

#[tokio::test]
async fn current_returns_normalized_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "Austin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(austin_body()))
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let record = provider.current("Austin").await.expect("should parse record");

    assert_eq!(record.temp_f.round(), 72.0);
    assert_eq!(record.temp_c, 22.4);
    assert_eq!(record.icon, Icon::Sunny);
    assert!(record.is_day);
    assert_eq!(record.description, "sunny");
    assert_eq!(record.humidity_pct, 48);
    assert_eq!(record.location_name, "Austin");
    assert_eq!(record.region, "Texas");
}

#[tokio::test]
async fn error_status_maps_to_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(serde_json::json!({"error": {"code": 2008, "message": "disabled"}})),
        )
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let err = provider.current("Austin").await.unwrap_err();

    match err {
        FetchError::InvalidResponse(msg) => assert!(msg.contains("403")),
        other => panic!("expected InvalidResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_current_object_maps_to_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": { "name": "Austin", "region": "Texas", "country": "US" },
        })))
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let err = provider.current("Austin").await.unwrap_err();

    assert!(matches!(err, FetchError::InvalidResponse(_)));
}

#[tokio::test]
async fn unreachable_server_maps_to_network_error() {
    // Nothing listens here; the connection is refused.
    let provider = test_provider("http://127.0.0.1:1");
    let err = provider.current("Austin").await.unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn widget_refresh_builds_the_documented_card() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(austin_body()))
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let mut widget = Widget::new(Some("Austin"), true);

    assert!(widget.refresh(&provider).await);
    assert!(matches!(widget.outcome(), FetchOutcome::Success(_)));

    let Node::Panel { children, .. } = widget.view() else {
        panic!("card must be a panel");
    };
    let temperature = children.iter().find_map(|node| match node {
        Node::Text { content, role, .. } if *role == TextRole::Temperature => Some(content.clone()),
        _ => None,
    });
    assert_eq!(temperature.as_deref(), Some("72°F"));
}

#[tokio::test]
async fn widget_failure_is_displayed_not_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let mut widget = Widget::new(Some("Austin"), true);

    assert!(widget.refresh(&provider).await);
    match widget.outcome() {
        FetchOutcome::Failure(reason) => assert!(reason.contains("500")),
        other => panic!("expected failure outcome, got {other:?}"),
    }
}
