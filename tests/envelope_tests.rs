// Envelope boundary tests - raw events in, response envelopes out

use serde_json::json;
use station_sampler::application::envelope::{RawEvent, ResponseEnvelope};
use station_sampler::ToolRegistry;
use station_sampler::config::AppConfig;

fn registry() -> ToolRegistry {
    // Unroutable endpoints: none of these invocations may reach the network.
    let mut config = AppConfig::default();
    config.weatherxm.endpoint = "http://127.0.0.1:9".to_string();
    config.geoapify.endpoint = "http://127.0.0.1:9".to_string();
    ToolRegistry::from_config(&config, reqwest::Client::new())
}

#[test]
fn raw_event_reads_body_string() {
    let raw: RawEvent = serde_json::from_value(json!({
        "body": "{\"args\": {}, \"secrets\": {}}"
    }))
    .expect("raw event");
    assert_eq!(raw.body, r#"{"args": {}, "secrets": {}}"#);
}

#[tokio::test]
async fn unparseable_body_is_500_with_json_string() {
    let response = registry()
        .handle("weatherxm_stations", &RawEvent::new("{\"args\": "))
        .await;

    assert_eq!(response.status_code, 500);
    let body = response.body_json().expect("body is JSON");
    assert!(body.as_str().expect("string").starts_with("malformed envelope"));
}

#[tokio::test]
async fn missing_secrets_key_is_malformed() {
    let response = registry()
        .handle("weatherxm_stations", &RawEvent::new(r#"{"args": {}}"#))
        .await;

    assert_eq!(response.status_code, 500);
    let body = response.body_json().expect("body is JSON");
    assert!(body.as_str().expect("string").contains("secrets"));
}

#[tokio::test]
async fn unknown_tool_is_reported_in_envelope() {
    let response = registry()
        .handle("post_tweet", &RawEvent::new(r#"{"args": {}, "secrets": {}}"#))
        .await;

    assert_eq!(
        response,
        ResponseEnvelope {
            status_code: 500,
            body: r#""tool 'post_tweet' is not registered""#.to_string(),
        }
    );
}

#[tokio::test]
async fn envelope_serializes_with_status_code_key() {
    let response = registry()
        .handle("geocode_bbox", &RawEvent::new(r#"{"args": {}, "secrets": {}}"#))
        .await;

    let wire = serde_json::to_value(&response).expect("serialize");
    assert_eq!(wire, json!({"statusCode": 500, "body": "\"Missing location\""}));
}
