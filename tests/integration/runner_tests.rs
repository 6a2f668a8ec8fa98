use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use price_scout::config::ApifyConfig;
use price_scout::models::SourceId;
use price_scout::runner::{ApifyRunner, RunnerError, SourceRunner};
use price_scout::sources::Registry;

fn config_for(server: &MockServer) -> ApifyConfig {
    ApifyConfig {
        base_url: server.uri(),
        token: Some("apify_api_test_token".to_string()),
        run_timeout_secs: 120,
        max_items_per_source: 50,
    }
}

fn runner_for(config: &ApifyConfig) -> ApifyRunner {
    ApifyRunner::new(config, config.token.clone().unwrap()).unwrap()
}

#[tokio::test]
async fn test_runner_returns_dataset_items() {
    let server = MockServer::start().await;
    let items = json!([
        { "productName": "Speaker", "price": "$10.00" },
        { "productName": "Case", "price": "80" },
    ]);

    Mock::given(method("POST"))
        .and(path(
            "/v2/acts/jungle_intertwining~yiwugo-scraper/run-sync-get-dataset-items",
        ))
        .and(query_param("token", "apify_api_test_token"))
        .and(query_param("limit", "50"))
        .and(query_param("timeout", "120"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let registry = Registry::with_defaults();
    let adapter = registry.get(SourceId::Yiwugo).unwrap();

    let result = runner_for(&config).run(adapter, "speaker").await.unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0]["productName"], "Speaker");
}

#[tokio::test]
async fn test_runner_posts_the_adapter_run_input() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/v2/acts/jungle_intertwining~dhgate-scraper/run-sync-get-dataset-items",
        ))
        .and(body_json(json!({
            "searchKeywords": ["led strip"],
            "maxPages": 2,
            "shipTo": "us",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let registry = Registry::with_defaults();
    let adapter = registry.get(SourceId::Dhgate).unwrap();

    let result = runner_for(&config).run(adapter, "led strip").await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_runner_maps_error_status_to_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(402).set_body_string("Monthly usage hard limit"))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let registry = Registry::with_defaults();
    let adapter = registry.get(SourceId::Yiwugo).unwrap();

    let result = runner_for(&config).run(adapter, "speaker").await;

    match result {
        Err(RunnerError::Upstream { status, message }) => {
            assert_eq!(status, 402);
            assert!(message.contains("Monthly usage"));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_runner_maps_bad_payload_to_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not a dataset</html>"))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let registry = Registry::with_defaults();
    let adapter = registry.get(SourceId::MadeInChina).unwrap();

    let result = runner_for(&config).run(adapter, "speaker").await;

    assert!(matches!(result, Err(RunnerError::Upstream { .. })));
}

#[tokio::test]
async fn test_runner_times_out_as_timeout_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.run_timeout_secs = 1;
    let registry = Registry::with_defaults();
    let adapter = registry.get(SourceId::Yiwugo).unwrap();

    let result = runner_for(&config).run(adapter, "speaker").await;

    assert!(matches!(result, Err(RunnerError::Timeout)));
}
