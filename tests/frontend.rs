//! Integration tests for the frontend page and startup preconditions.

use jira_relay::config::RelayConfig;
use jira_relay::http::HttpServer;

mod common;

#[tokio::test]
async fn root_serves_the_embedded_page() {
    let relay = common::start_relay(RelayConfig::default()).await;
    let client = common::test_client();

    let resp = client.get(format!("{relay}/")).send().await.unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/html"));
    assert!(resp.text().await.unwrap().contains("Jira Task Creator"));
}

#[tokio::test]
async fn configured_asset_path_is_served() {
    let dir = std::env::temp_dir().join(format!("jira-relay-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("page.html");
    std::fs::write(&path, "<html><body>custom page</body></html>").unwrap();

    let mut config = RelayConfig::default();
    config.frontend.asset_path = Some(path.to_string_lossy().into_owned());
    let relay = common::start_relay(config).await;
    let client = common::test_client();

    let resp = client.get(format!("{relay}/")).send().await.unwrap();
    assert!(resp.text().await.unwrap().contains("custom page"));
}

#[tokio::test]
async fn missing_asset_path_is_a_fatal_startup_error() {
    let mut config = RelayConfig::default();
    config.frontend.asset_path = Some("/does/not/exist.html".into());

    assert!(HttpServer::new(config).is_err());
}
