use serde_json::{json, Value};
use content_analyzer::structs::config::server_config::ServerConfig;
use content_analyzer::ui::analysis_server::AnalysisServer;
use crate::common::{analyzer_for, static_dir, FakeProvider};

#[tokio::test]
async fn server_starts_serves_and_shuts_down() {
    let (_dir, static_path) = static_dir();
    let server_config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        static_dir: static_path.display().to_string(),
    };
    let provider = FakeProvider::replying("{\"content_type\":\"email\"}");
    let mut server = AnalysisServer::new(analyzer_for(provider), server_config);

    let addr = server.start().await.unwrap();
    assert_ne!(addr.port(), 0);

    let client = reqwest::Client::new();
    let health: Value = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, json!({ "status": "healthy" }));

    let response = client
        .post(format!("http://{}/analyze", addr))
        .json(&json!({ "text": "Quarterly report attached." }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": true, "analysis": { "content_type": "email" } }));

    server.shutdown().await.unwrap();
    let fresh_client = reqwest::Client::new();
    assert!(fresh_client.get(format!("http://{}/health", addr)).send().await.is_err());
}

#[tokio::test]
async fn non_ip_host_is_rejected() {
    let (_dir, static_path) = static_dir();
    let server_config = ServerConfig {
        host: "localhost".to_string(),
        port: 0,
        static_dir: static_path.display().to_string(),
    };
    let mut server = AnalysisServer::new(analyzer_for(FakeProvider::replying("{}")), server_config);
    assert!(server.start().await.is_err());
}
