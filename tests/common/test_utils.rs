use super::mocks::MockLlmClient;
use atdoor_chat::{
    Result,
    assistant::Responder,
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    llm::LlmClient,
    server::{handlers::AppState, router},
};
use axum::Router;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: vec![],
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            base_url: String::new(),
            api_key: "test-api-key".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            request_timeout_secs: 5,
        },
    }
}

/// Responder backed by `mock`; the mock stays shared so tests can inspect it.
pub fn responder_with(mock: Arc<MockLlmClient>) -> Responder {
    let client: Arc<dyn LlmClient> = mock;
    Responder::new(Some(client)).unwrap()
}

/// Responder with no upstream credential.
pub fn unconfigured_responder() -> Responder {
    Responder::new(None).unwrap()
}

pub fn create_test_app(responder: Responder) -> Router {
    router(AppState::new(responder), &create_test_config().server).unwrap()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 3001
  cors_origins:
    - "https://www.atdoorhc.com"
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:9999/v1"
  api_key: "test-api-key"
  model: "gpt-4o-mini"
  request_timeout_secs: 10
"#;

/// Minimal configuration relying on defaults
pub const MINIMAL_CONFIG_YAML: &str = r#"
llm:
  api_key: ""
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;

/// A message no topic rule matches
pub const NEUTRAL_MESSAGE: &str = "Do you offer overnight respite care in Henrico?";
