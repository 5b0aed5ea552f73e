use atdoor_chat::{
    Error,
    assistant::{ChatOutcome, Responder, UpstreamFailure, prompt, responses},
    config::LlmConfig,
    llm::{LlmClient, OpenAiClient},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

fn config_for(server: &MockServer) -> LlmConfig {
    LlmConfig {
        base_url: server.uri(),
        api_key: "test-api-key".to_string(),
        model: "gpt-3.5-turbo".to_string(),
        request_timeout_secs: 1,
    }
}

fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop",
            "logprobs": null
        }],
        "usage": { "prompt_tokens": 812, "completion_tokens": 31, "total_tokens": 843 }
    })
}

fn api_error_body(message: &str, error_type: &str, code: Option<&str>) -> Value {
    json!({
        "error": { "message": message, "type": error_type, "param": null, "code": code }
    })
}

#[tokio::test]
async fn test_create_chat_completion_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(body_partial_json(json!({ "model": "gpt-3.5-turbo", "max_tokens": 350 })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body("Hello from upstream")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(config_for(&server)).unwrap();
    let response = client
        .create_chat_completion(prompt::completion_request("Do you offer respite care?"))
        .await
        .unwrap();

    assert_eq!(response.id, "chatcmpl-123");
    assert_eq!(response.first_content(), Some("Hello from upstream"));
    assert_eq!(response.usage.unwrap().total_tokens, 843);
}

#[tokio::test]
async fn test_request_carries_system_and_user_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body("Hello from upstream")),
        )
        .mount(&server)
        .await;

    let client = OpenAiClient::new(config_for(&server)).unwrap();
    client
        .create_chat_completion(prompt::completion_request("Do you offer respite care?"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
    assert!(
        messages[1]["content"]
            .as_str()
            .unwrap()
            .contains("Do you offer respite care?")
    );
    let temperature = body["temperature"].as_f64().unwrap();
    assert!((temperature - 0.6).abs() < 1e-6);
}

#[tokio::test]
async fn test_rate_limit_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(api_error_body(
            "Rate limit reached for gpt-3.5-turbo in organization org-test on requests per min.",
            "requests",
            Some("rate_limit_exceeded"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(config_for(&server)).unwrap();
    let err = client
        .create_chat_completion(prompt::completion_request("Do you offer respite care?"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::OpenAi(_)));
    assert_eq!(
        UpstreamFailure::from_description(&err.to_string()),
        UpstreamFailure::RateLimited
    );
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(config_for(&server)).unwrap();
    let err = client
        .create_chat_completion(prompt::completion_request("Do you offer respite care?"))
        .await
        .unwrap_err();

    assert_eq!(
        UpstreamFailure::from_description(&err.to_string()),
        UpstreamFailure::Other
    );
}

#[tokio::test]
async fn test_slow_upstream_reports_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("Too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = OpenAiClient::new(config_for(&server)).unwrap();
    let err = client
        .create_chat_completion(prompt::completion_request("Do you offer respite care?"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Llm(_)));
    assert_eq!(
        UpstreamFailure::from_description(&err.to_string()),
        UpstreamFailure::Timeout
    );
}

#[tokio::test]
async fn test_responder_over_real_client() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(api_error_body(
            "Rate limit reached for gpt-3.5-turbo",
            "requests",
            Some("rate_limit_exceeded"),
        )))
        .mount(&server)
        .await;

    let client: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(config_for(&server)).unwrap());
    let responder = Responder::new(Some(client)).unwrap();

    let reply = responder
        .handle("Do you offer overnight respite care?")
        .await
        .unwrap();

    assert_eq!(
        reply.outcome,
        ChatOutcome::UpstreamFailed(UpstreamFailure::RateLimited)
    );
    assert_eq!(reply.payload.message, responses::RATE_LIMITED);
}
