use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, error::OpenAIError, types as openai_types};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Upstream text-completion capability. Injected into the responder so tests
/// can substitute a double.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    /// Builds a client with the configured request timeout and with the
    /// library's rate-limit retries turned off.
    pub fn new(config: LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key()
            .ok_or_else(|| Error::config("LLM api_key is not set"))?
            .to_string();

        let mut openai_config = OpenAIConfig::new().with_api_key(api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let no_retry = backoff::ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        let client = Client::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(no_retry);

        Ok(Self {
            client,
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Timeouts surface from reqwest without the word "timeout" in their
/// message, so they are rewritten here to keep the description usable.
fn describe_failure(err: OpenAIError) -> Error {
    match &err {
        OpenAIError::Reqwest(e) if e.is_timeout() => {
            Error::llm(format!("Upstream request timeout: {}", e))
        }
        _ => Error::OpenAi(err),
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        let mut messages = Vec::new();
        for msg in &request.messages {
            messages.push(msg.to_openai_message()?);
        }

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model).messages(messages);

        if let Some(temperature) = request.temperature {
            request_builder.temperature(temperature);
        }
        if let Some(presence_penalty) = request.presence_penalty {
            request_builder.presence_penalty(presence_penalty);
        }
        if let Some(frequency_penalty) = request.frequency_penalty {
            request_builder.frequency_penalty(frequency_penalty);
        }
        if let Some(max_tokens) = request.max_tokens {
            request_builder.max_tokens(max_tokens as u32);
        }

        let openai_request = request_builder.build()?;

        let response = self
            .client
            .chat()
            .create(openai_request)
            .await
            .map_err(describe_failure)?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choices = response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                message: ChatMessage::assistant(choice.message.content.unwrap_or_default()),
                finish_reason: choice.finish_reason.map(|fr| format!("{fr:?}")),
            })
            .collect();

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(ChatCompletionResponse {
            id: response.id,
            model: response.model,
            choices,
            usage,
        })
    }
}
