use async_trait::async_trait;
use atdoor_chat::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LlmClient, Usage},
};
use std::sync::{Arc, Mutex};

/// What the mock answers with on every call.
#[derive(Debug, Clone)]
pub enum MockReply {
    Content(String),
    /// Echoes the user prompt back, so concurrent callers can check they
    /// received their own answer.
    Echo,
    NoChoices,
    Error(String),
}

/// Mock LLM client for testing. Deterministic: the same request always gets
/// the same answer.
#[derive(Debug)]
pub struct MockLlmClient {
    pub reply: MockReply,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

impl MockLlmClient {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(content: &str) -> Self {
        Self::new(MockReply::Content(content.to_string()))
    }

    pub fn failing(error: &str) -> Self {
        Self::new(MockReply::Error(error.to_string()))
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request.clone());

        match &self.reply {
            MockReply::Content(content) => Ok(create_mock_chat_response(content)),
            MockReply::Echo => {
                let user = request
                    .messages
                    .iter()
                    .rev()
                    .find(|m| m.role == "user")
                    .map(|m| m.content.clone())
                    .unwrap_or_default();
                Ok(create_mock_chat_response(&format!("Echo: {}", user)))
            }
            MockReply::NoChoices => Ok(ChatCompletionResponse {
                choices: vec![],
                ..create_mock_chat_response("")
            }),
            MockReply::Error(error) => Err(Error::llm(error.clone())),
        }
    }
}

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "chatcmpl-mock".to_string(),
        model: "gpt-3.5-turbo".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage::assistant(content),
            finish_reason: Some("Stop".to_string()),
        }],
        usage: Some(Usage {
            prompt_tokens: 900,
            completion_tokens: 40,
            total_tokens: 940,
        }),
    }
}
