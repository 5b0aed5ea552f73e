use super::{
    classifier::TopicClassifier,
    flow::{ChatEvent, ChatFlow},
    prompt, responses,
    types::{ChatOutcome, ChatReply, IncomingMessage, ResponsePayload, UpstreamFailure},
};
use crate::{Result, llm::LlmClient};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Longer messages get the "call the office" reply without classification.
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// Trimmed completions shorter than this are too thin to show.
pub const MIN_REPLY_CHARS: usize = 10;

/// Message classifier and responder behind `/api/chat`. Holds no per-request
/// state, so one instance serves all requests concurrently.
pub struct Responder {
    classifier: TopicClassifier,
    llm_client: Option<Arc<dyn LlmClient>>,
}

impl Responder {
    /// Uses the default topic rules. `None` means no upstream credential is
    /// configured.
    pub fn new(llm_client: Option<Arc<dyn LlmClient>>) -> Result<Self> {
        Ok(Self::with_classifier(
            TopicClassifier::with_default_rules()?,
            llm_client,
        ))
    }

    pub fn with_classifier(
        classifier: TopicClassifier,
        llm_client: Option<Arc<dyn LlmClient>>,
    ) -> Self {
        Self {
            classifier,
            llm_client,
        }
    }

    pub fn is_upstream_configured(&self) -> bool {
        self.llm_client.is_some()
    }

    /// Produces the reply for one chat message. Only empty input is returned
    /// as an error (`Error::InvalidInput`); every other condition becomes a
    /// canned or generated reply.
    pub async fn handle(&self, text: &str) -> Result<ChatReply> {
        let mut flow = ChatFlow::new();

        let message = match IncomingMessage::new(text) {
            Ok(message) => {
                flow.transition(ChatEvent::InputValidated)?;
                message
            }
            Err(e) => {
                flow.transition(ChatEvent::InputRejected)?;
                warn!("Rejected chat message: {}", e);
                return Err(e);
            }
        };

        let reply = self.respond(&mut flow, &message).await?;
        info!(
            "Chat reply ready: {:?} ({} states visited)",
            reply.outcome,
            flow.trail().len()
        );
        Ok(reply)
    }

    async fn respond(&self, flow: &mut ChatFlow, message: &IncomingMessage) -> Result<ChatReply> {
        let length = message.utf16_len();
        if length > MAX_MESSAGE_CHARS {
            flow.transition(ChatEvent::LengthExceeded)?;
            info!("Message too long ({} UTF-16 units), skipping classification", length);
            return Ok(ChatReply::canned(responses::TOO_LONG, ChatOutcome::TooLong));
        }
        flow.transition(ChatEvent::LengthAccepted)?;

        let category = self.classifier.classify(message.text());
        if let Some(redirect) = category.redirect() {
            flow.transition(ChatEvent::TopicRestricted)?;
            info!("Redirecting restricted topic: {}", category);
            return Ok(ChatReply::canned(
                redirect,
                ChatOutcome::Redirected(category),
            ));
        }
        flow.transition(ChatEvent::TopicAllowed)?;

        let Some(client) = self.llm_client.as_deref() else {
            flow.transition(ChatEvent::CredentialMissing)?;
            warn!("No upstream credential configured, returning unavailable reply");
            return Ok(ChatReply::canned(
                responses::SERVICE_UNAVAILABLE,
                ChatOutcome::Unconfigured,
            ));
        };

        flow.transition(ChatEvent::CompletionRequested)?;
        debug!("Requesting completion for: {}", message.text());

        match client
            .create_chat_completion(prompt::completion_request(message.text()))
            .await
        {
            Ok(response) => {
                flow.transition(ChatEvent::CompletionSucceeded)?;
                if let Some(usage) = &response.usage {
                    debug!(
                        "Completion {} used {} tokens",
                        response.id, usage.total_tokens
                    );
                }
                Ok(judge_completion(response.first_content()))
            }
            Err(e) => {
                flow.transition(ChatEvent::CompletionFailed)?;
                error!("Upstream completion failed: {}", e);
                let failure = UpstreamFailure::from_description(&e.to_string());
                Ok(ChatReply::canned(
                    failure.apology(),
                    ChatOutcome::UpstreamFailed(failure),
                ))
            }
        }
    }
}

/// Quality gate applied to the upstream answer.
pub fn judge_completion(content: Option<&str>) -> ChatReply {
    let answer = content.map(str::trim).unwrap_or_default();

    if answer.is_empty() {
        warn!("Upstream returned an empty completion");
        ChatReply::canned(responses::EMPTY_COMPLETION, ChatOutcome::EmptyCompletion)
    } else if answer.chars().count() < MIN_REPLY_CHARS {
        warn!("Upstream completion too short ({} chars)", answer.chars().count());
        ChatReply::canned(responses::THIN_COMPLETION, ChatOutcome::ThinCompletion)
    } else {
        ChatReply {
            payload: ResponsePayload::generated(answer),
            outcome: ChatOutcome::Answered,
        }
    }
}
