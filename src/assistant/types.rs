use crate::{Error, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic detected in a visitor's message. `None` means the message may go
/// to the upstream completion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicCategory {
    Emergency,
    MedicalAdvice,
    UnrelatedBusiness,
    Inappropriate,
    LegalAdvice,
    OtherProviders,
    None,
}

impl TopicCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::MedicalAdvice => "medical_advice",
            Self::UnrelatedBusiness => "unrelated_business",
            Self::Inappropriate => "inappropriate",
            Self::LegalAdvice => "legal_advice",
            Self::OtherProviders => "other_providers",
            Self::None => "none",
        }
    }

    pub fn is_restricted(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A visitor's chat message that passed input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    text: String,
}

impl IncomingMessage {
    /// Only the empty string is rejected; whitespace is a message like any other.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::invalid_input("Valid message is required"));
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in UTF-16 code units, the unit the chat widget counts in.
    pub fn utf16_len(&self) -> usize {
        self.text.encode_utf16().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ResponsePayload {
    pub fn canned(message: &str) -> Self {
        Self {
            message: message.to_string(),
            timestamp: None,
        }
    }

    /// A generated answer, stamped with the current UTC time.
    pub fn generated(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamFailure {
    RateLimited,
    Timeout,
    Other,
}

/// Which branch of the request flow produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOutcome {
    TooLong,
    Redirected(TopicCategory),
    Unconfigured,
    Answered,
    EmptyCompletion,
    ThinCompletion,
    UpstreamFailed(UpstreamFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub payload: ResponsePayload,
    pub outcome: ChatOutcome,
}

impl ChatReply {
    pub fn canned(message: &str, outcome: ChatOutcome) -> Self {
        Self {
            payload: ResponsePayload::canned(message),
            outcome,
        }
    }
}
