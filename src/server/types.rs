use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`. `message` is kept as raw JSON so a missing or
/// non-string value can be answered with a 400 instead of a rejection.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `upstream_configured` is false when no API credential is set.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub upstream_configured: bool,
}
