use super::types::{ChatRequest, ErrorResponse, HealthResponse};
use crate::assistant::{Responder, ResponsePayload, responses};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

const INVALID_MESSAGE: &str = "Valid message is required";

#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
}

impl AppState {
    pub fn new(responder: Responder) -> Self {
        Self {
            responder: Arc::new(responder),
        }
    }
}

fn bad_request() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: INVALID_MESSAGE.to_string(),
        }),
    )
}

pub async fn chat(
    State(state): State<AppState>,
    request: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ResponsePayload>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();

    async move {
        let text = match request {
            Ok(Json(ChatRequest {
                message: Some(serde_json::Value::String(text)),
            })) => text,
            Ok(_) => {
                warn!("Chat request without a string message");
                return Err(bad_request());
            }
            Err(rejection) => {
                warn!("Unreadable chat request body: {}", rejection);
                return Err(bad_request());
            }
        };

        info!("Received chat message ({} chars)", text.chars().count());

        match state.responder.handle(&text).await {
            Ok(reply) => Ok(Json(reply.payload)),
            Err(e) if e.is_invalid_input() => Err(bad_request()),
            Err(e) => {
                error!("Failed to process chat message: {}", e);
                Ok(Json(ResponsePayload::canned(
                    responses::TECHNICAL_DIFFICULTIES,
                )))
            }
        }
    }
    .instrument(info_span!("chat", %request_id))
    .await
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        upstream_configured: state.responder.is_upstream_configured(),
    })
}
