pub mod handlers;
mod types;

pub use types::{ChatRequest, ErrorResponse, HealthResponse};

use crate::{
    Error, Result,
    assistant::Responder,
    config::{Config, ServerConfig},
    llm::{LlmClient, OpenAiClient},
};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

pub async fn run(config: Config) -> Result<()> {
    let llm_client: Option<Arc<dyn LlmClient>> = if config.llm.api_key().is_some() {
        let client = OpenAiClient::new(config.llm.clone())?;
        info!("Upstream completion client ready (model: {})", client.model());
        Some(Arc::new(client))
    } else {
        warn!("OPENAI_API_KEY is not set; chat will answer with the unavailable message");
        None
    };

    let app_state = handlers::AppState::new(Responder::new(llm_client)?);
    let app = router(app_state, &config.server)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

pub fn router(state: handlers::AppState, server: &ServerConfig) -> Result<Router> {
    Ok(Router::new()
        .route("/api/chat", post(handlers::chat))
        .route("/health", get(handlers::health))
        .layer(cors_layer(&server.cors_origins)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        let values = origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| Error::config(format!("Invalid CORS origin: '{}'", origin)))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
