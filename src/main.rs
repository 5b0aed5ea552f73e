use anyhow::Result;
use atdoor_chat::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration comes first so the log level can be read from it
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured level
    let log_level = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => {
            let level = config.server.logs.level.clone();
            if let Err(e) = validate_log_level(&level) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
            level
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level)?)
        .json()
        .init();

    info!("Starting At Door chat service with log filter: {}", log_level);

    server::run(config).await?;

    Ok(())
}
