//! Server binary for the Vietnam 1954–1964 timeline site.
//!
//! Loads configuration, initializes logging, builds the event catalog and
//! chat gateway, and serves the site until a shutdown signal arrives.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `timeline-config.yaml` (defaults if absent)
//! 2. Apply environment overrides (`TIMELINE_HOST`, `TIMELINE_PORT`,
//!    `GEMINI_API_KEY`, `TIMELINE_CHAT_BACKEND`)
//! 3. Initialize structured logging (tracing)
//! 4. Build and validate the event catalog
//! 5. Create the chat gateway for the configured backend
//! 6. Assemble the site state and compile templates
//! 7. Serve HTTP until `Ctrl-C` or `SIGTERM`

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use timeline_chat::create_gateway;
use timeline_core::Catalog;
use timeline_web::{AppState, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig, SiteConfig};
use crate::error::AppError;

const CONFIG_PATH: &str = "timeline-config.yaml";

/// Application entry point for the timeline server.
///
/// # Errors
///
/// Returns an error if configuration, catalog validation, template
/// compilation or the HTTP server fails.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1-2. Configuration first so the log level can come from it.
    let (mut config, from_file) = load_config()?;
    config.apply_env_overrides(|name| std::env::var(name).ok())?;

    // 3. Logging.
    init_logging(&config.logging);
    info!("timeline-server starting");
    if from_file {
        info!(path = CONFIG_PATH, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }
    info!(
        host = %config.server.host,
        port = config.server.port,
        chat_backend = ?config.chat.backend,
        model = %config.chat.model,
        "Effective configuration"
    );

    // 4. Catalog.
    let catalog = Catalog::vietnam_1954_1964()?;
    info!(events = catalog.len(), "Event catalog loaded");

    // 5. Chat gateway.
    let gateway = create_gateway(&config.chat);

    // 6. Site state.
    let state = AppState::new(catalog, gateway, config.chat.system_preamble.clone())?;
    info!("Site state assembled");

    // 7. Serve.
    start_server(&config.server, Arc::new(state)).await?;

    info!("timeline-server exiting");
    Ok(())
}

/// Load `timeline-config.yaml` from the working directory.
///
/// Returns the configuration and whether it came from the file. A missing
/// file yields defaults; an unreadable or malformed one is an error.
fn load_config() -> Result<(SiteConfig, bool), AppError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        let config = SiteConfig::from_file(config_path)?;
        Ok((config, true))
    } else {
        Ok((SiteConfig::default(), false))
    }
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the
/// configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    match logging.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}
