mod auth;
mod career;
mod chat;
mod config;
mod errors;
mod interview;
mod jobs;
mod learn;
mod llm_client;
mod progress;
mod quiz;
mod resume;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::store::UserStore;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::progress::store::ProgressStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Disha API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.groq_api_key.clone(), config.groq_model.clone());
    info!("LLM client initialized (model: {})", config.groq_model);

    // Build app state — both stores start empty, nothing persists
    let state = AppState {
        llm,
        config: config.clone(),
        users: Arc::new(UserStore::new()),
        progress: Arc::new(ProgressStore::new()),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config));

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS allowlist: the configured frontend origin plus the fixed local
/// development origins ("null" covers a frontend opened from file://).
fn cors_layer(config: &Config) -> CorsLayer {
    let fixed = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:5500",
        "http://127.0.0.1:5500",
        "null",
    ];

    let origins: Vec<HeaderValue> = std::iter::once(config.cors_origin.as_str())
        .chain(fixed)
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
