mod config;
mod errors;
mod ingest;
mod llm_client;
mod models;
mod pipeline;
mod routes;
mod state;
mod toolkit;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ingest::{HttpPageSource, PdfResumeReader};
use crate::llm_client::GroqClient;
use crate::pipeline::Pipeline;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Coldreach API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client, shared by every request
    let llm = GroqClient::new(
        config.groq_api_key.clone(),
        config.groq_api_url.clone(),
        &config.chain,
    )?;
    info!(
        "LLM client initialized (model: {}, temperature: {})",
        config.chain.model_name, config.chain.temperature
    );

    let pipeline = Pipeline::new(Arc::new(llm), config.chain.clone());

    // Build app state
    let state = AppState {
        pipeline: Arc::new(pipeline),
        pages: Arc::new(HttpPageSource::new()?),
        resumes: Arc::new(PdfResumeReader),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
