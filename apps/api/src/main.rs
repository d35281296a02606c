mod config;
mod errors;
mod export;
mod formatting;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::HttpTextGenerator;
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

    info!("Starting Draftsmith API v{}", env!("CARGO_PKG_VERSION"));

    let generator = HttpTextGenerator::new(
        config.textgen_url.clone(),
        config.textgen_api_token.clone(),
    );
    info!(
        "Text generator initialized (model: {}, max_new_tokens: {})",
        config.textgen_model, config.max_new_tokens
    );
    info!(
        "PDF font assets: {} / {}",
        config.pdf_fonts.regular.display(),
        config.pdf_fonts.bold.display()
    );

    let state = AppState {
        generator: Arc::new(generator),
        config: config.clone(),
    };

    // The form is served from another origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
