pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/applications", post(handlers::handle_generate))
        .route("/api/v1/exports", post(handlers::handle_export))
        .route("/api/v1/resume-styles", get(handlers::handle_styles))
        .with_state(state)
}
