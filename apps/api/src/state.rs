use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Read-only: submissions never share mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model collaborator. Default: HttpTextGenerator.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
