use std::sync::Arc;

use crate::generation::generator::ContentGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<ContentGenerator>,
    /// Reported by /health; generation works either way.
    pub llm_configured: bool,
}
