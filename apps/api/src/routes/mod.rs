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
        .route(
            "/api/v1/generate/content",
            post(handlers::handle_generate_content),
        )
        .route(
            "/api/v1/generate/description",
            post(handlers::handle_generate_description),
        )
        .with_state(state)
}
