pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::advisor::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/profile/analyze", post(handlers::handle_analyze))
        .route("/api/v1/profile/resume", post(handlers::handle_resume))
        .route(
            "/api/v1/profile/cold-email",
            post(handlers::handle_cold_email),
        )
        .route("/api/v1/badges", get(handlers::handle_badges))
        .fallback(not_found)
        .with_state(state)
}
