use crate::advisor::orchestrator::ProfileAdvisor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Wraps the completion client built once at startup.
    pub advisor: ProfileAdvisor,
}
