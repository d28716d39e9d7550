//! Router construction

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{health, users};
use crate::state::AppState;

/// `/users` and `/users/{id}`, relative to wherever they are mounted.
pub fn users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

/// Normalizes a configured prefix to `/segment[/segment]`, or `None` for root.
pub fn normalize_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

/// Full application router: root banner, health probes and the users API
/// under `app.api_prefix`.
pub fn build_router(state: AppState) -> Router {
    let api = match normalize_prefix(&state.config.app.api_prefix) {
        Some(prefix) => Router::new().nest(&prefix, users_router()),
        None => users_router(),
    };

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .merge(api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
