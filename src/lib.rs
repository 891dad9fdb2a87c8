use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;

pub mod config;
pub mod logging;
pub mod users;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/users", users::routes())
        .layer(middleware::from_fn(logging::request_logging_middleware))
}
